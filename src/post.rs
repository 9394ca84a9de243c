//! Core data structures for the postlog application.
//!
//! This module contains the primary Post type used throughout the
//! application.
use chrono::Local;
use serde::{Deserialize, Serialize};

/// The date format fixed at post creation, e.g. "June 5, 2026 03:14 PM".
pub const DATE_FORMAT: &str = "%B %-d, %Y %I:%M %p";

/// Represents a single post in our system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier for the post
    pub id: u64,
    /// Post title
    pub title: String,
    /// Post body text, newlines preserved
    pub content: String,
    /// Tags for organization
    pub tags: Vec<String>,
    /// Human-readable creation timestamp, formatted once and never recomputed
    pub date: String,
}

impl Post {
    /// Creates a new post with the given id, title, content and tags.
    ///
    /// The creation date is captured from local time at this moment and
    /// stored as a display string.
    pub fn new(id: u64, title: String, content: String, tags: Vec<String>) -> Self {
        let date = Local::now().format(DATE_FORMAT).to_string();

        Post {
            id,
            title,
            content,
            tags,
            date,
        }
    }
}

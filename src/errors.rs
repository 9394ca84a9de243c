//! Error types for the postlog application.
//!
//! This module defines custom error types that categorize different failures
//! that can occur during post management operations.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for the postlog application.
#[derive(Error, Debug)]
pub enum PostError {
    /// Errors related to file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A required field was empty after trimming.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// Post was not found when performing an operation.
    #[error("Post not found: {id}")]
    PostNotFound { id: u64 },

    /// Errors related to configuration.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Directory creation or access failed.
    #[error("Failed to create or access directory: {path}")]
    DirectoryError { path: PathBuf },

    /// file not found
    #[error("File not found: {file_path}")]
    FileNotFound { file_path: String },

    #[error("{message}")]
    EditorError { message: String },

    /// Generic application error with a custom message.
    #[error("{message}")]
    ApplicationError { message: String },
}

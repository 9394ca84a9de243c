//! Shared types for the postlog application.
use std::path::PathBuf;

use clap::Subcommand;

use crate::PostError;

/// A specialized Result type for postlog operations.
pub type Result<T> = std::result::Result<T, PostError>;

/// Available subcommands for the postlog application
#[derive(Subcommand)]
pub enum Commands {
    /// Publish a new post
    Post {
        /// Title of the post
        #[clap(short = 'T', long)]
        title: String,

        /// Body text of the post
        #[clap(short, long)]
        content: Option<String>,

        /// Path to a file containing the post's body
        #[clap(short, long)]
        file: Option<PathBuf>,

        /// Tags to associate with the post (comma-separated)
        #[clap(short = 't', long)]
        tags: Option<String>,
    },

    /// List stored posts
    List {
        /// Filter posts by tag
        #[clap(short, long)]
        tag: Option<String>,

        /// Limit the number of posts shown (0 means no limit)
        #[clap(short = 'n', long, default_value_t = 0)]
        limit: usize,

        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Render all posts as an HTML fragment
    Render {
        /// Write the markup to a file instead of stdout
        #[clap(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete a post by id
    Delete {
        /// Id of the post to delete
        id: u64,

        /// Skip confirmation prompt
        #[clap(short, long)]
        force: bool,
    },
}

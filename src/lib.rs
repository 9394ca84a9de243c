//! Local-first post journal library
//!
//! This library provides functionality for composing, storing, rendering,
//! and deleting posts with tags, mirrored to a single durable JSON file.

mod cli;
mod config;
mod confirm;
mod errors;
mod helper;
mod notify;
mod post;
mod render;
mod store;
mod types;

// Re-export key components
pub use cli::*;
pub use config::*;
pub use confirm::*;
pub use errors::*;
pub use helper::*;
pub use notify::*;
pub use post::*;
pub use render::*;
pub use store::*;
pub use types::*;

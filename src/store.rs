use std::{fs, io::Write, path::Path};

use log::{debug, error, info, trace};
use tempfile::NamedTempFile;

use crate::{load_posts_from_file, parse_tags, Config, Post, PostError, Result};

/// Manages the in-memory post list and its durable mirror on disk.
///
/// The list is ordered newest-first. Every mutation persists the full list
/// before returning, so the file and memory never drift apart.
pub struct PostStore {
    /// Application configuration
    config: Config,

    /// In-memory list of posts, newest first
    posts: Vec<Post>,

    /// The next id to hand out; always greater than any stored id
    next_id: u64,
}

impl PostStore {
    /// Creates a new PostStore instance with the provided configuration.
    ///
    /// The store starts empty; call [`PostStore::load`] to read the durable
    /// file before serving user actions.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            posts: Vec::new(),
            next_id: 1,
        }
    }

    /// Loads the post list from disk into memory.
    ///
    /// A missing file is treated as an empty list. An unreadable or
    /// unparseable file is a hard error: silently discarding stored posts
    /// would lose user data.
    ///
    /// # Returns
    ///
    /// The number of posts loaded in case of success or an error
    pub fn load(&mut self) -> Result<usize> {
        let path = self.config.posts_file();

        if !path.exists() {
            debug!("No posts file at {}, starting empty", path.display());
            self.posts = Vec::new();
            self.next_id = 1;
            return Ok(0);
        }

        let posts = load_posts_from_file(&path)?;
        let count = posts.len();

        self.next_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        self.posts = posts;

        info!("Loaded {} posts from {}", count, path.display());
        Ok(count)
    }

    /// Persists the full post list to disk using an atomic write.
    ///
    /// The list is serialized to a temporary file in the data directory and
    /// renamed over the posts file, so a crash mid-write never corrupts the
    /// stored list.
    pub fn persist(&self) -> Result<()> {
        let file_path = self.config.posts_file();
        debug!("Persisting {} posts to {}", self.posts.len(), file_path.display());

        // Ensure the data directory exists
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                debug!("Creating data directory: {}", parent.display());
                fs::create_dir_all(parent).map_err(|e| {
                    error!("Failed to create directory {}: {}", parent.display(), e);
                    PostError::DirectoryError {
                        path: parent.to_path_buf(),
                    }
                })?;
            }
        }

        // Create a temporary file in the same directory (for atomic operation)
        let dir = file_path.parent().unwrap_or_else(|| Path::new("."));
        let mut temp_file = NamedTempFile::new_in(dir).map_err(|e| {
            error!("Failed to create temporary file: {}", e);
            PostError::Io(e)
        })?;

        trace!("Serializing post list to JSON");
        let json = serde_json::to_string_pretty(&self.posts).map_err(|e| {
            error!("Failed to serialize posts: {}", e);
            PostError::Serialization(e)
        })?;

        temp_file.write_all(json.as_bytes()).map_err(|e| {
            error!("Failed to write to temporary file: {}", e);
            PostError::Io(e)
        })?;

        temp_file.flush().map_err(|e| {
            error!("Failed to flush temporary file: {}", e);
            PostError::Io(e)
        })?;

        // Atomically move the temporary file to the target location
        temp_file.persist(&file_path).map_err(|e| {
            error!("Failed to persist file {}: {}", file_path.display(), e.error);
            PostError::Io(e.error)
        })?;

        trace!("Post list persisted successfully");
        Ok(())
    }

    /// Validates and submits a new post.
    ///
    /// Title and content are trimmed; if either is empty afterwards, an
    /// [`PostError::EmptyField`] is returned and neither memory nor disk is
    /// touched. On success the new post is prepended (newest first) and the
    /// full list is persisted before returning.
    pub fn submit_post(
        &mut self,
        title: &str,
        content: &str,
        tags_input: Option<String>,
    ) -> Result<&Post> {
        let title = title.trim();
        let content = content.trim();

        if title.is_empty() {
            return Err(PostError::EmptyField { field: "title" });
        }
        if content.is_empty() {
            return Err(PostError::EmptyField { field: "content" });
        }

        let tags = parse_tags(tags_input);
        let post = Post::new(self.next_id, title.to_string(), content.to_string(), tags);
        self.next_id += 1;

        info!("Submitting post {}: {}", post.id, post.title);
        self.posts.insert(0, post);
        self.persist()?;

        Ok(&self.posts[0])
    }

    /// Removes the post with the given id.
    ///
    /// Returns the removed post, or `None` when no post matches. An unknown
    /// id is a no-op and does not persist. Relative order of the remaining
    /// posts is unchanged.
    pub fn remove_post(&mut self, id: u64) -> Result<Option<Post>> {
        let index = match self.posts.iter().position(|p| p.id == id) {
            Some(index) => index,
            None => {
                debug!("Remove requested for unknown post id: {}", id);
                return Ok(None);
            }
        };

        let removed = self.posts.remove(index);
        self.persist()?;

        info!("Post {} removed", id);
        Ok(Some(removed))
    }

    /// Retrieves a post by its id
    pub fn get_post(&self, id: u64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// All posts, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Retrieves all posts carrying a specific tag (case-insensitive).
    pub fn posts_by_tag(&self, tag: &str) -> Vec<&Post> {
        let search_tag = tag.trim().to_lowercase();

        self.posts
            .iter()
            .filter(|post| {
                post.tags
                    .iter()
                    .any(|t| t.trim().to_lowercase() == search_tag)
            })
            .collect()
    }
}

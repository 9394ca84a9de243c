use std::{fs, path::Path};

use log::{debug, error, trace};

use crate::{Post, PostError, Result};

/// Helper method to load the full post list from file
pub fn load_posts_from_file(path: &Path) -> Result<Vec<Post>> {
    debug!("Loading posts from file: {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| {
        error!("Failed to open posts file {}: {}", path.display(), e);
        PostError::Io(e)
    })?;

    let posts: Vec<Post> = serde_json::from_str(&content)?;

    // Validate posts
    for post in &posts {
        if post.title.is_empty() || post.content.is_empty() {
            let error_mgs = format!(
                "Post {} from {} has an empty title or content",
                post.id,
                path.display()
            );
            error!("{}", error_mgs);
            return Err(PostError::ApplicationError { message: error_mgs });
        }
    }

    trace!("Successfully loaded {} posts", posts.len());
    Ok(posts)
}

// Helper method for parsing tags
pub fn parse_tags(tags: Option<String>) -> Vec<String> {
    tags.map(|t| {
        t.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tags_trims_and_drops_empty_tokens() {
        assert_eq!(
            parse_tags(Some("a, b ,,c".to_string())),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn parse_tags_handles_none_and_blank_input() {
        assert!(parse_tags(None).is_empty());
        assert!(parse_tags(Some("  ,  , ".to_string())).is_empty());
    }

    #[test]
    fn parse_tags_preserves_order() {
        assert_eq!(
            parse_tags(Some("zebra,apple,mango".to_string())),
            vec!["zebra".to_string(), "apple".to_string(), "mango".to_string()]
        );
    }

    #[test]
    fn load_rejects_unparseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(&path, "{not json").unwrap();

        let result = load_posts_from_file(&path);
        assert!(matches!(result, Err(PostError::Serialization(_))));
    }
}

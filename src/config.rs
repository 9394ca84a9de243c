use std::{fs, path::PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use which::which;

use crate::{PostError, Result};

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory where the posts file is stored
    pub data_dir: PathBuf,

    /// Default editor command for composing post content
    pub editor_command: Option<String>,

    /// Whether to style terminal output with colors
    pub use_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("postlog");

        Config {
            data_dir,
            editor_command: None,
            use_color: true,
        }
    }
}

impl Config {
    /// The default location of the config file under the platform config dir.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("postlog")
            .join("config.json")
    }

    /// Loads the configuration from the given path, or falls back to defaults
    /// when no config file exists yet.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let path = path.unwrap_or_else(Config::default_path);

        if !path.exists() {
            debug!(
                "No config file at {}, using defaults",
                path.display()
            );
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config =
            serde_json::from_str(&content).map_err(|e| PostError::ConfigError {
                message: format!("Failed to parse config file {}: {}", path.display(), e),
            })?;

        Ok(config)
    }

    /// The path of the single durable posts file.
    pub fn posts_file(&self) -> PathBuf {
        self.data_dir.join("posts.json")
    }

    // This method provides smart fallbacks when no editor is configured
    pub fn get_editor_command(&self) -> String {
        // First try the configured editor
        if let Some(editor) = &self.editor_command {
            return editor.clone();
        }

        // Then try environment variable
        if let Ok(editor) = std::env::var("EDITOR") {
            return editor;
        }

        // Fall back to platform defaults
        if cfg!(windows) {
            "notepad".to_string()
        } else if cfg!(target_os = "macos") {
            "open -t".to_string()
        } else {
            // Try common Linux editors
            for editor in &["nano", "vim", "vi", "emacs"] {
                if which(editor).is_ok() {
                    return editor.to_string();
                }
            }
            "nano".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posts_file_lives_under_data_dir() {
        let config = Config {
            data_dir: PathBuf::from("/tmp/postlog-test"),
            editor_command: None,
            use_color: true,
        };
        assert_eq!(
            config.posts_file(),
            PathBuf::from("/tmp/postlog-test/posts.json")
        );
    }

    #[test]
    fn load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path().join("nope.json"))).unwrap();
        assert!(config.use_color);
    }

    #[test]
    fn load_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json at all").unwrap();

        let result = Config::load(Some(path));
        assert!(matches!(result, Err(PostError::ConfigError { .. })));
    }
}

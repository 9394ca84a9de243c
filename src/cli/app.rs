//! CLI module for the postlog application
//!
//! This module handles the command-line interface for interacting with the
//! post store.
use std::{
    fs::{read_to_string, write, OpenOptions},
    io::Write as IoWrite,
    path::{Path, PathBuf},
    process::Command,
};

use log::info;

use shell_words::split;
use tempfile::Builder;

use crate::{
    render_posts, Commands, Config, Confirm, NotificationKind, Notify, Post, PostError,
    PostStore, Result,
};

/// CLI Application handler - processes CLI commands and interfaces with PostStore
pub struct App {
    /// The post store backend
    store: PostStore,

    /// Application configuration
    config: Config,

    /// Sink for transient user feedback
    notifier: Box<dyn Notify>,

    /// Answers the deletion confirmation prompt
    confirm: Box<dyn Confirm>,
}

impl App {
    /// Create a new CLI application with the given store and config
    pub fn new(
        store: PostStore,
        config: Config,
        notifier: Box<dyn Notify>,
        confirm: Box<dyn Confirm>,
    ) -> Self {
        Self {
            store,
            config,
            notifier,
            confirm,
        }
    }

    /// Run the CLI application with the given command
    pub fn run(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::Post {
                title,
                content,
                file,
                tags,
            } => self.handle_post(title, content, file, tags)?,

            Commands::List { tag, limit, json } => self.handle_list(tag, limit, json)?,

            Commands::Render { output } => self.handle_render(output)?,

            Commands::Delete { id, force } => self.handle_delete(id, force)?,
        }

        Ok(())
    }

    fn handle_post(
        &mut self,
        title: String,
        content: Option<String>,
        file: Option<PathBuf>,
        tags: Option<String>,
    ) -> Result<()> {
        // Get content based on the provided options
        let body = match (content, file) {
            (Some(c), _) => c,
            (_, Some(file_path)) => {
                if !file_path.exists() {
                    return Err(PostError::FileNotFound {
                        file_path: file_path.display().to_string(),
                    });
                }
                read_to_string(file_path)?
            }
            (None, None) => self.open_editor_for_content(&title)?,
        };

        let post = self.store.submit_post(&title, &body, tags)?;
        let id = post.id;

        self.notifier
            .notify("Post published successfully!", NotificationKind::Success);
        println!("Post created with id: {}", id);
        Ok(())
    }

    fn open_editor_for_content(&self, title: &str) -> Result<String> {
        // Create a temporary file with .md extension
        let temp_file = Builder::new().suffix(".md").tempfile()?;
        let temp_path = temp_file.path().to_path_buf();

        // Get editor from config or environment
        let editor_cmd = self.config.get_editor_command();

        // Write template to the temp file
        self.write_editor_template(&temp_path, title)?;

        // Open editor
        info!("Opening editor to write the post body. Save and exit when done...");
        self.launch_editor(&editor_cmd, &temp_path)?;

        // Read and process the content
        let content = read_to_string(&temp_path)?;
        Ok(self.process_editor_content(content))
    }

    fn write_editor_template(&self, path: &Path, title: &str) -> Result<()> {
        let mut file = OpenOptions::new().write(true).open(path)?;

        // Write template with helpful comments
        writeln!(file, "# {}", title)?;
        writeln!(file)?;
        writeln!(file, "<!-- ")?;
        writeln!(file, "Write your post body below.")?;
        writeln!(
            file,
            "Lines that start with <!-- and end with --> are comments and will be ignored."
        )?;
        writeln!(file, "Save and exit the editor when you're done.")?;
        writeln!(file, "-->")?;
        writeln!(file)?;

        Ok(())
    }

    fn launch_editor(&self, editor_cmd: &str, file_path: &Path) -> Result<()> {
        // Convert file path to string once
        let path_str = file_path.to_string_lossy();

        // Handle shell-like command parsing
        let args = split(editor_cmd).map_err(|e| PostError::EditorError {
            message: format!("Failed to parse editor command: {}", e),
        })?;

        if args.is_empty() {
            return Err(PostError::EditorError {
                message: "Empty editor command".to_string(),
            });
        }

        // First word is the program name, rest are arguments
        let program = &args[0];

        // Create command
        let mut command = Command::new(program);

        // Add any arguments from the original command
        if args.len() > 1 {
            command.args(&args[1..]);
        }

        // Add the file path as the final argument
        command.arg(path_str.as_ref());

        // Execute the command
        let status = command.status()?;

        if !status.success() {
            return Err(PostError::EditorError {
                message: "Editor exited with non-zero status".to_string(),
            });
        }

        Ok(())
    }

    fn process_editor_content(&self, content: String) -> String {
        // Remove HTML comments from content
        content
            .lines()
            .filter(|line| {
                !line.trim_start().starts_with("<!--") && !line.trim_end().ends_with("-->")
            })
            .collect::<Vec<&str>>()
            .join("\n")
    }

    /// List posts according to provided filters and options
    fn handle_list(&self, tag: Option<String>, limit: usize, json: bool) -> Result<()> {
        let mut posts: Vec<&Post> = match tag {
            Some(tag_value) => self.store.posts_by_tag(&tag_value),
            None => self.store.posts().iter().collect(),
        };

        if limit > 0 && posts.len() > limit {
            posts.truncate(limit);
        }

        if json {
            self.display_posts_json(&posts)?;
        } else {
            self.display_posts_text(&posts)?;
        }

        Ok(())
    }

    /// Display posts in JSON format
    fn display_posts_json(&self, posts: &[&Post]) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(posts)?);
        Ok(())
    }

    /// Display posts in text format
    fn display_posts_text(&self, posts: &[&Post]) -> Result<()> {
        if posts.is_empty() {
            println!("No posts yet. Write your first one!");
            return Ok(());
        }

        // Use terminal width for formatting if available
        let term_width = terminal_size::terminal_size()
            .map(|(w, _)| w.0 as usize)
            .unwrap_or(80);

        for (i, post) in posts.iter().enumerate() {
            // Add separator between posts (except before the first)
            if i > 0 {
                println!("{}", "-".repeat(term_width.min(50)));
            }

            println!("ID: {} | {}", post.id, post.date);
            println!("Title: {}", console::style(&post.title).bold());

            // Print tags if any
            if !post.tags.is_empty() {
                let tags = post
                    .tags
                    .iter()
                    .map(|tag| format!("# {}", tag))
                    .collect::<Vec<_>>()
                    .join(" ");

                println!("Tags: {}", console::style(tags).cyan());
            }

            println!("\n{}", post.content);
        }

        println!(
            "\n{} post{}",
            posts.len(),
            if posts.len() == 1 { "" } else { "s" }
        );

        Ok(())
    }

    /// Render all posts as HTML, to stdout or a file
    fn handle_render(&self, output: Option<PathBuf>) -> Result<()> {
        let html = render_posts(self.store.posts());

        match output {
            Some(path) => {
                write(&path, html)?;
                println!("Rendered {} posts to {}", self.store.posts().len(), path.display());
            }
            None => print!("{}", html),
        }

        Ok(())
    }

    fn handle_delete(&mut self, id: u64, force: bool) -> Result<()> {
        // Step 1: Fetch the post to be deleted (to verify it exists and show details in the prompt)
        let post = match self.store.get_post(id) {
            Some(post) => post.clone(),
            None => {
                return Err(PostError::PostNotFound { id });
            }
        };

        // Step 2: Show post details and prompt for confirmation (unless force flag is set)
        if !force {
            println!("You are about to delete the following post:");
            println!("ID:      {}", post.id);
            println!("Title:   {}", post.title);
            println!("Tags:    {}", post.tags.join(", "));
            println!("Created: {}", post.date);

            // Show content preview (first line or two)
            if !post.content.is_empty() {
                let preview = post.content.lines().take(2).collect::<Vec<_>>().join("\n");

                println!("\nContent preview:");
                println!(
                    "{}{}",
                    preview,
                    if post.content.lines().count() > 2 {
                        "..."
                    } else {
                        ""
                    }
                );
            }

            println!("\nThis action cannot be undone!");
            if !self
                .confirm
                .confirm("Are you sure you want to delete this post?")?
            {
                println!("Deletion cancelled.");
                return Ok(());
            }
        }

        // Step 3: Delete the post
        self.store.remove_post(id)?;

        // Step 4: Provide feedback
        self.notifier
            .notify("Post deleted successfully!", NotificationKind::Danger);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedConfirm, NullNotifier};
    use tempfile::TempDir;

    fn test_app(accept_delete: bool) -> (App, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            editor_command: None,
            use_color: false,
        };
        let store = PostStore::new(config.clone());
        let app = App::new(
            store,
            config,
            Box::new(NullNotifier),
            Box::new(FixedConfirm(accept_delete)),
        );
        (app, dir)
    }

    #[test]
    fn post_command_stores_the_post() {
        let (mut app, _dir) = test_app(true);

        app.run(Commands::Post {
            title: "Hello".to_string(),
            content: Some("Body".to_string()),
            file: None,
            tags: Some("a,b".to_string()),
        })
        .unwrap();

        assert_eq!(app.store.posts().len(), 1);
        assert_eq!(app.store.posts()[0].tags, vec!["a", "b"]);
    }

    #[test]
    fn declined_confirmation_leaves_the_store_unchanged() {
        let (mut app, _dir) = test_app(false);

        app.store.submit_post("Keep me", "body", None).unwrap();
        let id = app.store.posts()[0].id;
        let before = app.store.posts().to_vec();

        app.handle_delete(id, false).unwrap();

        assert_eq!(app.store.posts(), before.as_slice());
    }

    #[test]
    fn accepted_confirmation_removes_the_post() {
        let (mut app, _dir) = test_app(true);

        app.store.submit_post("Doomed", "body", None).unwrap();
        let id = app.store.posts()[0].id;

        app.handle_delete(id, false).unwrap();

        assert!(app.store.posts().is_empty());
    }

    #[test]
    fn force_skips_the_prompt() {
        let (mut app, _dir) = test_app(false);

        app.store.submit_post("Doomed", "body", None).unwrap();
        let id = app.store.posts()[0].id;

        app.handle_delete(id, true).unwrap();

        assert!(app.store.posts().is_empty());
    }

    #[test]
    fn deleting_an_unknown_id_is_reported() {
        let (mut app, _dir) = test_app(true);

        let result = app.handle_delete(404, true);
        assert!(matches!(result, Err(PostError::PostNotFound { id: 404 })));
    }

    #[test]
    fn empty_submission_is_rejected_without_mutation() {
        let (mut app, _dir) = test_app(true);

        let result = app.run(Commands::Post {
            title: "  ".to_string(),
            content: Some("Body".to_string()),
            file: None,
            tags: None,
        });

        assert!(matches!(result, Err(PostError::EmptyField { .. })));
        assert!(app.store.posts().is_empty());
    }

    #[test]
    fn render_writes_html_to_the_output_file() {
        let (mut app, dir) = test_app(true);

        app.store
            .submit_post("Hello", "line one\nline two", None)
            .unwrap();

        let out = dir.path().join("posts.html");
        app.handle_render(Some(out.clone())).unwrap();

        let html = std::fs::read_to_string(out).unwrap();
        assert!(html.contains("post-card"));
        assert!(html.contains("line one<br>line two"));
    }
}

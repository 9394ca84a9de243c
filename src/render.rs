//! Pure HTML projection of the post list.
//!
//! Rendering takes the post slice as input and produces a markup string,
//! nothing else. Escaping is an explicit step applied to every piece of
//! user-supplied text before it is embedded.

use crate::Post;

/// Shown when the list is empty, instead of the post container.
const EMPTY_STATE: &str =
    "<div class=\"no-posts\">No posts yet. Write your first one!</div>\n";

/// Renders arbitrary text safe for embedding in markup.
///
/// Every character that could be interpreted as markup is replaced with its
/// entity. `&` is handled first so already-escaped entities are not produced
/// by a later replacement.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the full post list to an HTML fragment.
///
/// An empty list yields only the empty-state placeholder; otherwise a
/// container with one card per post, in the order given (newest first).
pub fn render_posts(posts: &[Post]) -> String {
    if posts.is_empty() {
        return EMPTY_STATE.to_string();
    }

    let mut html = String::from("<div class=\"posts\">\n");
    for post in posts {
        html.push_str(&render_card(post));
    }
    html.push_str("</div>\n");
    html
}

/// Renders a single post card: escaped title, date, escaped content with
/// newlines as line breaks, one chip per tag, and a delete control carrying
/// the post id.
fn render_card(post: &Post) -> String {
    let mut card = String::new();

    card.push_str("<article class=\"post-card\">\n");
    card.push_str(&format!(
        "  <div class=\"post-header\">\n    <h3 class=\"post-title\">{}</h3>\n    <span class=\"post-date\">{}</span>\n  </div>\n",
        escape(&post.title),
        escape(&post.date),
    ));

    let content = escape(&post.content).replace('\n', "<br>");
    card.push_str(&format!(
        "  <div class=\"post-content\">{}</div>\n",
        content
    ));

    if !post.tags.is_empty() {
        card.push_str("  <div class=\"post-tags\">");
        for tag in &post.tags {
            card.push_str(&format!("<span class=\"tag\"># {}</span>", escape(tag)));
        }
        card.push_str("</div>\n");
    }

    card.push_str(&format!(
        "  <div class=\"post-actions\"><button class=\"btn btn-danger\" data-delete=\"{}\">Delete</button></div>\n",
        post.id
    ));
    card.push_str("</article>\n");
    card
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: u64, title: &str, content: &str, tags: &[&str]) -> Post {
        Post {
            id,
            title: title.to_string(),
            content: content.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            date: "June 5, 2026 03:14 PM".to_string(),
        }
    }

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("say \"hi\""), "say &quot;hi&quot;");
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape("plain text 123"), "plain text 123");
    }

    #[test]
    fn empty_list_shows_only_the_placeholder() {
        let html = render_posts(&[]);
        assert!(html.contains("no-posts"));
        assert!(!html.contains("post-card"));
    }

    #[test]
    fn non_empty_list_hides_the_placeholder() {
        let posts = vec![sample(1, "Hello", "World", &[])];
        let html = render_posts(&posts);
        assert!(html.contains("post-card"));
        assert!(!html.contains("no-posts"));
    }

    #[test]
    fn card_shows_title_date_and_delete_control() {
        let posts = vec![sample(42, "Hello", "World", &[])];
        let html = render_posts(&posts);
        assert!(html.contains("<h3 class=\"post-title\">Hello</h3>"));
        assert!(html.contains("June 5, 2026 03:14 PM"));
        assert!(html.contains("data-delete=\"42\""));
    }

    #[test]
    fn title_markup_renders_as_literal_text() {
        let posts = vec![sample(1, "<script>hack</script> & co", "body", &[])];
        let html = render_posts(&posts);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;hack&lt;/script&gt; &amp; co"));
    }

    #[test]
    fn content_newlines_become_line_breaks() {
        let posts = vec![sample(1, "T", "line one\nline two", &[])];
        let html = render_posts(&posts);
        assert!(html.contains("line one<br>line two"));
    }

    #[test]
    fn each_tag_gets_a_chip() {
        let posts = vec![sample(1, "T", "body", &["rust", "notes"])];
        let html = render_posts(&posts);
        assert!(html.contains("<span class=\"tag\"># rust</span>"));
        assert!(html.contains("<span class=\"tag\"># notes</span>"));
    }

    #[test]
    fn tagless_post_omits_the_tag_row() {
        let posts = vec![sample(1, "T", "body", &[])];
        assert!(!render_posts(&posts).contains("post-tags"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let posts = vec![
            sample(2, "Second", "b", &["x"]),
            sample(1, "First", "a", &[]),
        ];
        assert_eq!(render_posts(&posts), render_posts(&posts));
    }

    #[test]
    fn cards_appear_in_list_order() {
        let posts = vec![sample(2, "Newest", "b", &[]), sample(1, "Oldest", "a", &[])];
        let html = render_posts(&posts);
        let newest = html.find("Newest").unwrap();
        let oldest = html.find("Oldest").unwrap();
        assert!(newest < oldest);
    }
}

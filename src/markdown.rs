//! Markdown Rendering
//!
//! Project descriptions and task bodies are Markdown. Raw HTML in the source
//! is shown as text instead of being injected into the page, and links or
//! images with a script-capable scheme lose their target.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

const BLOCKED_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

fn is_blocked_url(url: &str) -> bool {
    // Browsers ignore whitespace and control characters inside the scheme
    let scheme: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();
    BLOCKED_SCHEMES.iter().any(|blocked| scheme.starts_with(blocked))
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_blocked_url(&url) {
        CowStr::Borrowed("#")
    } else {
        url
    }
}

/// Render Markdown to an HTML string
pub fn parse_markdown(text: &str) -> String {
    let events = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

/// Render for inline use (strips the outer `<p>` of a single paragraph)
pub fn parse_markdown_inline(text: &str) -> String {
    let html = parse_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .filter(|s| !s.contains("<p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

/// First non-empty line, for list previews
pub fn summary_line(text: &str) -> &str {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let html = parse_markdown("# Title\n\n**bold** and ~~gone~~");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("hi <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_script_links_lose_their_target() {
        let html = parse_markdown("[click](javascript:alert(document.cookie))");
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r##"<a href="#">click</a>"##));

        let html = parse_markdown("[x](JavaScript:alert(1)) ![y](data:text/html;base64,AAAA)");
        assert!(!html.to_lowercase().contains("javascript:"));
        assert!(!html.contains("data:"));

        let html = parse_markdown("<vbscript:msgbox(1)>");
        assert!(!html.contains(r#"href="vbscript:"#));
    }

    #[test]
    fn test_ordinary_links_are_kept() {
        let html = parse_markdown("[docs](https://example.com/a?b=1) and [rel](/project/2)");
        assert!(html.contains(r#"href="https://example.com/a?b=1""#));
        assert!(html.contains(r#"href="/project/2""#));
    }

    #[test]
    fn test_inline_strips_single_paragraph() {
        assert_eq!(parse_markdown_inline("*x*"), "<em>x</em>");
        let two = parse_markdown_inline("a\n\nb");
        assert!(two.starts_with("<p>a</p>"));
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(summary_line("\n  first  \nsecond"), "first");
        assert_eq!(summary_line(""), "");
    }
}

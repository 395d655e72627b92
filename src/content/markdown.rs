//! Markdown-subset rendering
//!
//! Blog bodies use a small markdown dialect: headers, bold, italic, links and
//! single-line list items. Rendering is an ordered sequence of substitutions
//! over the whole text, so every input produces some output. Later passes see
//! the output of earlier ones; in particular bold must run before italic.
//!
//! List items are emitted as bare `<li>` fragments with no `<ul>`/`<ol>`
//! container.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// Passes before links, applied in this order
    static ref INLINE_PASSES: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"(?m)^### (.*)$").unwrap(), "<h3>$1</h3>"),
        (Regex::new(r"(?m)^## (.*)$").unwrap(), "<h2>$1</h2>"),
        (Regex::new(r"(?m)^# (.*)$").unwrap(), "<h1>$1</h1>"),
        (Regex::new(r"\*\*(.*?)\*\*").unwrap(), "<strong>$1</strong>"),
        (Regex::new(r"\*(.*?)\*").unwrap(), "<em>$1</em>"),
    ];

    static ref LINK: Regex = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap();

    /// Passes after links. Checkbox items may appear anywhere on a line and
    /// run before the generic bullet, which would swallow them.
    static ref LIST_PASSES: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"(?im)- \[x\] (.*)$").unwrap(), "<li>✓ $1</li>"),
        (Regex::new(r"(?m)- \[ \] (.*)$").unwrap(), "<li>☐ $1</li>"),
        (Regex::new(r"(?m)^- (.*)$").unwrap(), "<li>$1</li>"),
        (Regex::new(r"(?m)^\d+\. (.*)$").unwrap(), "<li>$1</li>"),
    ];
}

/// Link schemes kept when rendering untrusted content
const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Renderer for the blog markdown subset
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    escape_html: bool,
}

impl MarkdownRenderer {
    /// Create a renderer that trusts its input
    pub fn new() -> Self {
        Self { escape_html: false }
    }

    /// Create a renderer that HTML-escapes the raw text before substitution.
    ///
    /// Required whenever content does not come from the trusted static
    /// collection.
    pub fn escaping() -> Self {
        Self { escape_html: true }
    }

    /// Create with explicit settings
    pub fn with_options(escape_html: bool) -> Self {
        Self { escape_html }
    }

    pub fn escapes_html(&self) -> bool {
        self.escape_html
    }

    /// Render markdown-subset text to an HTML fragment
    pub fn render(&self, raw: &str) -> String {
        let mut html = raw.replace("\r\n", "\n");
        if self.escape_html {
            html = html_escape(&html);
        }

        for (pattern, replacement) in INLINE_PASSES.iter() {
            html = pattern.replace_all(&html, *replacement).into_owned();
        }

        html = if self.escape_html {
            LINK.replace_all(&html, |caps: &Captures| {
                if is_safe_href(&caps[2]) {
                    format!(r#"<a href="{}">{}</a>"#, &caps[2], &caps[1])
                } else {
                    tracing::debug!("Dropping link with unsafe target {:?}", &caps[2]);
                    caps[1].to_string()
                }
            })
            .into_owned()
        } else {
            LINK.replace_all(&html, r#"<a href="$2">$1</a>"#).into_owned()
        };

        for (pattern, replacement) in LIST_PASSES.iter() {
            html = pattern.replace_all(&html, *replacement).into_owned();
        }

        html.replace("\n\n", "</p><p>").replace('\n', "<br>")
    }
}

/// Whether a link target is relative or uses an allowed scheme.
///
/// Browsers ignore ASCII whitespace and control characters inside a scheme,
/// so those are removed before looking for one.
fn is_safe_href(href: &str) -> bool {
    let href: String = href
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect();

    match href.find(|c| matches!(c, ':' | '/' | '?' | '#')) {
        Some(i) if href[i..].starts_with(':') => {
            let scheme = href[..i].to_ascii_lowercase();
            SAFE_SCHEMES.contains(&scheme.as_str())
        }
        _ => true,
    }
}

/// Escape the characters significant in HTML text and attributes
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(raw: &str) -> String {
        MarkdownRenderer::new().render(raw)
    }

    #[test]
    fn test_header_paragraph_bold_italic() {
        assert_eq!(
            render("# Title\n\nSome **bold** and *italic* text."),
            "<h1>Title</h1></p><p>Some <strong>bold</strong> and <em>italic</em> text."
        );
    }

    #[test]
    fn test_header_levels() {
        assert_eq!(
            render("### Three\n## Two\n# One"),
            "<h3>Three</h3><br><h2>Two</h2><br><h1>One</h1>"
        );
    }

    #[test]
    fn test_header_requires_line_start() {
        assert_eq!(render("not a # header"), "not a # header");
        assert_eq!(render("#NoSpace"), "#NoSpace");
    }

    #[test]
    fn test_checkboxes() {
        assert_eq!(
            render("- [x] Done\n- [ ] Todo"),
            "<li>✓ Done</li><br><li>☐ Todo</li>"
        );
        assert_eq!(render("- [X] Upper"), "<li>✓ Upper</li>");
    }

    #[test]
    fn test_checkboxes_anywhere_on_line() {
        assert_eq!(
            render("  - [x] indented done\n  - [ ] indented todo"),
            "  <li>✓ indented done</li><br>  <li>☐ indented todo</li>"
        );
        assert_eq!(render("Tasks: - [x] done"), "Tasks: <li>✓ done</li>");
        // plain bullets still need the line start
        assert_eq!(render("  - indented"), "  - indented");
    }

    #[test]
    fn test_list_items() {
        assert_eq!(
            render("- one\n- two\n\n1. first\n22. second"),
            "<li>one</li><br><li>two</li></p><p><li>first</li><br><li>second</li>"
        );
    }

    #[test]
    fn test_bold_inside_list_item() {
        assert_eq!(
            render("- **Speed**: fast"),
            "<li><strong>Speed</strong>: fast</li>"
        );
    }

    #[test]
    fn test_links() {
        assert_eq!(
            render("[Contact us](/contact) today"),
            r#"<a href="/contact">Contact us</a> today"#
        );
        assert_eq!(
            render("[a](/x) and [b](/y)"),
            r#"<a href="/x">a</a> and <a href="/y">b</a>"#
        );
    }

    #[test]
    fn test_unbalanced_markers_do_not_fail() {
        assert_eq!(render("**open"), "<em></em>open");
        assert_eq!(render("a * b"), "a * b");
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(render("# A\r\n\r\nb"), "<h1>A</h1></p><p>b");
    }

    #[test]
    fn test_raw_html_passes_through_by_default() {
        assert_eq!(render("<script>x</script>"), "<script>x</script>");
    }

    #[test]
    fn test_escaping_renderer() {
        let renderer = MarkdownRenderer::escaping();
        assert!(renderer.escapes_html());
        assert_eq!(
            renderer.render("# <b>Hi</b>\n[x](/a?b=1&c=2)"),
            r#"<h1>&lt;b&gt;Hi&lt;/b&gt;</h1><br><a href="/a?b=1&amp;c=2">x</a>"#
        );
    }

    #[test]
    fn test_escaping_renderer_drops_unsafe_links() {
        let renderer = MarkdownRenderer::escaping();
        assert_eq!(renderer.render("[x](javascript:alert(1))"), "x)");
        assert_eq!(renderer.render("[x](JavaScript:void)"), "x");
        assert_eq!(renderer.render("[x](java\tscript:void)"), "x");
        assert_eq!(renderer.render("[x](data:text/html,hi)"), "x");
        assert_eq!(
            renderer.render("[a](https://example.com) [b](mailto:hi@example.com) [c](#top)"),
            r##"<a href="https://example.com">a</a> <a href="mailto:hi@example.com">b</a> <a href="#top">c</a>"##
        );
        assert_eq!(
            renderer.render("[d](/blog/post:1)"),
            r#"<a href="/blog/post:1">d</a>"#
        );
        // trusted content keeps every link
        assert_eq!(
            render("[x](javascript:void)"),
            r#"<a href="javascript:void">x</a>"#
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render(""), "");
    }
}

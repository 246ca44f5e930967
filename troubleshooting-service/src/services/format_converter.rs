//! Markdown to HTML rendering for the troubleshooting guide.
//!
//! This is a fixed sequence of pattern substitutions, not a markdown parser.
//! Input comes from the bundled guide, so nothing is HTML-escaped.

use once_cell::sync::Lazy;
use regex::Regex;

static H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# ([^\r\n]*)").unwrap());
static H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## ([^\r\n]*)").unwrap());
static H3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### ([^\r\n]*)").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
// Single line and backtick-free, so fence markers are left for FENCE.
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\r\n]+)`").unwrap());
static NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n").unwrap());
static FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```(.*?)```").unwrap());

/// Applies the rewrite rules in order. Fences run after newline conversion,
/// so code blocks keep `<br>` separators instead of raw line breaks.
pub fn to_html(markdown: &str) -> String {
    let rules: [(&Regex, &str); 8] = [
        (&H1, "<h1>${1}</h1>"),
        (&H2, "<h2>${1}</h2>"),
        (&H3, "<h3>${1}</h3>"),
        (&BOLD, "<strong>${1}</strong>"),
        (&ITALIC, "<em>${1}</em>"),
        (&INLINE_CODE, "<code>${1}</code>"),
        (&NEWLINE, "<br>"),
        (&FENCE, "<pre><code>${1}</code></pre>"),
    ];

    rules
        .iter()
        .fold(markdown.to_string(), |html, (pattern, replacement)| {
            pattern.replace_all(&html, *replacement).into_owned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_by_level() {
        assert_eq!(
            to_html("# One\n## Two\n### Three"),
            "<h1>One</h1><br><h2>Two</h2><br><h3>Three</h3>"
        );
    }

    #[test]
    fn heading_markers_only_count_at_line_start() {
        assert_eq!(to_html("see # here"), "see # here");
        assert_eq!(to_html("#### Four"), "#### Four");
    }

    #[test]
    fn inline_emphasis_and_code() {
        assert_eq!(
            to_html("Some **bold**, *soft* and `code`."),
            "Some <strong>bold</strong>, <em>soft</em> and <code>code</code>."
        );
    }

    #[test]
    fn fenced_block_keeps_line_breaks_as_br() {
        let html = to_html("# Title\n\nRun:\n```\nls -la\n```");
        assert_eq!(
            html,
            "<h1>Title</h1><br><br>Run:<br><pre><code><br>ls -la<br></code></pre>"
        );
    }

    #[test]
    fn fence_language_tag_stays_inside_block() {
        assert_eq!(
            to_html("```bash\necho hi\n```"),
            "<pre><code>bash<br>echo hi<br></code></pre>"
        );
    }

    #[test]
    fn crlf_is_one_break() {
        assert_eq!(to_html("## A\r\nb\r\n"), "<h2>A</h2><br>b<br>");
    }

    #[test]
    fn markup_is_not_escaped() {
        assert_eq!(to_html("<b>raw</b> & more"), "<b>raw</b> & more");
    }

    #[test]
    fn deterministic() {
        let guide = include_str!("../../TROUBLESHOOTING.md");
        assert_eq!(to_html(guide), to_html(guide));
        assert!(to_html(guide).starts_with("<h1>Troubleshooting Guide</h1>"));
    }
}

//! Comment stripping and line joining ahead of parsing.

use std::sync::OnceLock;

use regex::Regex;

use crate::text::explode;

/// Line comments (`// …` up to the end of the line) or block comments without
/// any `*` or `/` inside them.
const COMMENT_PATTERN: &str = r"(//[^\r\n|^]+)|(/\*[^*/]+\*/)";

fn comment_regex() -> &'static Regex {
    static COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();
    COMMENT_REGEX.get_or_init(|| Regex::new(COMMENT_PATTERN).expect("comment pattern is valid"))
}

/// Remove comments from `css` in a single scan.
///
/// Block comments that contain a `*` or `/` are left untouched, and a `//`
/// inside a value (such as a URL scheme) is treated as a line comment.
pub fn strip_css_comments(css: &str) -> String {
    comment_regex().replace_all(css, "").into_owned()
}

/// Collapse `css` onto a single line.
///
/// Every line is trimmed, blank lines are dropped, and the rest are joined
/// with no separator.
pub fn concatenate_lines(css: &str) -> String {
    explode(css, "\n").concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_block_comments() {
        assert_eq!(strip_css_comments("a { /* note */ color: red; }"), "a {  color: red; }");
    }

    #[test]
    fn strips_line_comments() {
        let css = "a {\n  color: red; // primary\n}";
        assert_eq!(strip_css_comments(css), "a {\n  color: red; \n}");
    }

    #[test]
    fn leaves_comments_containing_stars() {
        let css = "/* a * b */ a { color: red; }";
        assert_eq!(strip_css_comments(css), css);
    }

    #[test]
    fn line_comment_eats_url_tail() {
        let css = "a { background: url(http://x.io/a.png); }";
        assert_eq!(strip_css_comments(css), "a { background: url(http:");
    }

    #[test]
    fn joins_lines() {
        let css = "\n  a {\n    color: red;\n  }\n\n";
        assert_eq!(concatenate_lines(css), "a {color: red;}");
    }

    #[test]
    fn joins_carriage_returns_as_whitespace() {
        assert_eq!(concatenate_lines("a {\r\n color: red;\r\n}"), "a {color: red;}");
    }
}

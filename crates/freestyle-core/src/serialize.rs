//! CSS text output and minification.

use std::sync::OnceLock;

use regex::Regex;

use crate::rules::Ruleset;

/// Render rulesets as CSS text.
///
/// The layout is fixed so that output can be compared byte for byte:
///
/// ```text
/// h1, h2 {
///   color: red;
///   margin: 0
/// }
///
/// ```
///
/// Selectors are joined with `", "`, every declaration is indented by two
/// spaces, declarations are separated by `"; \n"` and every block ends with
/// `"} \n\n"`.
pub fn style_list_to_css(style_list: &[Ruleset]) -> String {
    let mut css = String::new();

    for ruleset in style_list {
        let declarations = ruleset
            .rules
            .iter()
            .map(|(property, value)| format!("  {}: {}", property, value))
            .collect::<Vec<_>>()
            .join("; \n");

        css.push_str(&format!(
            "{} {{\n{}\n}} \n\n",
            ruleset.selector_text(),
            declarations
        ));
    }

    css
}

/// Whitespace collapses around each of these, applied in this order.
const UGLIFY_PATTERNS: [(&str, &str); 5] = [
    (r"\s*,\s*", ","),
    (r"\s*:\s*", ":"),
    (r"\s*;\s*", ";"),
    (r"\s*\{\s*", "{"),
    (r"\s*\}\s*", "}"),
];

fn uglify_regexes() -> &'static [(Regex, &'static str)] {
    static REGEXES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    REGEXES.get_or_init(|| {
        UGLIFY_PATTERNS
            .iter()
            .map(|(pattern, replacement)| {
                (Regex::new(pattern).expect("uglify pattern is valid"), *replacement)
            })
            .collect()
    })
}

/// Minify CSS text.
///
/// Removes every newline, then drops whitespace around `,`, `:`, `;`, `{`
/// and `}`. This is plain text rewriting, not a re-parse, so it applies to
/// anything that looks like CSS, valid or not. Applying it twice gives the
/// same result as applying it once.
///
/// # Example
///
/// ```
/// use freestyle_core::serialize::uglify;
///
/// assert_eq!(uglify("a, b {\n  color: red; \n} \n\n"), "a,b{color:red;}");
/// ```
pub fn uglify(css: &str) -> String {
    let mut out = css.replace('\n', "");
    for (regex, replacement) in uglify_regexes() {
        out = regex.replace_all(&out, *replacement).into_owned();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Declarations, StyleList};

    fn ruleset(selectors: &[&str], rules: &[(&str, &str)]) -> Ruleset {
        Ruleset::new(
            selectors.iter().map(|s| s.to_string()).collect(),
            rules.iter().copied().collect(),
        )
    }

    #[test]
    fn exact_layout() {
        let list = vec![
            ruleset(&["h1", "h2"], &[("color", "red"), ("margin", "0")]),
            ruleset(&["p"], &[("display", "block")]),
        ];

        assert_eq!(
            style_list_to_css(&list),
            "h1, h2 {\n  color: red; \n  margin: 0\n} \n\np {\n  display: block\n} \n\n"
        );
    }

    #[test]
    fn empty_declarations() {
        let list = vec![Ruleset::for_selector("a", Declarations::new())];
        assert_eq!(style_list_to_css(&list), "a {\n\n} \n\n");
    }

    #[test]
    fn empty_list() {
        assert_eq!(style_list_to_css(&StyleList::new()), "");
    }

    #[test]
    fn uglify_serialized_output() {
        let list = vec![ruleset(&["h1", "h2"], &[("color", "red"), ("margin", "0 auto")])];
        assert_eq!(uglify(&style_list_to_css(&list)), "h1,h2{color:red;margin:0 auto}");
    }

    #[test]
    fn uglify_keeps_inner_spaces() {
        assert_eq!(uglify("a  b { border : 1px  solid }"), "a  b{border:1px  solid}");
    }

    #[test]
    fn uglify_is_idempotent() {
        let inputs = [
            "a , b { color : red ; }\n\n",
            "  x{y:z}  ",
            "\t.a\t{\tb:\tc\t}\r\n",
            "",
        ];
        for input in inputs {
            let once = uglify(input);
            assert_eq!(uglify(&once), once);
        }
    }
}

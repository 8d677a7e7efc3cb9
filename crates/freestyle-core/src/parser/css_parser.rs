//! Delimiter-based parser for flat CSS.
//!
//! The parser works on literal `}`, `{`, `,`, `;` and `:` splits, one level
//! deep. Anything that needs real tokenization (at-rules, nested blocks,
//! `url(http://…)`, quoted strings containing delimiters) comes out mangled
//! or is dropped; it is never reported as an error.

use crate::rules::{Declarations, Ruleset, StyleList};
use crate::text::explode;

/// Parse CSS text into a list of rulesets.
///
/// The input is cut on `}` into one chunk per ruleset, and each chunk on `{`
/// into a selector head and a declaration body. A chunk ending in `{` is a
/// ruleset with an empty body. Other chunks that do not split into exactly
/// those two pieces, or whose head holds no selector, are skipped with a
/// debug log. Declarations are split on `;`, then on `:`; only those
/// with exactly a property and a value are kept.
///
/// Property names and values are taken verbatim after trimming. Rulesets are
/// returned in source order.
///
/// # Example
///
/// ```
/// use freestyle_core::parser::css_to_style_list;
///
/// let list = css_to_style_list("h1, h2 { color: red; margin: 0 }");
/// assert_eq!(list.len(), 1);
/// assert_eq!(list[0].selectors, vec!["h1", "h2"]);
/// assert_eq!(list[0].rules.get("margin"), Some("0"));
/// ```
pub fn css_to_style_list(css: &str) -> StyleList {
    let mut list = StyleList::new();

    for chunk in explode(css, "}") {
        match parse_ruleset(&chunk) {
            Some(ruleset) => list.push(ruleset),
            None => tracing::debug!("Skipping malformed ruleset: {:?}", chunk),
        }
    }

    tracing::trace!("Parsed {} rulesets", list.len());
    list
}

/// Parse one `head { body` chunk.
fn parse_ruleset(chunk: &str) -> Option<Ruleset> {
    let (head, body) = match <[String; 2]>::try_from(explode(chunk, "{")) {
        Ok([head, body]) => (head, body),
        Err(pieces) => match pieces.as_slice() {
            [head] if chunk.trim_end().ends_with('{') => (head.clone(), String::new()),
            _ => return None,
        },
    };

    let selectors = explode(&head, ",");
    if selectors.is_empty() {
        return None;
    }

    Some(Ruleset::new(selectors, parse_declarations(&body)))
}

/// Parse a declaration body, dropping anything that is not `property: value`.
fn parse_declarations(body: &str) -> Declarations {
    let mut rules = Declarations::new();

    for candidate in explode(body, ";") {
        let parts = explode(&candidate, ":");
        if let [property, value] = parts.as_slice() {
            rules.insert(property.as_str(), value.as_str());
        }
    }

    rules
}

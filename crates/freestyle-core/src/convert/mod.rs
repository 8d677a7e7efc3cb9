//! Conversions between style lists and plain style objects.
//!
//! This is the only layer that changes property-name casing: style lists use
//! kebab-case like CSS does, plain objects use camelCase.
//!
//! The two directions are not inverses. Without `multiple_selectors_per_key`
//! a ruleset for `h1, h2` fans out into separate `h1` and `h2` entries, and
//! nothing in the plain object records that they came from one block.

mod plain_object;

pub use plain_object::PlainStyleObject;

use crate::parser::css_to_style_list;
use crate::rules::{Ruleset, StyleList};
use crate::serialize::style_list_to_css;
use crate::text::{camel_to_kebab_case, explode, kebab_to_camel_case};

/// Convert rulesets into a plain object.
///
/// With `multiple_selectors_per_key` each ruleset becomes one entry keyed by
/// its comma-and-space joined selectors. Without it each selector gets its
/// own copy of the declarations; when the same key comes up again, the later
/// ruleset replaces the earlier entry.
pub fn style_list_to_plain_object(
    style_list: &[Ruleset],
    multiple_selectors_per_key: bool,
) -> PlainStyleObject {
    let mut object = PlainStyleObject::new();

    for ruleset in style_list {
        let rules = ruleset.rules.rename_properties(kebab_to_camel_case);

        if multiple_selectors_per_key {
            object.insert(ruleset.selector_text(), rules);
        } else {
            for selector in &ruleset.selectors {
                object.insert(selector.as_str(), rules.clone());
            }
        }
    }

    object
}

/// Parse CSS text straight into a plain object.
///
/// # Example
///
/// ```
/// use freestyle_core::convert::css_to_plain_object;
///
/// let object = css_to_plain_object("h1, h2 { font-size: 2em; }", false);
/// assert_eq!(object.get("h2").and_then(|r| r.get("fontSize")), Some("2em"));
///
/// let grouped = css_to_plain_object("h1, h2 { font-size: 2em; }", true);
/// assert!(grouped.get("h1, h2").is_some());
/// ```
pub fn css_to_plain_object(css: &str, multiple_selectors_per_key: bool) -> PlainStyleObject {
    let style_list = css_to_style_list(css);
    style_list_to_plain_object(&style_list, multiple_selectors_per_key)
}

/// Convert a plain object into rulesets, one per key.
///
/// Keys are split on `,` to recover selectors and property names go back to
/// kebab-case. Keys that hold no selector at all are skipped.
pub fn plain_object_to_style_list(plain_object: &PlainStyleObject) -> StyleList {
    let mut list = StyleList::new();

    for (key, rules) in plain_object.iter() {
        let selectors = explode(key, ",");
        if selectors.is_empty() {
            tracing::debug!("Skipping plain object key without selectors: {:?}", key);
            continue;
        }
        list.push(Ruleset::new(
            selectors,
            rules.rename_properties(camel_to_kebab_case),
        ));
    }

    list
}

/// Render a plain object as CSS text.
pub fn plain_object_to_css(plain_object: &PlainStyleObject) -> String {
    style_list_to_css(&plain_object_to_style_list(plain_object))
}

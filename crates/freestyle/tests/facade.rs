//! Integration tests for the umbrella crate.

use freestyle::config::{FixedClock, FreestyleConfig};
use freestyle::prelude::*;
use serde_json::json;

fn freestyle_at(millis: i64) -> Freestyle<FixedClock> {
    Freestyle::with_clock(FreestyleConfig::default(), FixedClock(millis))
}

#[test]
fn scoped_css_contains_prefixed_selector() {
    let css = freestyle_at(0).scoped_css("a { color: red; }", ".scope", false).unwrap();

    assert!(css.contains(".scope a"));
    assert!(css.contains("color: red"));
}

#[test]
fn scoped_css_sentinels() {
    let freestyle = freestyle_at(0);

    assert_eq!(
        freestyle.scoped_css_or_sentinel("a { color: red; }", "", false),
        "/* ----- [!] #scopedCss called but no scope provided. ----- */"
    );
    assert_eq!(
        freestyle.scoped_css_or_sentinel("a { color: red;", ".scope", false),
        "/* ----- [!] Invalid Css Provided. ----- */"
    );
}

#[test]
fn plain_object_to_css_through_prelude() {
    let object = PlainStyleObject::from_json(&json!({ "button": { "backgroundColor": "#333" } }).to_string())
        .unwrap();
    let css = plain_object_to_css(&object);

    assert!(css.contains("button {"));
    assert!(css.contains("background-color: #333"));
}

#[test]
fn two_injections_without_ids_at_same_instant_share_element() {
    let freestyle = freestyle_at(99);
    let mut document = MemoryDocument::new();

    let first = freestyle.inject_css(&mut document, "a { color: red; }", None, None).unwrap();
    let second = freestyle.inject_css(&mut document, "b { color: blue; }", None, None).unwrap();

    assert_eq!(first, second);
    assert_eq!(document.text_content(first), "b { color: blue; }");
}

#[test]
fn inject_then_remove() {
    let freestyle = freestyle_at(5);
    let mut document = MemoryDocument::new();
    let pristine = document.to_html();

    let id = freestyle.generate_tag_id();
    freestyle
        .inject_css(&mut document, "a { color: red; }", Some(&id), None)
        .unwrap();
    assert!(document.get_element_by_id(&id).is_some());

    assert!(freestyle.remove_injection(&mut document, &id));
    assert_eq!(document.to_html(), pristine);
}

#[test]
fn invalid_injection_is_an_error() {
    let freestyle = freestyle_at(5);
    let mut document = MemoryDocument::new();

    let err = freestyle
        .inject_css(&mut document, "no braces here", Some("x"), None)
        .unwrap_err();
    assert_eq!(freestyle.error(&err), "/* ----- [!] Invalid Css Provided. ----- */");
}

#[test]
fn config_from_toml() {
    let freestyle = Freestyle::from_toml_str(
        r#"
        version = "0.0.4"
        tag_id_prefix = "app-"
        "#,
    )
    .unwrap();

    assert_eq!(freestyle.version(), "0.0.4");
    assert!(freestyle.generate_tag_id().starts_with("app-"));
}

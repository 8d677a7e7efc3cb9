//! Injecting CSS into a document as a `style` element.

use freestyle_core::validate::is_valid_css;
use freestyle_core::{Error, Result};

use crate::host::StyleHost;

/// Tag of the elements injection creates and removes.
pub const STYLE_TAG: &str = "style";

/// Tag of the default parent for injected elements.
pub const DEFAULT_PARENT_TAG: &str = "head";

fn is_style_element<H: StyleHost>(host: &H, node: H::Node) -> bool {
    host.tag_name(node)
        .is_some_and(|tag| tag.eq_ignore_ascii_case(STYLE_TAG))
}

/// Write `css` into the `style` element with the given id, creating it if needed.
///
/// If no element has `id`, or the one that does is not a `style` element, a
/// new `<style type="text/css" id="…">` is created and appended under
/// `append_to`. Without `append_to` the first `head` element is used, or the
/// host's root when there is no `head`.
///
/// Returns the `style` element that now holds `css`.
///
/// # Errors
///
/// [`Error::InvalidCss`] if `css` fails the validity check; the document is
/// left untouched.
pub fn inject_css<H: StyleHost>(
    host: &mut H,
    css: &str,
    id: &str,
    append_to: Option<H::Node>,
) -> Result<H::Node> {
    if !is_valid_css(css) {
        return Err(Error::InvalidCss);
    }

    let node = match host.get_element_by_id(id) {
        Some(existing) if is_style_element(host, existing) => existing,
        _ => {
            let parent = append_to.unwrap_or_else(|| default_parent(&*host));
            let element = host.create_element(STYLE_TAG);
            host.set_attribute(element, "type", "text/css");
            host.set_attribute(element, "id", id);
            host.append_child(parent, element);
            tracing::debug!("Created style element {:?} under {:?}", id, parent);
            element
        }
    };

    host.set_text_content(node, css);
    Ok(node)
}

fn default_parent<H: StyleHost>(host: &H) -> H::Node {
    host.get_elements_by_tag_name(DEFAULT_PARENT_TAG)
        .into_iter()
        .next()
        .unwrap_or_else(|| host.root())
}

/// Remove the `style` element with the given id.
///
/// Returns `true` if an element was removed. Elements with that id that are
/// not `style` elements are left alone.
pub fn remove_injection<H: StyleHost>(host: &mut H, id: &str) -> bool {
    match host.get_element_by_id(id) {
        Some(node) if is_style_element(host, node) => {
            host.remove(node);
            tracing::debug!("Removed style element {:?}", id);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryDocument;

    const CSS: &str = "a { color: red; }";

    #[test]
    fn injects_into_head() {
        let mut document = MemoryDocument::new();
        let node = inject_css(&mut document, CSS, "theme", None).unwrap();

        assert_eq!(document.parent(node), document.head());
        assert_eq!(document.attribute(node, "type"), Some("text/css"));
        assert_eq!(document.attribute(node, "id"), Some("theme"));
        assert_eq!(document.text_content(node), CSS);
    }

    #[test]
    fn reuses_existing_style_element() {
        let mut document = MemoryDocument::new();
        let first = inject_css(&mut document, CSS, "theme", None).unwrap();
        let second = inject_css(&mut document, "b { color: blue; }", "theme", None).unwrap();

        assert_eq!(first, second);
        assert_eq!(document.get_elements_by_tag_name("style").len(), 1);
        assert_eq!(document.text_content(second), "b { color: blue; }");
    }

    #[test]
    fn invalid_css_leaves_document_alone() {
        let mut document = MemoryDocument::new();
        let before = document.to_html();

        assert!(matches!(
            inject_css(&mut document, "a { color: red;", "theme", None),
            Err(Error::InvalidCss)
        ));
        assert_eq!(document.to_html(), before);
    }

    #[test]
    fn falls_back_to_root_without_head() {
        let mut document = MemoryDocument::empty();
        let node = inject_css(&mut document, CSS, "theme", None).unwrap();

        assert_eq!(document.parent(node), Some(document.root()));
    }

    #[test]
    fn remove_only_style_elements() {
        let mut document = MemoryDocument::new();
        let body = document.body().unwrap();
        let div = document.create_element("div");
        document.set_attribute(div, "id", "panel");
        document.append_child(body, div);

        assert!(!remove_injection(&mut document, "panel"));
        assert!(document.contains(div));

        inject_css(&mut document, CSS, "theme", None).unwrap();
        assert!(remove_injection(&mut document, "theme"));
        assert!(!remove_injection(&mut document, "theme"));
        assert!(document.get_elements_by_tag_name("style").is_empty());
    }
}

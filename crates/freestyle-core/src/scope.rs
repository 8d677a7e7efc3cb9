//! Selector scoping.
//!
//! Scoping namespaces a stylesheet under a containing selector so its rules
//! only reach descendants of that container:
//!
//! ```text
//! a { color: red; }   --(scope "#widget")-->   #widget a { color: red; }
//! ```

use crate::parser::css_to_style_list;
use crate::preprocess::{concatenate_lines, strip_css_comments};
use crate::rules::StyleList;
use crate::serialize::{style_list_to_css, uglify};
use crate::validate::is_valid_css;
use crate::{Error, Result};

/// Prefix every selector of every ruleset with `prefix` and a space.
///
/// Selector text is kept as written after the prefix. An empty prefix
/// returns the list unchanged.
pub fn prefix_style_list_selectors(mut style_list: StyleList, prefix: &str) -> StyleList {
    if prefix.is_empty() {
        return style_list;
    }

    for ruleset in &mut style_list.rulesets {
        ruleset.prefix_selectors(prefix);
    }
    style_list
}

/// Scope all of `css` under `scope`.
///
/// Runs the whole pipeline: validate, strip comments, join lines, parse,
/// prefix, serialize, and minify when `ugly` is set.
///
/// # Errors
///
/// - [`Error::NoScope`] if `scope` is empty
/// - [`Error::InvalidCss`] if `css` fails [`is_valid_css`]
///
/// # Example
///
/// ```
/// use freestyle_core::scope::scoped_css;
///
/// let css = scoped_css("a { color: red; }", ".card", true)?;
/// assert_eq!(css, ".card a{color:red}");
/// # Ok::<(), freestyle_core::Error>(())
/// ```
pub fn scoped_css(css: &str, scope: &str, ugly: bool) -> Result<String> {
    if scope.is_empty() {
        return Err(Error::NoScope);
    }
    if !is_valid_css(css) {
        return Err(Error::InvalidCss);
    }

    let css = concatenate_lines(&strip_css_comments(css));
    let style_list = prefix_style_list_selectors(css_to_style_list(&css), scope);
    tracing::trace!("Scoped {} rulesets under {:?}", style_list.len(), scope);

    let css = style_list_to_css(&style_list);
    Ok(if ugly { uglify(&css) } else { css })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_every_selector() {
        let list = css_to_style_list("h1, h2 { color: red } p { margin: 0 }");
        let list = prefix_style_list_selectors(list, ".scope");

        assert_eq!(list[0].selectors, vec![".scope h1", ".scope h2"]);
        assert_eq!(list[1].selectors, vec![".scope p"]);
    }

    #[test]
    fn empty_prefix_is_a_no_op() {
        let list = css_to_style_list("h1 { color: red }");
        assert_eq!(prefix_style_list_selectors(list.clone(), ""), list);
    }

    #[test]
    fn scoped_output() {
        let css = scoped_css("a { color: red; }", ".scope", false).unwrap();
        assert_eq!(css, ".scope a {\n  color: red\n} \n\n");
    }

    #[test]
    fn scoped_strips_comments_and_newlines() {
        let css = "/* header */\nbutton,\n.fake-button {\n  color: #fff; // white\n}\n";
        let out = scoped_css(css, "#app", true).unwrap();
        assert_eq!(out, "#app button,#app .fake-button{color:#fff}");
    }

    #[test]
    fn missing_scope() {
        assert!(matches!(scoped_css("a { color: red; }", "", false), Err(Error::NoScope)));
    }

    #[test]
    fn scope_checked_before_css() {
        assert!(matches!(scoped_css("", "", false), Err(Error::NoScope)));
    }

    #[test]
    fn invalid_css() {
        assert!(matches!(scoped_css("a { color: red;", ".s", false), Err(Error::InvalidCss)));
    }
}

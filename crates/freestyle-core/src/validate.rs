//! Coarse well-formedness check for raw CSS.

/// Returns `true` if `css` looks like something the pipeline can work with.
///
/// The check is purely syntactic:
/// - the string is non-empty,
/// - it contains at least one `{` and one `}`,
/// - `{` and `}` occur the same number of times,
/// - `/*` and `*/` occur the same number of times.
///
/// Plenty of malformed CSS passes; nothing with unbalanced braces or comment
/// markers does.
pub fn is_valid_css(css: &str) -> bool {
    if css.is_empty() {
        return false;
    }

    let opening = css.matches('{').count();
    let closing = css.matches('}').count();
    if opening == 0 || closing == 0 || opening != closing {
        return false;
    }

    css.matches("/*").count() == css.matches("*/").count()
}

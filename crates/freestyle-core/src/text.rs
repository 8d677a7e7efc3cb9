//! String helpers shared by every stage of the pipeline.
//!
//! [`explode`] is the only tokenizer in the crate. It splits on a literal
//! delimiter and knows nothing about nesting, so `url(http://…)` or a
//! `font-family` list will be cut apart like any other text.

/// Split `text` on `delimiter`, trim every piece and drop the empty ones.
///
/// # Example
///
/// ```
/// use freestyle_core::text::explode;
///
/// assert_eq!(explode("a, b ,  c", ","), vec!["a", "b", "c"]);
/// assert!(explode(" , ,", ",").is_empty());
/// ```
pub fn explode(text: &str, delimiter: &str) -> Vec<String> {
    text.split(delimiter)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Convert a camelCase identifier to kebab-case.
///
/// A `-` goes in front of every ASCII uppercase letter except a leading one,
/// then the whole string is lowercased: `backgroundColor` becomes
/// `background-color`, `WebkitBox` becomes `webkit-box`.
pub fn camel_to_kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            out.push('-');
        }
        out.extend(c.to_lowercase());
    }
    out
}

/// Convert a kebab-case identifier to camelCase.
///
/// The first segment is lowercased, every following segment gets its first
/// character uppercased. Empty segments contribute nothing, so a vendor
/// prefix like `-webkit-box` turns into `WebkitBox`.
pub fn kebab_to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, segment) in s.split('-').enumerate() {
        if i == 0 {
            out.push_str(&segment.to_lowercase());
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

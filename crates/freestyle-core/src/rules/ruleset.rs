//! Single ruleset definition.

use serde::{Deserialize, Serialize};

use super::Declarations;

/// One `selector(s) { declarations }` block.
///
/// Each ruleset has:
/// - The selectors of its group, in source order
/// - The declarations of its block, keyed by kebab-case property name
///
/// Rulesets carry no identity; two rulesets with the same selectors and
/// declarations are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruleset {
    /// Trimmed, non-empty selectors, e.g. `["h1.title", "h2"]`.
    pub selectors: Vec<String>,
    /// Property → value declarations.
    pub rules: Declarations,
}

impl Ruleset {
    /// Create a new ruleset.
    pub fn new(selectors: Vec<String>, rules: Declarations) -> Self {
        Self { selectors, rules }
    }

    /// Create a ruleset for a single selector.
    pub fn for_selector(selector: impl Into<String>, rules: Declarations) -> Self {
        Self::new(vec![selector.into()], rules)
    }

    /// The selector group as written in CSS, e.g. `h1.title, h2`.
    pub fn selector_text(&self) -> String {
        self.selectors.join(", ")
    }

    /// Prepend `prefix` and a space to every selector.
    pub fn prefix_selectors(&mut self, prefix: &str) {
        for selector in &mut self.selectors {
            selector.insert(0, ' ');
            selector.insert_str(0, prefix);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ruleset_creation() {
        let rules: Declarations = [("color", "red")].into_iter().collect();
        let ruleset = Ruleset::for_selector("Button", rules);

        assert_eq!(ruleset.selectors, vec!["Button"]);
        assert_eq!(ruleset.rules.get("color"), Some("red"));
    }

    #[test]
    fn selector_text_joins_group() {
        let ruleset = Ruleset::new(
            vec!["h1.title".to_string(), "h2".to_string()],
            Declarations::new(),
        );
        assert_eq!(ruleset.selector_text(), "h1.title, h2");
    }

    #[test]
    fn prefix_keeps_original_text() {
        let mut ruleset = Ruleset::new(
            vec!["a:hover".to_string(), "p > span".to_string()],
            Declarations::new(),
        );
        ruleset.prefix_selectors("#app");
        assert_eq!(ruleset.selectors, vec!["#app a:hover", "#app p > span"]);
    }
}

//! Ordered ruleset collection.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::Ruleset;
use crate::Result;

/// An ordered list of rulesets, in source order.
///
/// Order matters: a later ruleset overrides an earlier one when both apply,
/// so every transform in this crate keeps the list in the order it was given.
/// Serializes as a JSON array of `{"selectors": [...], "rules": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleList {
    /// The rulesets in this list.
    pub rulesets: Vec<Ruleset>,
}

impl StyleList {
    /// Create an empty style list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a style list from CSS text.
    ///
    /// See [`css_to_style_list`](crate::parser::css_to_style_list).
    pub fn from_css(css: &str) -> Self {
        crate::parser::css_to_style_list(css)
    }

    /// Render the list back to CSS text.
    ///
    /// See [`style_list_to_css`](crate::serialize::style_list_to_css).
    pub fn to_css(&self) -> String {
        crate::serialize::style_list_to_css(self)
    }

    /// Parse a style list from its JSON shape.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the list to its JSON shape.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Add a ruleset at the end of the list.
    pub fn push(&mut self, ruleset: Ruleset) {
        self.rulesets.push(ruleset);
    }

    /// Consume the list, returning the rulesets.
    pub fn into_inner(self) -> Vec<Ruleset> {
        self.rulesets
    }
}

impl Deref for StyleList {
    type Target = [Ruleset];

    fn deref(&self) -> &Self::Target {
        &self.rulesets
    }
}

impl From<Vec<Ruleset>> for StyleList {
    fn from(rulesets: Vec<Ruleset>) -> Self {
        Self { rulesets }
    }
}

impl FromIterator<Ruleset> for StyleList {
    fn from_iter<I: IntoIterator<Item = Ruleset>>(iter: I) -> Self {
        Self {
            rulesets: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for StyleList {
    type Item = Ruleset;
    type IntoIter = std::vec::IntoIter<Ruleset>;

    fn into_iter(self) -> Self::IntoIter {
        self.rulesets.into_iter()
    }
}

impl<'a> IntoIterator for &'a StyleList {
    type Item = &'a Ruleset;
    type IntoIter = std::slice::Iter<'a, Ruleset>;

    fn into_iter(self) -> Self::IntoIter {
        self.rulesets.iter()
    }
}

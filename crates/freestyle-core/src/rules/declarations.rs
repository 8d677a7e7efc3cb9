//! Ordered property → value mapping for a single ruleset.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The declaration block of a ruleset.
///
/// Declarations keep the order in which properties were first inserted.
/// Inserting a property that already exists replaces its value but keeps its
/// position, which matches how later declarations override earlier ones in a
/// block like `color: red; color: blue`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    entries: Vec<(String, String)>,
}

impl Declarations {
    /// Create an empty declaration block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `property` to `value`, returning the previous value if any.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == property) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((property, value));
                None
            }
        }
    }

    /// Get the value for `property`.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == property)
            .map(|(_, value)| value.as_str())
    }

    /// Remove `property`, returning its value.
    pub fn remove(&mut self, property: &str) -> Option<String> {
        let index = self.entries.iter().position(|(key, _)| key == property)?;
        Some(self.entries.remove(index).1)
    }

    /// Check whether `property` is declared.
    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    /// Get the number of declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the block is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(property, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over property names in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Build a new block with every property name passed through `rename`.
    ///
    /// Values are copied as-is. If two names collapse to the same key the
    /// later one wins.
    pub fn rename_properties(&self, rename: impl Fn(&str) -> String) -> Self {
        self.iter()
            .map(|(property, value)| (rename(property), value.to_string()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Declarations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut declarations = Self::new();
        declarations.extend(iter);
        declarations
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Declarations {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (property, value) in iter {
            self.insert(property, value);
        }
    }
}

impl IntoIterator for Declarations {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Declarations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (property, value) in &self.entries {
            map.serialize_entry(property, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Declarations {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DeclarationsVisitor;

        impl<'de> Visitor<'de> for DeclarationsVisitor {
            type Value = Declarations;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of property names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut declarations = Declarations::new();
                while let Some((property, value)) = access.next_entry::<String, String>()? {
                    declarations.insert(property, value);
                }
                Ok(declarations)
            }
        }

        deserializer.deserialize_map(DeclarationsVisitor)
    }
}

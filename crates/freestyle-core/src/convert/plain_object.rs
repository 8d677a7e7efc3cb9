//! Selector-keyed "plain object" representation.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Result;
use crate::rules::Declarations;

/// Styles keyed by selector, with camelCase property names.
///
/// This is the shape used by callers that build styles as nested objects:
///
/// ```json
/// { "button, .imitation-button": { "backgroundColor": "#333" } }
/// ```
///
/// Keys keep their first insertion position; writing an existing key
/// replaces its declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainStyleObject {
    entries: Vec<(String, Declarations)>,
}

impl PlainStyleObject {
    /// Create an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the declarations for `key`, returning the previous ones if any.
    pub fn insert(&mut self, key: impl Into<String>, rules: Declarations) -> Option<Declarations> {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, rules)),
            None => {
                self.entries.push((key, rules));
                None
            }
        }
    }

    /// Get the declarations for `key`.
    pub fn get(&self, key: &str) -> Option<&Declarations> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, rules)| rules)
    }

    /// Get the number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the object has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Iterate over `(key, declarations)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Declarations)> {
        self.entries.iter().map(|(key, rules)| (key.as_str(), rules))
    }

    /// Parse an object from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the object to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<K: Into<String>> FromIterator<(K, Declarations)> for PlainStyleObject {
    fn from_iter<I: IntoIterator<Item = (K, Declarations)>>(iter: I) -> Self {
        let mut object = Self::new();
        for (key, rules) in iter {
            object.insert(key, rules);
        }
        object
    }
}

impl Serialize for PlainStyleObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, rules) in &self.entries {
            map.serialize_entry(key, rules)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PlainStyleObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct PlainObjectVisitor;

        impl<'de> Visitor<'de> for PlainObjectVisitor {
            type Value = PlainStyleObject;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of selectors to declaration maps")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut object = PlainStyleObject::new();
                while let Some((key, rules)) = access.next_entry::<String, Declarations>()? {
                    object.insert(key, rules);
                }
                Ok(object)
            }
        }

        deserializer.deserialize_map(PlainObjectVisitor)
    }
}

//! Library configuration and the clock used for generated ids.
//!
//! Nothing in the pipeline reads global state. The version string, the
//! injected-element id prefix and the time source are all values a caller
//! hands in, so tests can pin them.
//!
//! # Loading from TOML
//!
//! ```
//! use freestyle_core::config::FreestyleConfig;
//!
//! let config = FreestyleConfig::from_toml_str(r#"
//! tag_id_prefix = "app-style-"
//! "#)?;
//! assert_eq!(config.tag_id_prefix, "app-style-");
//! assert_eq!(config.default_parent_tag, "head");
//! # Ok::<(), freestyle_core::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::Result;

/// Default prefix for generated injection ids.
pub const DEFAULT_TAG_ID_PREFIX: &str = "__freefall-injection-";

/// Default tag of the element injected styles are appended to.
pub const DEFAULT_PARENT_TAG: &str = "head";

/// Configuration shared by the freestyle entry points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreestyleConfig {
    /// Version reported by the library.
    pub version: String,
    /// Prefix for ids generated for injected style elements.
    pub tag_id_prefix: String,
    /// Tag name of the element styles are appended to when no parent is given.
    pub default_parent_tag: String,
}

impl Default for FreestyleConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            tag_id_prefix: DEFAULT_TAG_ID_PREFIX.to_string(),
            default_parent_tag: DEFAULT_PARENT_TAG.to_string(),
        }
    }
}

impl FreestyleConfig {
    /// Parse a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Set the id prefix.
    pub fn with_tag_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.tag_id_prefix = prefix.into();
        self
    }

    /// Set the reported version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Build an injection id from the prefix and a timestamp.
    pub fn tag_id(&self, clock: &dyn Clock) -> String {
        format!("{}{}", self.tag_id_prefix, clock.now_millis())
    }
}

/// Source of the current time, in milliseconds since the Unix epoch.
pub trait Clock {
    /// The current time in milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// A clock that always reports the same instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

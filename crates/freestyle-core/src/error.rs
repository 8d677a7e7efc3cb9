//! Error types for the styling pipeline.

/// Result type alias for freestyle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the styling pipeline.
///
/// Only [`Error::NoScope`] and [`Error::InvalidCss`] come out of the CSS
/// entry points; everything else about malformed input degrades to partial
/// output instead of an error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Scoping was requested without a scope selector.
    #[error("#scopedCss called but no scope provided.")]
    NoScope,

    /// The input failed the coarse validity check.
    #[error("Invalid Css Provided.")]
    InvalidCss,

    /// Fallback for an unrecognised error name.
    #[error("An unknown error occurred.")]
    Unknown,

    /// JSON (de)serialization of a style list or plain object failed.
    #[error("JSON conversion failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    /// Look up an error kind by its short name.
    ///
    /// Matching is case-insensitive: `"noscope"` and `"invalid"` map to the
    /// two pipeline errors, anything else to [`Error::Unknown`].
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "noscope" => Self::NoScope,
            "invalid" => Self::InvalidCss,
            _ => Self::Unknown,
        }
    }

    /// Render the error as a CSS comment.
    ///
    /// The result is safe to drop into a stylesheet in place of the CSS that
    /// could not be produced, e.g. `/* ----- [!] Invalid Css Provided. ----- */`.
    pub fn sentinel(&self) -> String {
        format!("/* ----- [!] {} ----- */", self)
    }
}

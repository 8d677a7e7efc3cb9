//! freestyle - small, dependency-light CSS manipulation.
//!
//! This is the umbrella crate that re-exports all public APIs:
//!
//! - Every pure transform from [`freestyle_core`] at the crate root
//! - Style injection from [`freestyle_dom`] under [`dom`]
//! - The configured [`Freestyle`] entry point
//!
//! # Example
//!
//! ```
//! use freestyle::prelude::*;
//!
//! let object = css_to_plain_object("h1, h2 { color: red; }", false);
//! assert_eq!(object.keys().collect::<Vec<_>>(), vec!["h1", "h2"]);
//!
//! let css = plain_object_to_css(&object);
//! assert!(css.starts_with("h1 {\n  color: red\n}"));
//! ```

pub use freestyle_core::*;

/// Style injection into documents.
pub mod dom {
    pub use freestyle_dom::*;
}

mod facade;
pub mod prelude;

pub use facade::Freestyle;

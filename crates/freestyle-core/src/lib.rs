//! Flat CSS ⇄ structured data conversion for freestyle.
//!
//! This crate holds every pure transform of the library:
//!
//! - **Parsing**: CSS text into an ordered [`StyleList`] of [`Ruleset`]s
//! - **Conversion**: style lists to and from selector-keyed [`PlainStyleObject`]s
//! - **Serialization**: style lists back to CSS, optionally minified
//! - **Scoping**: prefixing every selector under a containing selector
//!
//! Tokenizing is plain delimiter splitting, with no lexer. It is meant for
//! small, flat snippets of CSS; at-rules, nested blocks and delimiters inside
//! values are not understood.
//!
//! # Example
//!
//! ```
//! use freestyle_core::prelude::*;
//!
//! let list = css_to_style_list("button { background-color: #333; }");
//! let object = style_list_to_plain_object(&list, false);
//! assert_eq!(object.get("button").and_then(|r| r.get("backgroundColor")), Some("#333"));
//!
//! let scoped = scoped_css("button { color: #fff; }", "#toolbar", true)?;
//! assert_eq!(scoped, "#toolbar button{color:#fff}");
//! # Ok::<(), freestyle_core::Error>(())
//! ```

pub mod config;
pub mod convert;
pub mod parser;
pub mod preprocess;
pub mod rules;
pub mod scope;
pub mod serialize;
pub mod text;
pub mod validate;

mod error;

pub use error::{Error, Result};

pub use config::{Clock, FixedClock, FreestyleConfig, SystemClock};
pub use convert::PlainStyleObject;
pub use rules::{Declarations, Ruleset, StyleList};

static_assertions::assert_impl_all!(StyleList: Send, Sync);
static_assertions::assert_impl_all!(PlainStyleObject: Send, Sync);
static_assertions::assert_impl_all!(FreestyleConfig: Send, Sync);

/// Prelude module with commonly used types and functions.
pub mod prelude {
    pub use crate::config::{Clock, FixedClock, FreestyleConfig, SystemClock};
    pub use crate::convert::{
        PlainStyleObject, css_to_plain_object, plain_object_to_css, plain_object_to_style_list,
        style_list_to_plain_object,
    };
    pub use crate::parser::css_to_style_list;
    pub use crate::preprocess::{concatenate_lines, strip_css_comments};
    pub use crate::rules::{Declarations, Ruleset, StyleList};
    pub use crate::scope::{prefix_style_list_selectors, scoped_css};
    pub use crate::serialize::{style_list_to_css, uglify};
    pub use crate::text::{camel_to_kebab_case, explode, kebab_to_camel_case};
    pub use crate::validate::is_valid_css;
    pub use crate::Error;
}

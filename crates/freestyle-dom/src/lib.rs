//! Style injection for freestyle.
//!
//! Injection is the only part of freestyle with side effects, and those go
//! through the [`StyleHost`] capability instead of a global document. The
//! crate also ships [`MemoryDocument`], an in-memory tree implementing it.
//!
//! # Example
//!
//! ```
//! use freestyle_dom::{MemoryDocument, inject_css, remove_injection};
//!
//! let mut document = MemoryDocument::new();
//! inject_css(&mut document, "a { color: red; }", "theme", None)?;
//! assert_eq!(
//!     document.to_html(),
//!     "<html><head><style type=\"text/css\" id=\"theme\">a { color: red; }</style></head><body></body></html>"
//! );
//!
//! assert!(remove_injection(&mut document, "theme"));
//! # Ok::<(), freestyle_core::Error>(())
//! ```

mod document;
mod host;
mod inject;

pub use document::{MemoryDocument, NodeId};
pub use host::StyleHost;
pub use inject::{DEFAULT_PARENT_TAG, STYLE_TAG, inject_css, remove_injection};

static_assertions::assert_impl_all!(MemoryDocument: Send, Sync);

//! Prelude module for freestyle.
//!
//! This module re-exports the most commonly used items for convenient importing:
//!
//! ```
//! use freestyle::prelude::*;
//! ```
//!
//! This provides access to:
//! - Data model (`Ruleset`, `StyleList`, `PlainStyleObject`)
//! - Pipeline functions (parse, convert, serialize, scope)
//! - Injection (`StyleHost`, `MemoryDocument`)
//! - The configured `Freestyle` entry point

// ============================================================================
// Pure pipeline
// ============================================================================

pub use freestyle_core::prelude::*;

// ============================================================================
// Injection
// ============================================================================

pub use freestyle_dom::{MemoryDocument, NodeId, StyleHost, inject_css, remove_injection};

// ============================================================================
// Entry point
// ============================================================================

pub use crate::Freestyle;

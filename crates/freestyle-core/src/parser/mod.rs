//! CSS parsing module.

mod css_parser;

pub use css_parser::css_to_style_list;

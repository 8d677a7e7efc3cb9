//! Rulesets and style lists.

mod declarations;
mod ruleset;
mod style_list;

pub use declarations::Declarations;
pub use ruleset::Ruleset;
pub use style_list::StyleList;

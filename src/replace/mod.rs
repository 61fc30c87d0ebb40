//! Bulk find & replace

pub mod find_replace;

pub use find_replace::{apply_rules, FindReplacePair, FindReplaceSession, Replacement, MAX_RULES};

//! Copyable item lists and bounded entry lists

pub mod dynamic_pairs;
pub mod line_list;

pub use dynamic_pairs::{DynamicPair, DynamicPairList, MAX_SLOTS};
pub use line_list::{CopyAction, LineItem, LineList, LINES_KEY};

//! Single-purpose string transforms
//!
//! Splitting, sorting, case conversion, counting, list comparison,
//! duplicate removal and line repetition. Everything here is pure.

pub mod case_converter;
pub mod comparator;
pub mod counter;
pub mod dedup;
pub mod repeater;
pub mod sorter;
pub mod splitter;

pub use case_converter::{CaseConverter, CaseStyle};
pub use comparator::{Comparison, ListComparator};
pub use counter::TextCounts;
pub use dedup::{Deduplicated, DuplicateRemover};
pub use repeater::LineRepeater;
pub use sorter::{ListSorter, SortMode};
pub use splitter::Splitter;

//! Email and phone extraction
//!
//! Both extractors scan text with a fixed pattern, canonicalize each match,
//! and fold the matches into an [`ExtractionReport`] sorted by canonical
//! value. Spreadsheet input goes through [`tabular::Sheet`], where the two
//! extractors differ: email falls back to the whole sheet when
//! no email column exists, phone does not.

pub mod email;
pub mod phone;
pub mod report;
pub mod source;
pub mod tabular;

pub use email::EmailExtractor;
pub use phone::PhoneExtractor;
pub use report::{ExtractedItem, ExtractionReport};
pub use source::{ExtractTarget, InputLoader, LoadedInput};
pub use tabular::Sheet;

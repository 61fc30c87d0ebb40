//! Small deterministic text utilities: line lists, bulk find/replace,
//! email and phone extraction, query/time/campaign generators and list
//! transforms.

pub mod assist;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod generate;
pub mod help;
pub mod items;
pub mod replace;
pub mod storage;
pub mod table_display;
pub mod text;
pub mod utils;

pub use error::{Result, ToolError};

//! Local persistence: a string key-value store and the values kept in it

pub mod kv_store;
pub mod preferences;

pub use kv_store::{JsonFileStore, KeyValueStore, MemoryStore};
pub use preferences::{Preferences, Theme};

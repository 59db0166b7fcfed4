//! Storage layer for Outlay
//!
//! The in-memory record store plus the durable key-value boundary it is
//! persisted through (file-backed in production, in-memory for tests).

pub mod expenses;
pub mod kv;

pub use expenses::ExpenseStore;
pub use kv::{FileStore, KeyValueStore, MemoryStore};

/// Well-known key holding the serialized expense record array
pub const EXPENSES_KEY: &str = "expenses";

/// Well-known key holding the theme preference
pub const THEME_KEY: &str = "theme";

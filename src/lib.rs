//! Outlay - Personal expense ledger for the terminal
//!
//! This library provides the core functionality for the Outlay expense
//! tracker: an insertion-ordered record store over a key-value persistence
//! layer, composable filters, category and monthly aggregation, and CSV
//! export and import.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, ids, theme)
//! - `storage`: Record store and key-value persistence layer
//! - `query`: Composable expense filters
//! - `reports`: Category breakdown and monthly trend aggregation
//! - `export`: CSV serialization
//! - `services`: The ledger engine and CSV import
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use outlay::config::{OutlayPaths, Settings};
//! use outlay::services::LedgerService;
//! use outlay::storage::FileStore;
//!
//! let paths = OutlayPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut ledger = LedgerService::open(FileStore::new(paths.data_dir()));
//! ```

use std::sync::Once;

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod query;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("outlay=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

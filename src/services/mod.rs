//! Service layer for Outlay
//!
//! The service layer provides the ledger engine on top of the storage layer,
//! handling validation, persistence, queries, and batch import.

pub mod import;
pub mod ledger;

pub use ledger::{ImportOutcome, LedgerService, QueryResult};

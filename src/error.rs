//! Crate-wide error type
//!
//! One thiserror enum covers every failure the engine surfaces; callers
//! branch on the classification helpers rather than on message text.

use thiserror::Error;

/// Errors surfaced by ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// A draft failed validation; nothing was mutated
    #[error("Validation error: {0}")]
    Validation(String),

    /// An update or lookup target does not exist
    ///
    /// Deleting an absent id is not an error; it reports `false` instead.
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A durable write failed after the in-memory change applied
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Persisted bytes that do not deserialize; `open` degrades to empty
    #[error("Malformed persisted data: {0}")]
    MalformedData(String),

    /// CSV export could not be produced or written
    #[error("Export error: {0}")]
    Export(String),

    /// A CSV file could not be opened or its header understood
    #[error("Import error: {0}")]
    Import(String),

    /// Settings or path resolution failure
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LedgerError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// True for [`LedgerError::NotFound`]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for [`LedgerError::Validation`]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// True for [`LedgerError::Persistence`]
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

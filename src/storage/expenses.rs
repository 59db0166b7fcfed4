//! In-memory expense record store
//!
//! Single source of truth for the record collection. Records keep their
//! insertion order; updates replace fields in place without moving the
//! record. Serialization to and from the persisted byte form lives here,
//! the degrade-to-empty policy for corrupt data lives in the service layer.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{ExpenseDraft, ExpenseId, ExpenseRecord};

/// Owned collection of expense records in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseStore {
    records: Vec<ExpenseRecord>,
}

impl ExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserialize a store from persisted bytes (a JSON array of records)
    pub fn from_bytes(bytes: &[u8]) -> LedgerResult<Self> {
        let records: Vec<ExpenseRecord> = serde_json::from_slice(bytes)
            .map_err(|e| LedgerError::MalformedData(format!("Failed to parse expenses: {}", e)))?;
        Ok(Self { records })
    }

    /// Serialize the full record array for persistence
    pub fn to_bytes(&self) -> LedgerResult<Vec<u8>> {
        serde_json::to_vec_pretty(&self.records).map_err(|e| {
            LedgerError::Persistence(format!("Failed to serialize expenses: {}", e))
        })
    }

    /// Validate a draft, assign a fresh id, and append the record
    pub fn create(&mut self, draft: ExpenseDraft) -> LedgerResult<ExpenseRecord> {
        let record = ExpenseRecord::from_draft(draft)
            .map_err(|e| LedgerError::Validation(e.to_string()))?;
        self.records.push(record.clone());
        Ok(record)
    }

    /// Replace the non-id fields of the record with the given id
    ///
    /// The record keeps its position in the sequence. An absent id is an
    /// error; update never creates a record.
    pub fn update(&mut self, id: ExpenseId, draft: ExpenseDraft) -> LedgerResult<ExpenseRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| LedgerError::expense_not_found(id.to_string()))?;

        record
            .apply_draft(draft)
            .map_err(|e| LedgerError::Validation(e.to_string()))?;
        Ok(record.clone())
    }

    /// Remove the record with the given id, reporting whether one was removed
    ///
    /// Deleting an absent id is a no-op, not an error.
    pub fn delete(&mut self, id: ExpenseId) -> bool {
        match self.records.iter().position(|r| r.id == id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Get a record by id
    pub fn get(&self, id: ExpenseId) -> Option<&ExpenseRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// All records in current store order
    pub fn all(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

//! Expense record model
//!
//! Represents a single spending entry: amount, category, date, optional note
//! and payment method. Drafts are validated before they ever reach the store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// Caller-supplied field values for an expense, prior to id assignment
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    /// Amount spent (must be strictly positive)
    pub amount: Money,

    /// Category label (must be non-empty)
    pub category: String,

    /// Date of the expense
    pub date: NaiveDate,

    /// Free-text note, may be empty
    pub note: String,

    /// Payment method label, if tracked
    pub payment_method: Option<String>,
}

impl ExpenseDraft {
    /// Create a draft with the required fields
    pub fn new(amount: Money, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            category: category.into(),
            date,
            note: String::new(),
            payment_method: None,
        }
    }

    /// Set the note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Set the payment method
    pub fn with_payment_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = Some(method.into());
        self
    }

    /// Validate the draft against the record invariants
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if !self.amount.is_positive() {
            return Err(DraftValidationError::NonPositiveAmount {
                amount: self.amount,
            });
        }

        if self.category.trim().is_empty() {
            return Err(DraftValidationError::EmptyCategory);
        }

        Ok(())
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier, assigned at creation, immutable thereafter
    pub id: ExpenseId,

    /// Amount spent (strictly positive)
    pub amount: Money,

    /// Category label, case-preserved for display
    pub category: String,

    /// Date of the expense
    pub date: NaiveDate,

    /// Free-text note, may be empty
    #[serde(default)]
    pub note: String,

    /// Payment method label; absent in the reduced record shape
    #[serde(default)]
    pub payment_method: Option<String>,
}

impl ExpenseRecord {
    /// Build a record from a validated draft, assigning a fresh id
    pub fn from_draft(draft: ExpenseDraft) -> Result<Self, DraftValidationError> {
        draft.validate()?;
        Ok(Self {
            id: ExpenseId::new(),
            amount: draft.amount,
            category: draft.category.trim().to_string(),
            date: draft.date,
            note: draft.note,
            payment_method: normalize_payment_method(draft.payment_method),
        })
    }

    /// Replace every field except the id with the draft's values
    pub fn apply_draft(&mut self, draft: ExpenseDraft) -> Result<(), DraftValidationError> {
        draft.validate()?;
        self.amount = draft.amount;
        self.category = draft.category.trim().to_string();
        self.date = draft.date;
        self.note = draft.note;
        self.payment_method = normalize_payment_method(draft.payment_method);
        Ok(())
    }

    /// Turn the record back into a draft (used when editing from the CLI)
    pub fn to_draft(&self) -> ExpenseDraft {
        ExpenseDraft {
            amount: self.amount,
            category: self.category.clone(),
            date: self.date,
            note: self.note.clone(),
            payment_method: self.payment_method.clone(),
        }
    }

    /// The `YYYY-MM` grouping key for monthly aggregation
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// The `YYYY-MM-DD` form of the date
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}

/// Empty or whitespace-only payment methods collapse to None
fn normalize_payment_method(method: Option<String>) -> Option<String> {
    method.filter(|m| !m.trim().is_empty())
}

/// Validation errors for expense drafts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftValidationError {
    NonPositiveAmount { amount: Money },
    EmptyCategory,
}

impl fmt::Display for DraftValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount { amount } => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::EmptyCategory => write!(f, "Category must not be empty"),
        }
    }
}

impl std::error::Error for DraftValidationError {}

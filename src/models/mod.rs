//! Core data models for Outlay
//!
//! This module contains the data structures that represent the expense
//! ledger domain: expense records, drafts, money, ids, theme preference.

pub mod expense;
pub mod ids;
pub mod money;
pub mod theme;

pub use expense::{DraftValidationError, ExpenseDraft, ExpenseRecord};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use theme::Theme;

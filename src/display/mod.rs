//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and summary reports for
//! terminal display.

pub mod expense;
pub mod summary;

pub use expense::{format_expense_details, format_expense_list, format_expense_row};
pub use summary::format_summary;

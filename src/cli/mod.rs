//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;

pub mod expense;
pub mod export;
pub mod filter;
pub mod import;
pub mod report;
pub mod theme;

pub use expense::{
    handle_add_command, handle_edit_command, handle_list_command, handle_remove_command, AddArgs,
    EditArgs, ListArgs, RemoveArgs,
};
pub use export::{handle_export_command, ExportArgs};
pub use filter::FilterArgs;
pub use import::{handle_import_command, ImportArgs};
pub use report::{handle_summary_command, SummaryArgs};
pub use theme::{handle_theme_command, ThemeArgs};

/// Parse a YYYY-MM-DD date argument
pub(crate) fn parse_date_arg(value: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", value))
    })
}

/// Parse a decimal amount argument
pub(crate) fn parse_amount_arg(value: &str) -> LedgerResult<Money> {
    Money::parse(value).map_err(|e| {
        LedgerError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '12.50'. Error: {}",
            value, e
        ))
    })
}

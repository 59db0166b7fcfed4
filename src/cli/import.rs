//! Import CLI command
//!
//! Imports expenses from a CSV file with automatic column detection.

use std::path::PathBuf;

use clap::Args;

use crate::error::{LedgerError, LedgerResult};
use crate::services::{import, LedgerService};
use crate::storage::KeyValueStore;

/// Arguments for the import command
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Path to the CSV file
    pub file: PathBuf,
}

/// Handle the import command
pub fn handle_import_command<S: KeyValueStore>(
    ledger: &mut LedgerService<S>,
    args: ImportArgs,
) -> LedgerResult<()> {
    if !args.file.exists() {
        return Err(LedgerError::Import(format!(
            "File not found: {}",
            args.file.display()
        )));
    }

    let rows = import::read_expense_rows(&args.file)?;

    if rows.is_empty() {
        println!("No expenses found in CSV file.");
        return Ok(());
    }

    let outcome = ledger.import_expenses(rows)?;

    println!("Import complete!");
    println!("  Imported: {}", outcome.imported);
    if !outcome.is_clean() {
        println!("  Errors:   {}", outcome.errors.len());
        for (line, message) in &outcome.errors {
            println!("    Row {}: {}", line, message);
        }
    }

    Ok(())
}

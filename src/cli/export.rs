//! Export CLI command
//!
//! Exports the filtered view as CSV, either to a file or to stdout.

use std::path::PathBuf;

use clap::Args;

use super::filter::FilterArgs;
use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::export::{compact_columns, standard_columns};
use crate::services::LedgerService;
use crate::storage::KeyValueStore;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output file path (writes to stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Omit the payment method column
    #[arg(long)]
    pub compact: bool,
}

/// Handle the export command
pub fn handle_export_command<S: KeyValueStore>(
    ledger: &LedgerService<S>,
    settings: &Settings,
    args: ExportArgs,
) -> LedgerResult<()> {
    let filter = args.filter.to_filter()?;

    let columns = if args.compact || !settings.track_payment_method {
        compact_columns()
    } else {
        standard_columns()
    };

    let csv = ledger.export_view(&filter, &columns)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &csv).map_err(|e| {
                LedgerError::Export(format!("Failed to write {}: {}", path.display(), e))
            })?;

            let count = csv.lines().count().saturating_sub(1);
            println!("Exported {} expenses to: {}", count, path.display());
        }
        None => print!("{}", csv),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, Money};
    use crate::storage::MemoryStore;
    use tempfile::TempDir;

    fn sample_ledger() -> LedgerService<MemoryStore> {
        let mut ledger = LedgerService::open(MemoryStore::new());
        let draft = ExpenseDraft::new(
            Money::from_cents(1250),
            "Food",
            "2024-01-10".parse().unwrap(),
        )
        .with_payment_method("card");
        ledger.add_expense(draft).unwrap();
        ledger
    }

    #[test]
    fn test_export_writes_file() {
        let ledger = sample_ledger();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        let args = ExportArgs {
            filter: FilterArgs::default(),
            output: Some(path.clone()),
            compact: false,
        };
        handle_export_command(&ledger, &Settings::default(), args).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Amount,Category,Date,Note,Payment Method"));
        assert!(contents.contains("12.50,Food,2024-01-10,,card"));
    }

    #[test]
    fn test_compact_flag_drops_payment_column() {
        let ledger = sample_ledger();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        let args = ExportArgs {
            filter: FilterArgs::default(),
            output: Some(path.clone()),
            compact: true,
        };
        handle_export_command(&ledger, &Settings::default(), args).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Amount,Category,Date,Note\n"));
        assert!(!contents.contains("card"));
    }

    #[test]
    fn test_untracked_payment_method_exports_compact() {
        let ledger = sample_ledger();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        let mut settings = Settings::default();
        settings.track_payment_method = false;

        let args = ExportArgs {
            filter: FilterArgs::default(),
            output: Some(path.clone()),
            compact: false,
        };
        handle_export_command(&ledger, &settings, args).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("Payment Method"));
    }
}

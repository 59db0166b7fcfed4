//! Summary CLI command
//!
//! Renders the category breakdown and monthly trend for the filtered view.

use clap::Args;

use super::filter::FilterArgs;
use crate::config::Settings;
use crate::display::format_summary;
use crate::error::LedgerResult;
use crate::services::LedgerService;
use crate::storage::KeyValueStore;

/// Arguments for the summary command
#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Handle the summary command
pub fn handle_summary_command<S: KeyValueStore>(
    ledger: &LedgerService<S>,
    settings: &Settings,
    args: SummaryArgs,
) -> LedgerResult<()> {
    let filter = args.filter.to_filter()?;
    let result = ledger.query(&filter);

    print!("{}", format_summary(&result, settings));

    Ok(())
}

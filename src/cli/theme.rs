//! Theme CLI command
//!
//! Shows or sets the persisted color theme preference.

use clap::Args;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Theme;
use crate::services::LedgerService;
use crate::storage::KeyValueStore;

/// Arguments for the theme command
#[derive(Args, Debug)]
pub struct ThemeArgs {
    /// Theme to set ("dark" or "light"); shows the current theme when omitted
    pub theme: Option<String>,
}

/// Handle the theme command
pub fn handle_theme_command<S: KeyValueStore>(
    ledger: &mut LedgerService<S>,
    args: ThemeArgs,
) -> LedgerResult<()> {
    match args.theme {
        Some(value) => {
            let theme: Theme = value.parse().map_err(LedgerError::Validation)?;
            ledger.set_theme(theme)?;
            println!("Theme set to {}", theme);
        }
        None => match ledger.theme() {
            Some(theme) => println!("Theme: {}", theme),
            None => println!("Theme: {} (default)", Theme::default()),
        },
    }

    Ok(())
}

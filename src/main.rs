use anyhow::Result;
use clap::{Parser, Subcommand};

use outlay::cli::{
    handle_add_command, handle_edit_command, handle_export_command, handle_import_command,
    handle_list_command, handle_remove_command, handle_summary_command, handle_theme_command,
    AddArgs, EditArgs, ExportArgs, ImportArgs, ListArgs, RemoveArgs, SummaryArgs, ThemeArgs,
};
use outlay::config::{OutlayPaths, Settings};
use outlay::services::LedgerService;
use outlay::storage::FileStore;

#[derive(Parser)]
#[command(
    name = "outlay",
    version,
    about = "Terminal-based personal expense ledger",
    long_about = "Outlay is a terminal-based expense tracker. It records spending \
                  with categories, notes, and payment methods, and answers questions \
                  about where the money went through filters, summaries, and CSV \
                  export."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense
    Add(AddArgs),

    /// Edit an existing expense
    Edit(EditArgs),

    /// Remove an expense
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// List expenses
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show spending summary by category and month
    Summary(SummaryArgs),

    /// Export expenses to CSV
    Export(ExportArgs),

    /// Import expenses from CSV
    Import(ImportArgs),

    /// Show or set the color theme
    Theme(ThemeArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    outlay::init_tracing();

    let cli = Cli::parse();

    let paths = OutlayPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut ledger = LedgerService::open(FileStore::new(paths.data_dir()));

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&mut ledger, &settings, args)?,
        Some(Commands::Edit(args)) => handle_edit_command(&mut ledger, &settings, args)?,
        Some(Commands::Remove(args)) => handle_remove_command(&mut ledger, &settings, args)?,
        Some(Commands::List(args)) => handle_list_command(&ledger, &settings, args)?,
        Some(Commands::Summary(args)) => handle_summary_command(&ledger, &settings, args)?,
        Some(Commands::Export(args)) => handle_export_command(&ledger, &settings, args)?,
        Some(Commands::Import(args)) => handle_import_command(&mut ledger, args)?,
        Some(Commands::Theme(args)) => handle_theme_command(&mut ledger, args)?,
        Some(Commands::Config) => {
            println!("Outlay Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Track payment method: {}", settings.track_payment_method);
        }
        None => {
            println!("Outlay - Terminal-based personal expense ledger");
            println!();
            println!("Run 'outlay --help' for usage information.");
            println!("Run 'outlay add 12.50 Food' to record your first expense.");
        }
    }

    Ok(())
}

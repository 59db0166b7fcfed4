//! Expense CLI commands
//!
//! Implements the add, edit, remove, and list commands.

use clap::Args;

use super::{parse_amount_arg, parse_date_arg};
use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::LedgerResult;
use crate::models::ExpenseDraft;
use crate::services::LedgerService;
use crate::storage::KeyValueStore;

use super::filter::FilterArgs;

/// Arguments for the add command
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount (e.g. "12.50")
    pub amount: String,

    /// Category name
    pub category: String,

    /// Expense date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Note
    #[arg(short, long)]
    pub note: Option<String>,

    /// Payment method (e.g. "card", "cash")
    #[arg(short, long)]
    pub payment: Option<String>,
}

/// Arguments for the edit command
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Expense ID (full or unique prefix)
    pub id: String,

    /// New amount
    #[arg(short, long)]
    pub amount: Option<String>,

    /// New category
    #[arg(short, long)]
    pub category: Option<String>,

    /// New date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,

    /// New note
    #[arg(short, long)]
    pub note: Option<String>,

    /// New payment method ("none" clears it)
    #[arg(short, long)]
    pub payment: Option<String>,
}

/// Arguments for the remove command
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Expense ID (full or unique prefix)
    pub id: String,

    /// Skip confirmation
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Handle the add command
pub fn handle_add_command<S: KeyValueStore>(
    ledger: &mut LedgerService<S>,
    settings: &Settings,
    args: AddArgs,
) -> LedgerResult<()> {
    let AddArgs {
        amount,
        category,
        date,
        note,
        payment,
    } = args;

    let amount = parse_amount_arg(&amount)?;
    let date = match date {
        Some(date_str) => parse_date_arg(&date_str)?,
        None => chrono::Local::now().date_naive(),
    };

    let mut draft = ExpenseDraft::new(amount, category, date);
    if let Some(note) = note {
        draft = draft.with_note(note);
    }
    if let Some(payment) = payment {
        draft = draft.with_payment_method(payment);
    }

    let record = ledger.add_expense(draft)?;

    println!("Added expense:");
    println!("  Id:       {}", record.id);
    println!("  Date:     {}", record.date);
    println!(
        "  Amount:   {}",
        record.amount.format_with_symbol(&settings.currency_symbol)
    );
    println!("  Category: {}", record.category);
    if !record.note.is_empty() {
        println!("  Note:     {}", record.note);
    }
    if let Some(method) = &record.payment_method {
        println!("  Payment:  {}", method);
    }

    Ok(())
}

/// Handle the edit command
///
/// Flags that were not given keep the expense's current values.
pub fn handle_edit_command<S: KeyValueStore>(
    ledger: &mut LedgerService<S>,
    settings: &Settings,
    args: EditArgs,
) -> LedgerResult<()> {
    let record = ledger.find_expense(&args.id)?;
    let mut draft = record.to_draft();

    if let Some(amount) = args.amount {
        draft.amount = parse_amount_arg(&amount)?;
    }
    if let Some(category) = args.category {
        draft.category = category;
    }
    if let Some(date) = args.date {
        draft.date = parse_date_arg(&date)?;
    }
    if let Some(note) = args.note {
        draft.note = note;
    }
    if let Some(payment) = args.payment {
        draft.payment_method = if payment.is_empty() || payment.to_lowercase() == "none" {
            None
        } else {
            Some(payment)
        };
    }

    let updated = ledger.edit_expense(record.id, draft)?;

    println!("Updated expense: {}", updated.id);
    println!("  Date:     {}", updated.date);
    println!(
        "  Amount:   {}",
        updated.amount.format_with_symbol(&settings.currency_symbol)
    );
    println!("  Category: {}", updated.category);

    Ok(())
}

/// Handle the remove command
pub fn handle_remove_command<S: KeyValueStore>(
    ledger: &mut LedgerService<S>,
    settings: &Settings,
    args: RemoveArgs,
) -> LedgerResult<()> {
    let record = ledger.find_expense(&args.id)?;

    if !args.force {
        println!("About to remove expense:");
        print!("{}", format_expense_details(&record, settings));
        println!();
        println!("Use --force to confirm removal");
        return Ok(());
    }

    if ledger.remove_expense(record.id)? {
        println!(
            "Removed expense: {} ({} {})",
            record.id, record.date, record.category
        );
    }

    Ok(())
}

/// Handle the list command
pub fn handle_list_command<S: KeyValueStore>(
    ledger: &LedgerService<S>,
    settings: &Settings,
    args: ListArgs,
) -> LedgerResult<()> {
    let filter = args.filter.to_filter()?;
    let result = ledger.query(&filter);

    print!("{}", format_expense_list(&result.records, settings));

    Ok(())
}

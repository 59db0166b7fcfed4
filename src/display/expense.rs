//! Expense display formatting
//!
//! Provides utilities for formatting expense records for terminal display,
//! including list views and detail views.

use crate::config::Settings;
use crate::models::{ExpenseRecord, Money};

/// Format a single expense for display (list row)
pub fn format_expense_row(record: &ExpenseRecord, settings: &Settings) -> String {
    let amount = record.amount.format_with_symbol(&settings.currency_symbol);

    if settings.track_payment_method {
        let payment = record.payment_method.as_deref().unwrap_or("");
        format!(
            "{:12} {} {} {:>12} {} {}",
            record.id,
            record.date.format("%Y-%m-%d"),
            truncate(&record.category, 18),
            amount,
            truncate(payment, 10),
            record.note
        )
    } else {
        format!(
            "{:12} {} {} {:>12} {}",
            record.id,
            record.date.format("%Y-%m-%d"),
            truncate(&record.category, 18),
            amount,
            record.note
        )
    }
}

/// Format a list of expenses as a table
pub fn format_expense_list(records: &[ExpenseRecord], settings: &Settings) -> String {
    if records.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();

    if settings.track_payment_method {
        output.push_str(&format!(
            "{:12} {:10} {:18} {:>12} {:10} {}\n",
            "Id", "Date", "Category", "Amount", "Payment", "Note"
        ));
        output.push_str(&"-".repeat(78));
    } else {
        output.push_str(&format!(
            "{:12} {:10} {:18} {:>12} {}\n",
            "Id", "Date", "Category", "Amount", "Note"
        ));
        output.push_str(&"-".repeat(66));
    }
    output.push('\n');

    for record in records {
        output.push_str(&format_expense_row(record, settings));
        output.push('\n');
    }

    let total: Money = records.iter().map(|r| r.amount).sum();
    output.push_str(&format!(
        "{:>43} {:>12}\n",
        "Total:",
        total.format_with_symbol(&settings.currency_symbol)
    ));

    output
}

/// Format expense details for display
pub fn format_expense_details(record: &ExpenseRecord, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", record.id));
    output.push_str(&format!("Date:        {}\n", record.date.format("%Y-%m-%d")));
    output.push_str(&format!(
        "Amount:      {}\n",
        record.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Category:    {}\n", record.category));

    if !record.note.is_empty() {
        output.push_str(&format!("Note:        {}\n", record.note));
    }

    if let Some(method) = &record.payment_method {
        output.push_str(&format!("Payment:     {}\n", method));
    }

    output
}

/// Truncate a string to a maximum width in chars, padding short strings
fn truncate(s: &str, max_len: usize) -> String {
    // counted in chars, not bytes, so multibyte text never splits mid-char
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

//! Summary report formatting
//!
//! Renders the category breakdown and monthly trend for terminal display.

use crate::config::Settings;
use crate::services::QueryResult;

/// Format a query result as a summary report
pub fn format_summary(result: &QueryResult, settings: &Settings) -> String {
    if result.records.is_empty() {
        return "No expenses to summarize.\n".to_string();
    }

    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    output.push_str("Expense Summary\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "Total Spending: {}\n",
        result.by_category.grand_total().format_with_symbol(symbol)
    ));
    output.push_str(&format!("Expenses: {}\n\n", result.records.len()));

    // Category breakdown, in first-seen order
    output.push_str(&format!("{:<24} {:>12} {:>8}\n", "Category", "Amount", "%"));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for row in result.by_category.totals() {
        output.push_str(&format!(
            "{:<24} {:>12} {:>7.1}%\n",
            row.category,
            row.total.format_with_symbol(symbol),
            result.by_category.percentage(row.total)
        ));
    }

    // Monthly trend, oldest first
    output.push('\n');
    output.push_str(&format!("{:<10} {:>12}\n", "Month", "Amount"));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    let max_month = result
        .by_month
        .totals()
        .iter()
        .map(|t| t.total.cents())
        .max()
        .unwrap_or(0);

    for row in result.by_month.totals() {
        output.push_str(&format!(
            "{:<10} {:>12}  {}\n",
            row.month,
            row.total.format_with_symbol(symbol),
            format_bar(row.total.cents() as f64, max_month as f64, 24)
        ));
    }

    output
}

/// Create a simple bar chart representation
fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

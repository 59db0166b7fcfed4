//! Shared filter arguments
//!
//! Every read command (list, summary, export) accepts the same set of
//! optional filter flags, flattened into its own argument struct.

use clap::Args;

use super::{parse_amount_arg, parse_date_arg};
use crate::error::LedgerResult;
use crate::query::ExpenseFilter;

/// Filter flags shared by list, summary, and export
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Filter by category (case-insensitive substring)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Filter by month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Filter by payment method (exact match)
    #[arg(short, long)]
    pub payment: Option<String>,

    /// Start date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub from: Option<String>,

    /// End date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub to: Option<String>,

    /// Minimum amount, inclusive (e.g. "10.00")
    #[arg(long)]
    pub min_amount: Option<String>,

    /// Maximum amount, inclusive
    #[arg(long)]
    pub max_amount: Option<String>,
}

impl FilterArgs {
    /// Build an expense filter from the parsed flags
    pub fn to_filter(&self) -> LedgerResult<ExpenseFilter> {
        let mut filter = ExpenseFilter::new();

        if let Some(category) = &self.category {
            filter = filter.category(category.clone());
        }
        if let Some(month) = &self.month {
            filter = filter.month(month.clone());
        }
        if let Some(payment) = &self.payment {
            filter = filter.payment_method(payment.clone());
        }
        if let Some(from) = &self.from {
            filter = filter.start_date(parse_date_arg(from)?);
        }
        if let Some(to) = &self.to {
            filter = filter.end_date(parse_date_arg(to)?);
        }
        if let Some(min) = &self.min_amount {
            filter = filter.min_amount(parse_amount_arg(min)?);
        }
        if let Some(max) = &self.max_amount {
            filter = filter.max_amount(parse_amount_arg(max)?);
        }

        Ok(filter)
    }
}

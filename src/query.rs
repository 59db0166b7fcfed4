//! Filter pipeline for expense queries
//!
//! A filter is a set of independently optional criteria combined with logical
//! AND. Filtering re-runs over the full record set on every query and never
//! mutates the store; it produces a new owned view.

use chrono::NaiveDate;

use crate::models::{ExpenseRecord, Money};

/// Criteria for one query; every field is optional and a no-op when unset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFilter {
    /// Substring match against the category, case-insensitive
    pub category: Option<String>,
    /// `YYYY-MM` prefix match against the date
    pub month: Option<String>,
    /// Exact match against the payment method
    pub payment_method: Option<String>,
    /// Earliest date to include (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Latest date to include (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Smallest amount to include (inclusive)
    pub min_amount: Option<Money>,
    /// Largest amount to include (inclusive)
    pub max_amount: Option<Money>,
}

impl ExpenseFilter {
    /// Create a filter that matches every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category substring (case-insensitive)
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by `YYYY-MM` month
    pub fn month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    /// Filter by exact payment method
    pub fn payment_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = Some(method.into());
        self
    }

    /// Include only records on or after this date
    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Include only records on or before this date
    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Include only records of at least this amount
    pub fn min_amount(mut self, amount: Money) -> Self {
        self.min_amount = Some(amount);
        self
    }

    /// Include only records of at most this amount
    pub fn max_amount(mut self, amount: Money) -> Self {
        self.max_amount = Some(amount);
        self
    }

    /// Whether a single record satisfies every supplied criterion
    ///
    /// Empty-string text criteria count as unset, mirroring blank form
    /// inputs. A record without a payment method never matches a supplied
    /// payment-method criterion.
    pub fn matches(&self, record: &ExpenseRecord) -> bool {
        if let Some(category) = &self.category {
            if !category.is_empty()
                && !record
                    .category
                    .to_lowercase()
                    .contains(&category.to_lowercase())
            {
                return false;
            }
        }

        if let Some(month) = &self.month {
            if !month.is_empty() && !record.date_string().starts_with(month.as_str()) {
                return false;
            }
        }

        if let Some(method) = &self.payment_method {
            if !method.is_empty() && record.payment_method.as_deref() != Some(method.as_str()) {
                return false;
            }
        }

        if let Some(start) = self.start_date {
            if record.date < start {
                return false;
            }
        }

        if let Some(end) = self.end_date {
            if record.date > end {
                return false;
            }
        }

        if let Some(min) = self.min_amount {
            if record.amount < min {
                return false;
            }
        }

        if let Some(max) = self.max_amount {
            if record.amount > max {
                return false;
            }
        }

        true
    }

    /// Produce the filtered view of a record set
    pub fn apply(&self, records: &[ExpenseRecord]) -> Vec<ExpenseRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

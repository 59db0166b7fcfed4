//! Monthly trend
//!
//! Sums spending per `YYYY-MM` month key over a filtered view and emits the
//! months in ascending order. The ordering is what makes the trend line
//! render chronologically; it is not cosmetic.

use std::collections::BTreeMap;

use crate::models::{ExpenseRecord, Money};

/// One month's summed spending
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    /// `YYYY-MM` month key
    pub month: String,
    /// Summed amount for this month
    pub total: Money,
}

/// Spending totals per month, ascending by month key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyTrend {
    totals: Vec<MonthlyTotal>,
}

impl MonthlyTrend {
    /// Accumulate totals over a record set
    pub fn compute(records: &[ExpenseRecord]) -> Self {
        // BTreeMap keys iterate lexically ascending, which for YYYY-MM keys
        // is chronological order.
        let mut by_month: BTreeMap<String, Money> = BTreeMap::new();

        for record in records {
            *by_month.entry(record.month_key()).or_insert(Money::zero()) += record.amount;
        }

        let totals = by_month
            .into_iter()
            .map(|(month, total)| MonthlyTotal { month, total })
            .collect();

        Self { totals }
    }

    /// Rows in ascending month order
    pub fn totals(&self) -> &[MonthlyTotal] {
        &self.totals
    }

    /// Look up the total for a month key
    pub fn get(&self, month: &str) -> Option<Money> {
        self.totals
            .iter()
            .find(|t| t.month == month)
            .map(|t| t.total)
    }

    /// Number of distinct months
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Whether any month was seen
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseDraft;
    use chrono::NaiveDate;

    fn record(amount_cents: i64, date: &str) -> ExpenseRecord {
        ExpenseRecord::from_draft(ExpenseDraft::new(
            Money::from_cents(amount_cents),
            "Misc",
            date.parse::<NaiveDate>().unwrap(),
        ))
        .unwrap()
    }

    #[test]
    fn test_months_sorted_ascending_for_any_input_order() {
        let records = vec![
            record(3000, "2024-03-05"),
            record(1000, "2024-01-10"),
            record(2000, "2024-02-20"),
        ];

        let trend = MonthlyTrend::compute(&records);
        let rows: Vec<_> = trend
            .totals()
            .iter()
            .map(|t| (t.month.as_str(), t.total.cents()))
            .collect();
        assert_eq!(
            rows,
            vec![("2024-01", 1000), ("2024-02", 2000), ("2024-03", 3000)]
        );
    }

    #[test]
    fn test_same_month_sums() {
        let records = vec![
            record(1000, "2024-01-05"),
            record(500, "2024-01-28"),
            record(200, "2024-02-01"),
        ];

        let trend = MonthlyTrend::compute(&records);
        assert_eq!(trend.get("2024-01"), Some(Money::from_cents(1500)));
        assert_eq!(trend.get("2024-02"), Some(Money::from_cents(200)));
        assert_eq!(trend.len(), 2);
    }

    #[test]
    fn test_year_boundary_order() {
        let records = vec![
            record(100, "2024-01-15"),
            record(200, "2023-12-31"),
            record(300, "2023-11-01"),
        ];

        let trend = MonthlyTrend::compute(&records);
        let months: Vec<_> = trend.totals().iter().map(|t| t.month.as_str()).collect();
        assert_eq!(months, vec!["2023-11", "2023-12", "2024-01"]);
    }

    #[test]
    fn test_empty_input() {
        let trend = MonthlyTrend::compute(&[]);
        assert!(trend.is_empty());
        assert_eq!(trend.totals().len(), 0);
    }
}

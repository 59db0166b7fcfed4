//! Category breakdown
//!
//! Sums spending per category label over a filtered view. Labels keep their
//! exact stored form (no case folding), and rows come out in the order each
//! category first appears in the input, which is the order summary tables
//! render in.

use std::collections::HashMap;

use crate::models::{ExpenseRecord, Money};

/// One category's summed spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category label, exactly as stored
    pub category: String,
    /// Summed amount for this category
    pub total: Money,
}

/// Spending totals per category, in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown {
    totals: Vec<CategoryTotal>,
    grand_total: Money,
}

impl CategoryBreakdown {
    /// Accumulate totals over a record set
    pub fn compute(records: &[ExpenseRecord]) -> Self {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut totals: Vec<CategoryTotal> = Vec::new();
        let mut grand_total = Money::zero();

        for record in records {
            grand_total += record.amount;

            match index.get(&record.category) {
                Some(&position) => totals[position].total += record.amount,
                None => {
                    index.insert(record.category.clone(), totals.len());
                    totals.push(CategoryTotal {
                        category: record.category.clone(),
                        total: record.amount,
                    });
                }
            }
        }

        Self {
            totals,
            grand_total,
        }
    }

    /// Rows in first-occurrence order
    pub fn totals(&self) -> &[CategoryTotal] {
        &self.totals
    }

    /// Sum over every row
    pub fn grand_total(&self) -> Money {
        self.grand_total
    }

    /// Look up the total for a category label (exact match)
    pub fn get(&self, category: &str) -> Option<Money> {
        self.totals
            .iter()
            .find(|t| t.category == category)
            .map(|t| t.total)
    }

    /// A row's share of the grand total, as a percentage
    pub fn percentage(&self, total: Money) -> f64 {
        if self.grand_total.is_zero() {
            0.0
        } else {
            (total.cents() as f64 / self.grand_total.cents() as f64) * 100.0
        }
    }

    /// Number of distinct categories
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Whether any category was seen
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

//! Integer-cents money amounts
//!
//! Amounts are whole cents in an i64, so persisted values round-trip exactly
//! and summing never drifts the way floating point would.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use thiserror::Error;

/// A monetary amount in whole cents
///
/// The ledger stores only positive amounts; negative values appear
/// transiently when parsing user input and are rejected by draft validation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Amount from a cent count
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// The zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The cent count
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whether the amount is exactly zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Whether the amount is greater than zero
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Parse an amount like "12.50", "$12.50", or "12"
    ///
    /// A bare integer means whole currency units, not cents. Fraction digits
    /// beyond the second are truncated.
    pub fn parse(input: &str) -> Result<Self, MoneyParseError> {
        let trimmed = input.trim();
        let bad = || MoneyParseError(trimmed.to_string());

        let (sign, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let cents = match rest.split_once('.') {
            Some((units, fraction)) => {
                let units: i64 = units.parse().map_err(|_| bad())?;
                let hundredths: i64 = match fraction.len() {
                    0 => 0,
                    1 => fraction.parse::<i64>().map_err(|_| bad())? * 10,
                    _ => {
                        // get is None when byte 2 would split a multibyte char
                        let digits = fraction.get(..2).ok_or_else(|| bad())?;
                        digits.parse().map_err(|_| bad())?
                    }
                };
                units * 100 + hundredths
            }
            None => rest.parse::<i64>().map_err(|_| bad())? * 100,
        };

        Ok(Self(sign * cents))
    }

    /// Plain decimal form with no symbol, e.g. "12.50"
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.abs();
        format!("{}{}.{:02}", sign, magnitude / 100, magnitude % 100)
    }

    /// Decimal form with a currency symbol, e.g. "$12.50"
    ///
    /// The sign precedes the symbol: "-$3.25".
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.abs();
        format!("{}{}{}.{:02}", sign, symbol, magnitude / 100, magnitude % 100)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|m| m.0).sum())
    }
}

/// Error for strings that do not parse as an amount
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a valid amount: '{0}'")]
pub struct MoneyParseError(pub String);

//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues in prices and subtotals. The store trades in US
//! dollars only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A US dollar amount.
///
/// Amounts are stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Dollar sign used by [`Money::display`].
    pub const SYMBOL: &'static str = "$";

    /// Create a USD amount from cents.
    pub fn usd(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    pub fn zero() -> Self {
        Self::usd(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Format as a display string (e.g., "$89.99").
    pub fn display(&self) -> String {
        format!("{}{}", Self::SYMBOL, self.display_amount())
    }

    /// Format without symbol (e.g., "89.99").
    fn display_amount(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Try to add another Money value, returning None on overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.amount_cents.checked_add(other.amount_cents).map(Money::usd)
    }

    /// Try to multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents.checked_mul(factor).map(Money::usd)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::usd(8999).display(), "$89.99");
        assert_eq!(Money::usd(5).display(), "$0.05");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_money_addition() {
        let total = Money::usd(1000).try_add(&Money::usd(500)).unwrap();
        assert_eq!(total.amount_cents, 1500);
    }

    #[test]
    fn test_money_add_overflow() {
        assert!(Money::usd(i64::MAX).try_add(&Money::usd(1)).is_none());
    }

    #[test]
    fn test_money_multiply_overflow() {
        assert!(Money::usd(i64::MAX).try_multiply(2).is_none());
        assert_eq!(Money::usd(8999).try_multiply(3).unwrap().amount_cents, 26997);
    }
}

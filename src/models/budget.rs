//! Budget model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A monthly spending ceiling
///
/// Keyed by `(month, year)`; the stores hold at most one budget per key.
/// Budgets are matched to expenses purely by calendar month and year at
/// query time, there are no cross-references by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Calendar month, 1-12
    pub month: u32,

    /// Calendar year
    pub year: i32,

    /// Non-negative spending ceiling
    pub amount: Money,
}

impl Budget {
    /// Create a new budget
    pub fn new(month: u32, year: i32, amount: Money) -> Self {
        Self {
            month,
            year,
            amount,
        }
    }

    /// Check if this budget covers the given month and year
    pub fn matches(&self, month: u32, year: i32) -> bool {
        self.month == month && self.year == year
    }

    /// Full month name for display ("March"), empty for an invalid month
    pub fn month_name(&self) -> String {
        month_name(self.month)
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.month_name(), self.year, self.amount)
    }
}

/// Full name of a calendar month (1-12), empty when out of range
pub fn month_name(month: u32) -> String {
    NaiveDate::from_ymd_opt(2000, month, 1)
        .map(|d| d.format("%B").to_string())
        .unwrap_or_default()
}

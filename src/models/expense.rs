//! Expense model

use chrono::{DateTime, Datelike, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A single recorded spending event
///
/// Ids are assigned by the engine as monotonically increasing integers
/// starting at 1 and are never reused, even after deletion. The date is
/// stamped at creation time and is not independently editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: u64,

    /// When the expense was recorded
    pub date: DateTime<Local>,

    /// What the money was spent on
    pub description: String,

    /// Non-negative amount
    pub amount: Money,

    /// Free-form category, "General" when none was supplied
    pub category: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        id: u64,
        date: DateTime<Local>,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            description: description.into(),
            amount,
            category: category.into(),
        }
    }

    /// Calendar month (1-12) of the expense date
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Calendar year of the expense date
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} ({})",
            self.id,
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.category
        )
    }
}

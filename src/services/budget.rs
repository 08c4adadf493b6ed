//! Budget service
//!
//! Manages monthly spending ceilings and evaluates them against recorded
//! expenses. Budgets and expenses are associated purely by calendar month
//! and year at query time.

use chrono::Datelike;

use crate::clock::{Clock, SystemClock};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Budget, Money};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
    clock: &'a dyn Clock,
}

/// How a month's spending compares to its budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    /// The budget being evaluated
    pub budget: Budget,
    /// Total spent in the budget's month
    pub spent: Money,
    /// Whether spending is strictly over the ceiling
    pub exceeded: bool,
    /// Amount over when exceeded, amount remaining otherwise
    pub delta: Money,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service using the system clock
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            clock: &SystemClock,
        }
    }

    /// Create a budget service with an injected clock (for tests)
    pub fn with_clock(storage: &'a Storage, clock: &'a dyn Clock) -> Self {
        Self { storage, clock }
    }

    /// Set the budget for a month, overwriting any existing amount for the
    /// same `(month, year)` key. The year defaults to the current year.
    pub fn set(&self, month: u32, amount: Money, year: Option<i32>) -> ExpenseResult<Budget> {
        if !(1..=12).contains(&month) {
            return Err(ExpenseError::Validation(
                "Month must be between 1 and 12".into(),
            ));
        }
        if amount.is_negative() {
            return Err(ExpenseError::Validation(
                "Budget amount cannot be negative".into(),
            ));
        }

        let year = year.unwrap_or_else(|| self.clock.now().year());
        let budget = Budget::new(month, year, amount);

        self.storage.budgets.upsert(budget.clone())?;
        self.storage.budgets.save()?;

        Ok(budget)
    }

    /// Get the budget for a month, if one is set. The year defaults to the
    /// current year.
    pub fn get(&self, month: u32, year: Option<i32>) -> ExpenseResult<Option<Budget>> {
        let year = year.unwrap_or_else(|| self.clock.now().year());
        self.storage.budgets.get(month, year)
    }

    /// Compare a month's spending against its budget
    ///
    /// Returns `None` when no budget is set for the month.
    pub fn status(&self, month: u32, year: Option<i32>) -> ExpenseResult<Option<BudgetStatus>> {
        let year = year.unwrap_or_else(|| self.clock.now().year());

        let budget = match self.storage.budgets.get(month, year)? {
            Some(budget) => budget,
            None => return Ok(None),
        };

        Ok(Some(self.status_of(budget)?))
    }

    /// All stored budgets with their spending status, sorted by year then
    /// month
    pub fn overview(&self) -> ExpenseResult<Vec<BudgetStatus>> {
        self.storage
            .budgets
            .get_all()?
            .into_iter()
            .map(|budget| self.status_of(budget))
            .collect()
    }

    fn status_of(&self, budget: Budget) -> ExpenseResult<BudgetStatus> {
        let spent: Money = self
            .storage
            .expenses
            .get_all()?
            .iter()
            .filter(|e| e.month() == budget.month && e.year() == budget.year)
            .map(|e| e.amount)
            .sum();

        let exceeded = spent > budget.amount;
        let delta = (spent - budget.amount).abs();

        Ok(BudgetStatus {
            budget,
            spent,
            exceeded,
            delta,
        })
    }
}

//! Budget repository for JSON storage
//!
//! Manages loading and saving the budget collection to budgets.json. Budgets
//! are keyed by `(month, year)` with at most one record per key.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ExpenseError;
use crate::models::Budget;

use super::file_io::{read_json, write_json_atomic};

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    data: RwLock<Vec<Budget>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> Result<(), ExpenseError> {
        let budgets: Vec<Budget> = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {e}")))?;

        *data = budgets;
        Ok(())
    }

    /// Save the full budget collection to disk
    pub fn save(&self) -> Result<(), ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {e}")))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get the budget for a month and year
    pub fn get(&self, month: u32, year: i32) -> Result<Option<Budget>, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {e}")))?;

        Ok(data.iter().find(|b| b.matches(month, year)).cloned())
    }

    /// Get all budgets, sorted by year then month
    pub fn get_all(&self) -> Result<Vec<Budget>, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {e}")))?;

        let mut budgets = data.clone();
        budgets.sort_by(|a, b| (a.year, a.month).cmp(&(b.year, b.month)));
        Ok(budgets)
    }

    /// Insert a budget, or overwrite the amount of an existing `(month, year)`
    /// record in place
    pub fn upsert(&self, budget: Budget) -> Result<(), ExpenseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {e}")))?;

        match data.iter_mut().find(|b| b.matches(budget.month, budget.year)) {
            Some(existing) => existing.amount = budget.amount,
            None => data.push(budget),
        }

        Ok(())
    }

    /// Count budgets
    pub fn count(&self) -> Result<usize, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {e}")))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BudgetRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.json");
        let repo = BudgetRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(Budget::new(3, 2025, Money::from_cents(10000))).unwrap();

        let budget = repo.get(3, 2025).unwrap().unwrap();
        assert_eq!(budget.amount.cents(), 10000);
        assert!(repo.get(4, 2025).unwrap().is_none());
        assert!(repo.get(3, 2024).unwrap().is_none());
    }

    #[test]
    fn test_upsert_overwrites_existing_key() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(Budget::new(3, 2025, Money::from_cents(10000))).unwrap();
        repo.upsert(Budget::new(3, 2025, Money::from_cents(20000))).unwrap();

        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.get(3, 2025).unwrap().unwrap().amount.cents(), 20000);
    }

    #[test]
    fn test_get_all_sorted() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(Budget::new(7, 2025, Money::from_cents(100))).unwrap();
        repo.upsert(Budget::new(2, 2025, Money::from_cents(200))).unwrap();
        repo.upsert(Budget::new(12, 2024, Money::from_cents(300))).unwrap();

        let all = repo.get_all().unwrap();
        let keys: Vec<(i32, u32)> = all.iter().map(|b| (b.year, b.month)).collect();
        assert_eq!(keys, vec![(2024, 12), (2025, 2), (2025, 7)]);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(Budget::new(3, 2025, Money::from_cents(10000))).unwrap();
        repo.save().unwrap();

        let repo2 = BudgetRepository::new(temp_dir.path().join("budgets.json"));
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 1);
        assert_eq!(repo2.get(3, 2025).unwrap().unwrap().amount.cents(), 10000);
    }
}

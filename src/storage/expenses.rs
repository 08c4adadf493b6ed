//! Expense repository for JSON storage
//!
//! Manages loading and saving the expense collection to expenses.json and
//! owns the next-id counter. The counter is recomputed as max(id)+1 on load
//! and only ever moves forward, so ids are never reused after deletion.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ExpenseError;
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};

/// Repository for expense persistence and id assignment
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
    next_id: RwLock<u64>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
            next_id: RwLock::new(1),
        }
    }

    /// Load expenses from disk and recompute the next-id counter
    pub fn load(&self) -> Result<(), ExpenseError> {
        let expenses: Vec<Expense> = read_json(&self.path)?;

        let mut next_id = self
            .next_id
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {e}")))?;
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {e}")))?;

        *next_id = expenses.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        *data = expenses;

        Ok(())
    }

    /// Save the full expense collection to disk
    pub fn save(&self) -> Result<(), ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {e}")))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Take the next id, advancing the counter
    pub fn allocate_id(&self) -> Result<u64, ExpenseError> {
        let mut next_id = self
            .next_id
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {e}")))?;

        let id = *next_id;
        *next_id += 1;
        Ok(id)
    }

    /// Peek at the next id without advancing the counter
    pub fn next_id(&self) -> Result<u64, ExpenseError> {
        let next_id = self
            .next_id
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {e}")))?;

        Ok(*next_id)
    }

    /// Get an expense by id
    pub fn get(&self, id: u64) -> Result<Option<Expense>, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {e}")))?;

        Ok(data.iter().find(|e| e.id == id).cloned())
    }

    /// Get all expenses, ascending by date
    pub fn get_all(&self) -> Result<Vec<Expense>, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {e}")))?;

        let mut expenses = data.clone();
        expenses.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(expenses)
    }

    /// Insert or replace an expense
    ///
    /// Keeps the next-id invariant: the counter stays strictly greater than
    /// every id in the collection.
    pub fn upsert(&self, expense: Expense) -> Result<(), ExpenseError> {
        let mut next_id = self
            .next_id
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {e}")))?;
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {e}")))?;

        if expense.id >= *next_id {
            *next_id = expense.id + 1;
        }

        match data.iter_mut().find(|e| e.id == expense.id) {
            Some(existing) => *existing = expense,
            None => data.push(expense),
        }

        Ok(())
    }

    /// Delete an expense, returning whether it existed
    pub fn delete(&self, id: u64) -> Result<bool, ExpenseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {e}")))?;

        let before = data.len();
        data.retain(|e| e.id != id);
        Ok(data.len() < before)
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {e}")))?;

        Ok(data.len())
    }
}

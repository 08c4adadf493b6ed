//! Storage layer
//!
//! JSON file storage with atomic writes and automatic directory creation.
//! Both collections are loaded eagerly at startup and re-serialized in full
//! on every save.

pub mod budgets;
pub mod expenses;
pub mod file_io;

pub use budgets::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::config::DataPaths;
use crate::error::ExpenseError;

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    paths: DataPaths,
    pub expenses: ExpenseRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: DataPaths) -> Result<Self, ExpenseError> {
        // Ensure the data directory exists
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    /// Load both collections from disk
    ///
    /// A corrupt or unreadable file is not fatal: a warning is printed and
    /// the affected collection starts empty.
    pub fn load_all(&self) {
        if let Err(e) = self.expenses.load() {
            eprintln!("Warning: Could not load expenses: {e}");
        }
        if let Err(e) = self.budgets.load() {
            eprintln!("Warning: Could not load budgets: {e}");
        }
    }
}

//! Path management for the expense tracker
//!
//! All persisted state lives in a single data directory holding one JSON file
//! per collection. The directory defaults to `data/` relative to the working
//! directory and can be overridden with `--data-dir` or the
//! `EXPENSE_TRACKER_DATA_DIR` environment variable (resolved by the CLI).

use std::path::PathBuf;

use crate::error::ExpenseError;

/// Default data directory name, relative to the working directory
const DEFAULT_DATA_DIR: &str = "data";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct DataPaths {
    /// Directory holding the persisted collections and default export output
    data_dir: PathBuf,
}

impl DataPaths {
    /// Create a DataPaths instance pointing at the default `data/` directory
    pub fn new() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }

    /// Create DataPaths with a custom data directory (CLI override or tests)
    pub fn with_base_dir(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Get the data directory
    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir.join("expenses.json")
    }

    /// Get the path to budgets.json
    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir.join("budgets.json")
    }

    /// Get the default export path for a given timestamp stamp
    /// (e.g. `20250315_120000` -> `data/expenses_20250315_120000.csv`)
    pub fn export_file(&self, stamp: &str) -> PathBuf {
        self.data_dir.join(format!("expenses_{stamp}.csv"))
    }

    /// Ensure the data directory exists, creating it on demand
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.data_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create data directory: {e}")))?;
        Ok(())
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new()
    }
}

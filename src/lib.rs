//! Command-line expense tracker
//!
//! This library provides the persistence and aggregation engine behind the
//! `expense-tracker` binary: recording expense entries, aggregating them by
//! month and category, tracking monthly budgets, and exporting to CSV. State
//! lives in two JSON files inside a data directory, loaded eagerly at startup
//! and rewritten in full after every mutation.
//!
//! # Architecture
//!
//! - `config`: data directory path management
//! - `error`: custom error types
//! - `clock`: injectable time source
//! - `models`: core data models (expenses, budgets, money)
//! - `storage`: JSON file storage layer with atomic writes
//! - `services`: business logic layer (the aggregation & mutation engine)
//! - `export`: CSV rendering
//! - `display`: terminal formatting
//! - `cli`: command handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::config::DataPaths;
//! use expense_tracker::services::{CreateExpenseInput, ExpenseService};
//! use expense_tracker::storage::Storage;
//! use expense_tracker::models::Money;
//!
//! # fn main() -> expense_tracker::ExpenseResult<()> {
//! let storage = Storage::new(DataPaths::new())?;
//! storage.load_all();
//!
//! let service = ExpenseService::new(&storage);
//! service.add(CreateExpenseInput {
//!     description: "Coffee".into(),
//!     amount: Money::from_cents(450),
//!     category: Some("Food".into()),
//! })?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};

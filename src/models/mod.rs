//! Core data models

pub mod budget;
pub mod expense;
pub mod money;

pub use budget::Budget;
pub use expense::Expense;
pub use money::{Money, MoneyParseError};

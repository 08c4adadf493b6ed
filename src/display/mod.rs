//! Terminal display formatting

pub mod budget;
pub mod expense;

pub use budget::{format_budget_overview, format_budget_status};
pub use expense::format_expense_table;

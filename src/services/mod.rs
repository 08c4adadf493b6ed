//! Business logic layer
//!
//! The services own all mutation of the in-memory collections and trigger a
//! save after every successful mutating operation (write-through).

pub mod budget;
pub mod expense;

pub use budget::{BudgetService, BudgetStatus};
pub use expense::{CreateExpenseInput, ExpenseFilter, ExpensePatch, ExpenseService};

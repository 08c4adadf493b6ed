//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. This layer is
//! stricter than the engine in one place: `add` and `budget set` reject
//! non-positive amounts, while the engine itself accepts zero.

pub mod budget;
pub mod expense;
pub mod export;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{
    handle_add_command, handle_delete_command, handle_list_command, handle_summary_command,
    handle_update_command, AddArgs, DeleteArgs, ListArgs, SummaryArgs, UpdateArgs,
};
pub use export::{handle_export_command, ExportArgs};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;

/// Parse a user-supplied amount argument
pub(crate) fn parse_amount(raw: &str) -> ExpenseResult<Money> {
    Money::parse(raw).map_err(|e| {
        ExpenseError::Validation(format!(
            "Invalid amount: '{raw}'. Use a format like '4.50'. {e}"
        ))
    })
}

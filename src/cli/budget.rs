//! Budget CLI commands

use clap::Subcommand;

use crate::display::{format_budget_overview, format_budget_status};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::budget::month_name;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::parse_amount;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the spending ceiling for a month
    Set {
        /// Month (1-12)
        #[arg(long)]
        month: u32,

        /// Budget amount (e.g. "100.00")
        #[arg(long)]
        amount: String,

        /// Year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Show a month's budget and spending status
    View {
        /// Month (1-12)
        #[arg(long)]
        month: u32,

        /// Year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// List all stored budgets with their status
    List,
}

/// Handle a budget command
pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> ExpenseResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Set {
            month,
            amount,
            year,
        } => {
            let amount = parse_amount(&amount)?;

            // Stricter than the engine: a zero budget is rejected here
            if !amount.is_positive() {
                return Err(ExpenseError::Validation(
                    "--amount must be greater than 0".into(),
                ));
            }

            let budget = service.set(month, amount, year)?;
            println!(
                "Budget set for {} {}: {}",
                budget.month_name(),
                budget.year,
                budget.amount
            );
        }

        BudgetCommands::View { month, year } => {
            if !(1..=12).contains(&month) {
                return Err(ExpenseError::Validation(
                    "Month must be between 1 and 12".into(),
                ));
            }

            match service.status(month, year)? {
                Some(status) => print!("{}", format_budget_status(&status)),
                None => println!("No budget set for {}", month_name(month)),
            }
        }

        BudgetCommands::List => {
            let overview = service.overview()?;
            print!("{}", format_budget_overview(&overview));
        }
    }

    Ok(())
}

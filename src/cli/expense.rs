//! Expense CLI commands
//!
//! Implements the add, update, delete, list, and summary commands.

use clap::Args;

use crate::display::format_expense_table;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::budget::month_name;
use crate::services::{
    BudgetService, CreateExpenseInput, ExpenseFilter, ExpensePatch, ExpenseService,
};
use crate::storage::Storage;

use super::parse_amount;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// What the money was spent on
    #[arg(long)]
    pub description: String,

    /// Amount spent (e.g. "4.50")
    #[arg(long)]
    pub amount: String,

    /// Category (defaults to "General")
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for `update`
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Id of the expense to update
    #[arg(long)]
    pub id: u64,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New amount
    #[arg(long)]
    pub amount: Option<String>,

    /// New category
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for `delete`
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Id of the expense to delete
    #[arg(long)]
    pub id: u64,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by category (case-insensitive)
    #[arg(long)]
    pub category: Option<String>,

    /// Filter by month (1-12, current year)
    #[arg(long)]
    pub month: Option<u32>,
}

/// Arguments for `summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Restrict the total to a month (1-12, current year)
    #[arg(long)]
    pub month: Option<u32>,

    /// Restrict the total to a category (case-insensitive)
    #[arg(long)]
    pub category: Option<String>,
}

/// Handle the `add` command
pub fn handle_add_command(storage: &Storage, args: AddArgs) -> ExpenseResult<()> {
    let amount = parse_amount(&args.amount)?;

    // Stricter than the engine: zero-amount expenses are rejected here
    if !amount.is_positive() {
        return Err(ExpenseError::Validation(
            "--amount must be greater than 0".into(),
        ));
    }

    let service = ExpenseService::new(storage);
    let expense = service.add(CreateExpenseInput {
        description: args.description,
        amount,
        category: args.category,
    })?;

    println!("Expense added successfully (ID: {})", expense.id);
    Ok(())
}

/// Handle the `update` command
pub fn handle_update_command(storage: &Storage, args: UpdateArgs) -> ExpenseResult<()> {
    let mut patch = ExpensePatch::new();
    if let Some(description) = args.description {
        patch.description = Some(description);
    }
    if let Some(raw) = args.amount {
        patch.amount = Some(parse_amount(&raw)?);
    }
    if let Some(category) = args.category {
        patch.category = Some(category);
    }

    if patch.is_empty() {
        return Err(ExpenseError::Validation(
            "At least one of --description, --amount, or --category must be provided".into(),
        ));
    }

    let service = ExpenseService::new(storage);
    service.update(args.id, patch)?;

    println!("Expense updated successfully");
    Ok(())
}

/// Handle the `delete` command
pub fn handle_delete_command(storage: &Storage, args: DeleteArgs) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    service.delete(args.id)?;

    println!("Expense deleted successfully");
    Ok(())
}

/// Handle the `list` command
pub fn handle_list_command(storage: &Storage, args: ListArgs) -> ExpenseResult<()> {
    let mut filter = ExpenseFilter::new();
    filter.month = args.month;
    filter.category = args.category;

    let service = ExpenseService::new(storage);
    let expenses = service.list(filter)?;

    print!("{}", format_expense_table(&expenses));
    Ok(())
}

/// Handle the `summary` command
pub fn handle_summary_command(storage: &Storage, args: SummaryArgs) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);

    let mut filter = ExpenseFilter::new();
    filter.month = args.month;
    filter.category = args.category.clone();
    let total = service.total(filter)?;

    match (args.month, args.category) {
        (Some(month), Some(category)) => {
            println!(
                "Total expenses for {} (Category: {}): {}",
                month_name(month),
                category,
                total
            );
            print_budget_check(storage, month)?;
        }
        (Some(month), None) => {
            println!("Total expenses for {}: {}", month_name(month), total);
            print_budget_check(storage, month)?;
        }
        (None, Some(category)) => {
            println!("Total expenses for {category}: {total}");
        }
        (None, None) => {
            println!("Total expenses: {total}");
        }
    }

    Ok(())
}

/// Append the budget status line when a budget is set for the month
fn print_budget_check(storage: &Storage, month: u32) -> ExpenseResult<()> {
    let budget_service = BudgetService::new(storage);

    if let Some(status) = budget_service.status(month, None)? {
        if status.exceeded {
            println!("⚠️  Warning: Budget exceeded by {}!", status.delta);
        } else {
            println!("✓ Budget remaining: {}", status.delta);
        }
    }

    Ok(())
}

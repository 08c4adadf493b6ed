//! Budget display formatting

use crate::services::BudgetStatus;

/// Format a budget status for the `budget view` command
pub fn format_budget_status(status: &BudgetStatus) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {} Budget: {}\n",
        status.budget.month_name(),
        status.budget.year,
        status.budget.amount
    ));
    output.push_str(&format!("Total Expenses: {}\n", status.spent));

    if status.exceeded {
        output.push_str(&format!("Status: ⚠️  EXCEEDED by {}\n", status.delta));
    } else {
        output.push_str(&format!("Status: ✓ Remaining: {}\n", status.delta));
    }

    output
}

/// Format all stored budgets for the `budget list` command
pub fn format_budget_overview(statuses: &[BudgetStatus]) -> String {
    if statuses.is_empty() {
        return "No budgets set\n".to_string();
    }

    let mut output = String::new();
    for status in statuses {
        let marker = if status.exceeded { "⚠️  EXCEEDED" } else { "✓" };
        output.push_str(&format!(
            "{:<15} {:>10} (Spent: {}) {}\n",
            format!("{} {}", status.budget.month_name(), status.budget.year),
            status.budget.amount.to_string(),
            status.spent,
            marker
        ));
    }

    output
}

//! Expense display formatting

use crate::models::Expense;

/// Format a single expense as a table row
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{:<5} {:<10} {:<25} {:>10} {}",
        expense.id,
        expense.date.format("%Y-%m-%d"),
        truncate(&expense.description, 25),
        expense.amount.to_string(),
        expense.category
    )
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<5} {:<10} {:<25} {:>10} {}\n",
        "ID", "Date", "Description", "Amount", "Category"
    ));
    output.push_str(&"-".repeat(62));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum length, padding shorter ones
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{s:max_len$}")
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{cut}...")
    }
}

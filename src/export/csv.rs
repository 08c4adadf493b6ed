//! CSV export functionality
//!
//! Renders expenses to the fixed five-field layout:
//! `id,YYYY-MM-DD,"description",amount.FF,category`. The description is
//! always quoted (embedded quotes doubled); amounts carry exactly two
//! fractional digits.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Header row written before the expense rows
pub const CSV_HEADER: &str = "ID,Date,Description,Amount,Category";

/// Write expenses as CSV to the given writer
pub fn write_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    writeln!(writer, "{CSV_HEADER}").map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in expenses {
        writeln!(
            writer,
            "{},{},\"{}\",{},{}",
            expense.id,
            expense.date.format("%Y-%m-%d"),
            escape_quotes(&expense.description),
            expense.amount.format_plain(),
            expense.category
        )
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Double embedded quotes so the always-quoted description stays valid CSV
fn escape_quotes(s: &str) -> String {
    s.replace('"', "\"\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::{Local, TimeZone};

    fn expense(id: u64, description: &str, cents: i64, category: &str) -> Expense {
        let date = Local.with_ymd_and_hms(2025, 3, 15, 9, 0, 0).unwrap();
        Expense::new(id, date, description, Money::from_cents(cents), category)
    }

    #[test]
    fn test_header_only_for_empty_set() {
        let mut out = Vec::new();
        write_expenses_csv(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ID,Date,Description,Amount,Category\n");
    }

    #[test]
    fn test_row_layout() {
        let mut out = Vec::new();
        write_expenses_csv(&[expense(1, "Coffee", 450, "Food")], &mut out).unwrap();

        let csv = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "1,2025-03-15,\"Coffee\",4.50,Food");
    }

    #[test]
    fn test_two_decimal_amounts() {
        let mut out = Vec::new();
        write_expenses_csv(
            &[expense(1, "a", 1000, "General"), expense(2, "b", 5, "General")],
            &mut out,
        )
        .unwrap();

        let csv = String::from_utf8(out).unwrap();
        assert!(csv.contains(",10.00,"));
        assert!(csv.contains(",0.05,"));
    }

    #[test]
    fn test_description_quoting() {
        let mut out = Vec::new();
        write_expenses_csv(&[expense(1, "say \"cheese\", twice", 100, "Misc")], &mut out).unwrap();

        let csv = String::from_utf8(out).unwrap();
        assert!(csv.contains("\"say \"\"cheese\"\", twice\""));
    }
}

//! Expense service
//!
//! CRUD operations, filtered listing, aggregation, and CSV export for the
//! expense collection. Validation failures abort the operation before any
//! in-memory or on-disk state changes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::Datelike;

use crate::clock::{Clock, SystemClock};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::csv::write_expenses_csv;
use crate::models::{Expense, Money};
use crate::storage::Storage;

/// Category recorded when the caller does not supply one
pub const DEFAULT_CATEGORY: &str = "General";

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    clock: &'a dyn Clock,
}

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub description: String,
    pub amount: Money,
    pub category: Option<String>,
}

/// Partial update for an expense
///
/// A `None` field means "leave unchanged"; a present field must be valid
/// (non-empty text, non-negative amount) and overwrites the stored value.
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<String>,
}

impl ExpensePatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set a new amount
    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set a new category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Check if no field is present
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.amount.is_none() && self.category.is_none()
    }
}

/// Options for filtering expenses
///
/// A month without an explicit year implies the current year.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Calendar month (1-12)
    pub month: Option<u32>,
    /// Calendar year
    pub year: Option<i32>,
    /// Category, matched case-insensitively
    pub category: Option<String>,
}

impl ExpenseFilter {
    /// Create a new empty filter (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by month
    pub fn month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    /// Filter by year
    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Filter by category (case-insensitive)
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service using the system clock
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            clock: &SystemClock,
        }
    }

    /// Create an expense service with an injected clock (for tests)
    pub fn with_clock(storage: &'a Storage, clock: &'a dyn Clock) -> Self {
        Self { storage, clock }
    }

    /// Record a new expense
    ///
    /// Assigns the next id, stamps the current time, and defaults the
    /// category to "General" when omitted or blank. A zero amount is
    /// accepted here; the CLI layer is stricter and rejects it.
    pub fn add(&self, input: CreateExpenseInput) -> ExpenseResult<Expense> {
        let description = input.description.trim().to_string();
        if description.is_empty() {
            return Err(ExpenseError::Validation(
                "Description cannot be empty".into(),
            ));
        }
        if input.amount.is_negative() {
            return Err(ExpenseError::Validation("Amount cannot be negative".into()));
        }

        let category = input
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        let id = self.storage.expenses.allocate_id()?;
        let expense = Expense::new(id, self.clock.now(), description, input.amount, category);

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        Ok(expense)
    }

    /// Get an expense by id
    pub fn get(&self, id: u64) -> ExpenseResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// Apply a partial update to an expense
    pub fn update(&self, id: u64, patch: ExpensePatch) -> ExpenseResult<Expense> {
        let mut expense = self
            .storage
            .expenses
            .get(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id))?;

        // Validate the whole patch before touching the record
        let description = match patch.description {
            Some(d) => {
                let d = d.trim().to_string();
                if d.is_empty() {
                    return Err(ExpenseError::Validation(
                        "Description cannot be empty".into(),
                    ));
                }
                Some(d)
            }
            None => None,
        };

        if let Some(amount) = patch.amount {
            if amount.is_negative() {
                return Err(ExpenseError::Validation("Amount cannot be negative".into()));
            }
        }

        let category = match patch.category {
            Some(c) => {
                let c = c.trim().to_string();
                if c.is_empty() {
                    return Err(ExpenseError::Validation("Category cannot be empty".into()));
                }
                Some(c)
            }
            None => None,
        };

        if let Some(description) = description {
            expense.description = description;
        }
        if let Some(amount) = patch.amount {
            expense.amount = amount;
        }
        if let Some(category) = category {
            expense.category = category;
        }

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        Ok(expense)
    }

    /// Delete an expense, returning the removed record
    pub fn delete(&self, id: u64) -> ExpenseResult<Expense> {
        let expense = self
            .storage
            .expenses
            .get(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id))?;

        self.storage.expenses.delete(id)?;
        self.storage.expenses.save()?;

        Ok(expense)
    }

    /// List expenses matching the filter, ascending by date
    pub fn list(&self, filter: ExpenseFilter) -> ExpenseResult<Vec<Expense>> {
        let year = self.resolve_year(&filter);
        let category = filter.category.as_ref().map(|c| c.to_lowercase());

        let mut expenses = self.storage.expenses.get_all()?;
        expenses.retain(|e| {
            filter.month.map_or(true, |m| e.month() == m)
                && year.map_or(true, |y| e.year() == y)
                && category
                    .as_ref()
                    .map_or(true, |c| e.category.to_lowercase() == *c)
        });

        Ok(expenses)
    }

    /// Sum of amounts over the filtered set, zero when nothing matches
    pub fn total(&self, filter: ExpenseFilter) -> ExpenseResult<Money> {
        Ok(self.list(filter)?.iter().map(|e| e.amount).sum())
    }

    /// Distinct categories across all expenses, lexicographically sorted
    pub fn categories(&self) -> ExpenseResult<Vec<String>> {
        let expenses = self.storage.expenses.get_all()?;
        let categories: std::collections::BTreeSet<String> =
            expenses.into_iter().map(|e| e.category).collect();
        Ok(categories.into_iter().collect())
    }

    /// Export expenses to CSV, returning the resolved output path
    ///
    /// Filters by month/year when given, otherwise exports everything. When
    /// no path is supplied the file is written into the data directory under
    /// a timestamped name.
    pub fn export_csv(
        &self,
        path: Option<PathBuf>,
        month: Option<u32>,
        year: Option<i32>,
    ) -> ExpenseResult<PathBuf> {
        let mut filter = ExpenseFilter::new();
        filter.month = month;
        filter.year = year;
        let expenses = self.list(filter)?;

        let path = match path {
            Some(path) => path,
            None => {
                self.storage.paths().ensure_directories()?;
                let stamp = self.clock.now().format("%Y%m%d_%H%M%S").to_string();
                self.storage.paths().export_file(&stamp)
            }
        };

        let file = File::create(&path).map_err(|e| {
            ExpenseError::Export(format!("Failed to create {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        write_expenses_csv(&expenses, &mut writer)?;
        writer
            .flush()
            .map_err(|e| ExpenseError::Export(format!("Failed to write export: {e}")))?;

        Ok(path)
    }

    /// Resolve the effective year filter: an explicit year wins, a month
    /// without a year implies the clock's current year
    fn resolve_year(&self, filter: &ExpenseFilter) -> Option<i32> {
        match (filter.month, filter.year) {
            (Some(_), None) => Some(self.clock.now().year()),
            _ => filter.year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::DataPaths;
    use chrono::{Local, TimeZone};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = DataPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all();
        (temp_dir, storage)
    }

    fn clock_at(year: i32, month: u32, day: u32) -> FixedClock {
        FixedClock(Local.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap())
    }

    fn input(description: &str, cents: i64, category: Option<&str>) -> CreateExpenseInput {
        CreateExpenseInput {
            description: description.into(),
            amount: Money::from_cents(cents),
            category: category.map(Into::into),
        }
    }

    #[test]
    fn test_add_assigns_increasing_ids_from_one() {
        let (_temp_dir, storage) = create_test_storage();
        let clock = clock_at(2025, 3, 10);
        let service = ExpenseService::with_clock(&storage, &clock);

        let a = service.add(input("Coffee", 450, None)).unwrap();
        let b = service.add(input("Lunch", 1200, None)).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        service.delete(b.id).unwrap();
        let c = service.add(input("Dinner", 2500, None)).unwrap();

        // Ids are never reused after a delete
        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_add_defaults_and_stamps_date() {
        let (_temp_dir, storage) = create_test_storage();
        let clock = clock_at(2025, 3, 10);
        let service = ExpenseService::with_clock(&storage, &clock);

        let expense = service.add(input("Coffee", 450, None)).unwrap();
        assert_eq!(expense.category, "General");
        assert_eq!(expense.date, clock.0);

        let expense = service.add(input("Bus", 275, Some("  "))).unwrap();
        assert_eq!(expense.category, "General");
    }

    #[test]
    fn test_add_validation() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let err = service.add(input("", 1000, None)).unwrap_err();
        assert!(err.is_validation());
        let err = service.add(input("   ", 1000, None)).unwrap_err();
        assert!(err.is_validation());
        let err = service.add(input("coffee", -500, None)).unwrap_err();
        assert!(err.is_validation());

        // The engine accepts a zero amount (the CLI layer rejects it)
        assert!(service.add(input("freebie", 0, None)).is_ok());
        assert_eq!(storage.expenses.count().unwrap(), 1);
    }

    #[test]
    fn test_update_patch_semantics() {
        let (_temp_dir, storage) = create_test_storage();
        let clock = clock_at(2025, 3, 10);
        let service = ExpenseService::with_clock(&storage, &clock);

        let expense = service.add(input("Coffee", 450, Some("Food"))).unwrap();

        let updated = service
            .update(expense.id, ExpensePatch::new().amount(Money::from_cents(500)))
            .unwrap();
        assert_eq!(updated.amount.cents(), 500);
        assert_eq!(updated.description, "Coffee");
        assert_eq!(updated.category, "Food");
        assert_eq!(updated.date, expense.date);

        let updated = service
            .update(expense.id, ExpensePatch::new().description("Espresso").category("Drinks"))
            .unwrap();
        assert_eq!(updated.description, "Espresso");
        assert_eq!(updated.category, "Drinks");
        assert_eq!(updated.amount.cents(), 500);
    }

    #[test]
    fn test_update_missing_id_leaves_collection_unchanged() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        service.add(input("Coffee", 450, None)).unwrap();

        let err = service
            .update(99, ExpensePatch::new().description("nope"))
            .unwrap_err();
        assert!(err.is_not_found());

        let all = service.list(ExpenseFilter::new()).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].description, "Coffee");
    }

    #[test]
    fn test_update_rejects_invalid_fields_without_mutation() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        let expense = service.add(input("Coffee", 450, None)).unwrap();

        let err = service
            .update(expense.id, ExpensePatch::new().description("  "))
            .unwrap_err();
        assert!(err.is_validation());

        let err = service
            .update(
                expense.id,
                ExpensePatch::new()
                    .description("Espresso")
                    .amount(Money::from_cents(-1)),
            )
            .unwrap_err();
        assert!(err.is_validation());

        // Nothing changed, not even the valid description field
        let stored = service.get(expense.id).unwrap().unwrap();
        assert_eq!(stored.description, "Coffee");
        assert_eq!(stored.amount.cents(), 450);
    }

    #[test]
    fn test_delete_missing_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let err = service.delete(1).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list_filters_and_ordering() {
        let (_temp_dir, storage) = create_test_storage();

        let march = clock_at(2025, 3, 10);
        let service = ExpenseService::with_clock(&storage, &march);
        service.add(input("Lunch", 1200, Some("Food"))).unwrap();

        let april = clock_at(2025, 4, 2);
        let service = ExpenseService::with_clock(&storage, &april);
        service.add(input("Bus", 275, Some("Transport"))).unwrap();

        let march_last_year = clock_at(2024, 3, 20);
        let service = ExpenseService::with_clock(&storage, &march_last_year);
        service.add(input("Museum", 900, Some("fun"))).unwrap();

        // Month without year implies the clock's current year
        let now = clock_at(2025, 6, 1);
        let service = ExpenseService::with_clock(&storage, &now);

        let march_2025 = service.list(ExpenseFilter::new().month(3)).unwrap();
        assert_eq!(march_2025.len(), 1);
        assert_eq!(march_2025[0].description, "Lunch");

        let march_2024 = service.list(ExpenseFilter::new().month(3).year(2024)).unwrap();
        assert_eq!(march_2024.len(), 1);
        assert_eq!(march_2024[0].description, "Museum");

        // Category matching is case-insensitive
        let fun = service.list(ExpenseFilter::new().category("FUN")).unwrap();
        assert_eq!(fun.len(), 1);

        // Unfiltered list is ascending by date
        let all = service.list(ExpenseFilter::new()).unwrap();
        let descriptions: Vec<&str> = all.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Museum", "Lunch", "Bus"]);
    }

    #[test]
    fn test_total() {
        let (_temp_dir, storage) = create_test_storage();
        let clock = clock_at(2025, 3, 10);
        let service = ExpenseService::with_clock(&storage, &clock);

        assert_eq!(service.total(ExpenseFilter::new()).unwrap(), Money::zero());

        service.add(input("Coffee", 450, Some("Food"))).unwrap();
        service.add(input("Lunch", 1200, Some("food"))).unwrap();
        service.add(input("Bus", 275, Some("Transport"))).unwrap();

        assert_eq!(service.total(ExpenseFilter::new()).unwrap().cents(), 1925);
        assert_eq!(
            service
                .total(ExpenseFilter::new().category("Food"))
                .unwrap()
                .cents(),
            1650
        );
    }

    #[test]
    fn test_categories_sorted_distinct() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service.add(input("a", 100, Some("Transport"))).unwrap();
        service.add(input("b", 100, Some("Food"))).unwrap();
        service.add(input("c", 100, Some("Food"))).unwrap();
        service.add(input("d", 100, None)).unwrap();

        assert_eq!(
            service.categories().unwrap(),
            vec!["Food", "General", "Transport"]
        );
    }

    #[test]
    fn test_export_csv_default_path() {
        let (temp_dir, storage) = create_test_storage();
        let clock = clock_at(2025, 3, 15);
        let service = ExpenseService::with_clock(&storage, &clock);

        service.add(input("Coffee", 450, Some("Food"))).unwrap();
        service.add(input("Lunch", 1200, None)).unwrap();

        let path = service.export_csv(None, None, None).unwrap();
        assert!(path.starts_with(temp_dir.path()));
        assert!(path.file_name().unwrap().to_str().unwrap().starts_with("expenses_"));

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ID,Date,Description,Amount,Category");
        assert_eq!(lines[1], "1,2025-03-15,\"Coffee\",4.50,Food");
        assert_eq!(lines[2], "2,2025-03-15,\"Lunch\",12.00,General");
    }

    #[test]
    fn test_export_csv_month_filter_and_explicit_path() {
        let (temp_dir, storage) = create_test_storage();

        let march = clock_at(2025, 3, 10);
        ExpenseService::with_clock(&storage, &march)
            .add(input("Lunch", 1200, None))
            .unwrap();
        let april = clock_at(2025, 4, 2);
        let service = ExpenseService::with_clock(&storage, &april);
        service.add(input("Bus", 275, None)).unwrap();

        let out = temp_dir.path().join("march.csv");
        let path = service.export_csv(Some(out.clone()), Some(3), None).unwrap();
        assert_eq!(path, out);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Lunch"));
        assert!(!contents.contains("Bus"));
    }

    #[test]
    fn test_export_csv_unwritable_path_is_export_error() {
        let (temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let bad = temp_dir.path().join("no-such-dir").join("out.csv");
        let err = service.export_csv(Some(bad), None, None).unwrap_err();
        assert!(matches!(err, ExpenseError::Export(_)));
    }
}

//! Ledger engine
//!
//! Owns the record store and the durable key-value store behind it, and
//! exposes the mutation and query surface the CLI drives. Every mutation
//! updates memory first and then persists the full store synchronously; a
//! failed write surfaces as an error while the in-memory change stands, so
//! callers can warn that the change may not survive a restart.

use tracing::warn;

use crate::error::{LedgerError, LedgerResult};
use crate::export::{expenses_to_csv_string, ExportColumn};
use crate::models::ids::DISPLAY_PREFIX;
use crate::models::{ExpenseDraft, ExpenseId, ExpenseRecord, Theme};
use crate::query::ExpenseFilter;
use crate::reports::{CategoryBreakdown, MonthlyTrend};
use crate::storage::{ExpenseStore, KeyValueStore, EXPENSES_KEY, THEME_KEY};

/// Filtered records plus the two aggregates computed over them
#[derive(Debug, Clone)]
pub struct QueryResult {
    /// The filtered view, in store order
    pub records: Vec<ExpenseRecord>,
    /// Category totals over the view
    pub by_category: CategoryBreakdown,
    /// Monthly totals over the view, ascending
    pub by_month: MonthlyTrend,
}

/// Result of a CSV import run
#[derive(Debug, Clone, Default)]
pub struct ImportOutcome {
    /// Number of records added
    pub imported: usize,
    /// Per-row failures as (line number, message); line 1 is the header
    pub errors: Vec<(usize, String)>,
}

impl ImportOutcome {
    /// Whether every row imported cleanly
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// The expense ledger engine
pub struct LedgerService<S: KeyValueStore> {
    kv: S,
    store: ExpenseStore,
}

impl<S: KeyValueStore> LedgerService<S> {
    /// Open a ledger over the given durable store
    ///
    /// Missing, unreadable, or malformed persisted data degrades to an empty
    /// store with a logged warning. First run and corruption look the same
    /// from here; neither fails startup.
    pub fn open(kv: S) -> Self {
        let store = match kv.get(EXPENSES_KEY) {
            Ok(Some(bytes)) => match ExpenseStore::from_bytes(&bytes) {
                Ok(store) => store,
                Err(err) => {
                    warn!("stored expenses are unreadable, starting empty: {}", err);
                    ExpenseStore::new()
                }
            },
            Ok(None) => ExpenseStore::new(),
            Err(err) => {
                warn!("could not read stored expenses, starting empty: {}", err);
                ExpenseStore::new()
            }
        };

        Self { kv, store }
    }

    /// Validate and add a new expense, then persist
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> LedgerResult<ExpenseRecord> {
        let record = self.store.create(draft)?;
        self.persist()?;
        Ok(record)
    }

    /// Replace the non-id fields of an existing expense, then persist
    pub fn edit_expense(
        &mut self,
        id: ExpenseId,
        draft: ExpenseDraft,
    ) -> LedgerResult<ExpenseRecord> {
        let record = self.store.update(id, draft)?;
        self.persist()?;
        Ok(record)
    }

    /// Remove an expense if present, reporting whether one was removed
    ///
    /// Removing an absent id is a no-op and does not touch the durable store.
    pub fn remove_expense(&mut self, id: ExpenseId) -> LedgerResult<bool> {
        let removed = self.store.delete(id);
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Run a filtered query and compute both aggregates over the view
    pub fn query(&self, filter: &ExpenseFilter) -> QueryResult {
        let records = filter.apply(self.store.all());
        let by_category = CategoryBreakdown::compute(&records);
        let by_month = MonthlyTrend::compute(&records);

        QueryResult {
            records,
            by_category,
            by_month,
        }
    }

    /// Serialize the filtered view as CSV text
    pub fn export_view(
        &self,
        filter: &ExpenseFilter,
        columns: &[ExportColumn],
    ) -> LedgerResult<String> {
        let records = filter.apply(self.store.all());
        expenses_to_csv_string(&records, columns)
    }

    /// Add a batch of parsed drafts, collecting per-row validation failures
    ///
    /// Rows arrive as parse results so upstream CSV errors land in the same
    /// outcome. A persistence failure aborts the run; a bad row does not.
    pub fn import_expenses(
        &mut self,
        rows: Vec<Result<ExpenseDraft, String>>,
    ) -> LedgerResult<ImportOutcome> {
        let mut outcome = ImportOutcome::default();

        for (index, row) in rows.into_iter().enumerate() {
            // Line 1 of the file is the header
            let line = index + 2;
            match row {
                Ok(draft) => match self.add_expense(draft) {
                    Ok(_) => outcome.imported += 1,
                    Err(err) if err.is_validation() => outcome.errors.push((line, err.to_string())),
                    Err(err) => return Err(err),
                },
                Err(message) => outcome.errors.push((line, message)),
            }
        }

        Ok(outcome)
    }

    /// All records in store order
    pub fn records(&self) -> &[ExpenseRecord] {
        self.store.all()
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Get an expense by id
    pub fn get_expense(&self, id: ExpenseId) -> Option<&ExpenseRecord> {
        self.store.get(id)
    }

    /// Resolve an expense from a full id or a unique id prefix
    ///
    /// Accepts the full UUID (with or without the display prefix) or enough
    /// leading hex characters to be unambiguous, as shown in listings.
    pub fn find_expense(&self, identifier: &str) -> LedgerResult<ExpenseRecord> {
        if let Ok(id) = identifier.parse::<ExpenseId>() {
            return self
                .store
                .get(id)
                .cloned()
                .ok_or_else(|| LedgerError::expense_not_found(identifier));
        }

        let needle = identifier
            .strip_prefix(DISPLAY_PREFIX)
            .unwrap_or(identifier)
            .to_lowercase();

        if needle.is_empty() {
            return Err(LedgerError::expense_not_found(identifier));
        }

        let matches: Vec<&ExpenseRecord> = self
            .store
            .all()
            .iter()
            .filter(|r| r.id.as_uuid().to_string().starts_with(&needle))
            .collect();

        match matches.as_slice() {
            [record] => Ok((*record).clone()),
            [] => Err(LedgerError::expense_not_found(identifier)),
            _ => Err(LedgerError::Validation(format!(
                "Identifier '{}' matches {} expenses; use more characters",
                identifier,
                matches.len()
            ))),
        }
    }

    /// Read the persisted theme preference, if any
    ///
    /// Unreadable or unrecognized stored values degrade to None with a
    /// logged warning.
    pub fn theme(&self) -> Option<Theme> {
        match self.kv.get(THEME_KEY) {
            Ok(Some(bytes)) => match std::str::from_utf8(&bytes) {
                Ok(s) => {
                    let theme = Theme::parse(s);
                    if theme.is_none() {
                        warn!("stored theme '{}' is unrecognized, ignoring", s.trim());
                    }
                    theme
                }
                Err(_) => {
                    warn!("stored theme is not valid UTF-8, ignoring");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!("could not read stored theme: {}", err);
                None
            }
        }
    }

    /// Persist the theme preference
    pub fn set_theme(&mut self, theme: Theme) -> LedgerResult<()> {
        self.kv.put(THEME_KEY, theme.as_str().as_bytes())
    }

    fn persist(&mut self) -> LedgerResult<()> {
        let bytes = self.store.to_bytes()?;
        self.kv.put(EXPENSES_KEY, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::{FileStore, MemoryStore};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    /// Store whose writes fail on demand, for persistence-failure tests
    struct FailingStore {
        inner: MemoryStore,
        fail_puts: bool,
    }

    impl FailingStore {
        fn new() -> Self {
            Self {
                inner: MemoryStore::new(),
                fail_puts: true,
            }
        }
    }

    impl KeyValueStore for FailingStore {
        fn get(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
            self.inner.get(key)
        }

        fn put(&mut self, key: &str, value: &[u8]) -> LedgerResult<()> {
            if self.fail_puts {
                return Err(LedgerError::Persistence("simulated write failure".into()));
            }
            self.inner.put(key, value)
        }
    }

    fn draft(amount_cents: i64, category: &str, date: &str) -> ExpenseDraft {
        ExpenseDraft::new(
            Money::from_cents(amount_cents),
            category,
            date.parse::<NaiveDate>().unwrap(),
        )
    }

    fn open_memory_ledger() -> LedgerService<MemoryStore> {
        LedgerService::open(MemoryStore::new())
    }

    #[test]
    fn test_open_empty() {
        let ledger = open_memory_ledger();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_open_degrades_on_corrupt_data() {
        let mut kv = MemoryStore::new();
        kv.put(EXPENSES_KEY, b"definitely not json").unwrap();

        let ledger = LedgerService::open(kv);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_and_query() {
        let mut ledger = open_memory_ledger();
        ledger.add_expense(draft(1250, "Food", "2024-01-10")).unwrap();
        ledger.add_expense(draft(500, "Transport", "2024-01-20")).unwrap();

        let result = ledger.query(&ExpenseFilter::new());
        assert_eq!(result.records.len(), 2);
        assert_eq!(
            result.by_category.get("Food"),
            Some(Money::from_cents(1250))
        );
        assert_eq!(result.by_month.get("2024-01"), Some(Money::from_cents(1750)));
    }

    #[test]
    fn test_add_rejects_invalid_draft() {
        let mut ledger = open_memory_ledger();
        let err = ledger.add_expense(draft(0, "Food", "2024-01-10")).unwrap_err();
        assert!(err.is_validation());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_mutations_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();

        let mut ledger = LedgerService::open(FileStore::new(temp_dir.path()));
        let kept = ledger.add_expense(draft(1250, "Food", "2024-01-10")).unwrap();
        let removed = ledger.add_expense(draft(500, "Transport", "2024-01-20")).unwrap();
        ledger
            .edit_expense(kept.id, draft(1500, "Food", "2024-01-11"))
            .unwrap();
        ledger.remove_expense(removed.id).unwrap();
        drop(ledger);

        let reopened = LedgerService::open(FileStore::new(temp_dir.path()));
        assert_eq!(reopened.len(), 1);
        let record = reopened.get_expense(kept.id).unwrap();
        assert_eq!(record.amount, Money::from_cents(1500));
        assert_eq!(record.date_string(), "2024-01-11");
    }

    #[test]
    fn test_edit_missing_expense() {
        let mut ledger = open_memory_ledger();
        let err = ledger
            .edit_expense(ExpenseId::new(), draft(100, "Food", "2024-01-10"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut ledger = open_memory_ledger();
        let record = ledger.add_expense(draft(100, "Food", "2024-01-10")).unwrap();

        assert!(ledger.remove_expense(record.id).unwrap());
        assert!(!ledger.remove_expense(record.id).unwrap());
    }

    #[test]
    fn test_failed_persist_surfaces_but_keeps_memory() {
        let mut ledger = LedgerService::open(FailingStore::new());

        let err = ledger.add_expense(draft(1250, "Food", "2024-01-10")).unwrap_err();
        assert!(err.is_persistence());

        // The in-memory store is still updated (optimistic)
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.records()[0].category, "Food");
    }

    #[test]
    fn test_remove_absent_id_does_not_write() {
        // With every put failing, a no-op remove must still succeed
        let mut ledger = LedgerService::open(FailingStore::new());
        assert!(!ledger.remove_expense(ExpenseId::new()).unwrap());
    }

    #[test]
    fn test_query_empty_store() {
        let ledger = open_memory_ledger();
        let result = ledger.query(&ExpenseFilter::new());

        assert!(result.records.is_empty());
        assert!(result.by_category.is_empty());
        assert!(result.by_month.is_empty());
    }

    #[test]
    fn test_month_filter_excludes_other_months() {
        let mut ledger = open_memory_ledger();
        ledger.add_expense(draft(1000, "Food", "2024-01-10")).unwrap();
        ledger.add_expense(draft(2000, "Food", "2024-01-25")).unwrap();
        ledger.add_expense(draft(9000, "Rent", "2024-02-01")).unwrap();

        let result = ledger.query(&ExpenseFilter::new().month("2024-01"));
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.by_category.get("Food"), Some(Money::from_cents(3000)));
        assert_eq!(result.by_category.get("Rent"), None);
        assert_eq!(result.by_month.len(), 1);
    }

    #[test]
    fn test_export_view() {
        let mut ledger = open_memory_ledger();
        ledger.add_expense(draft(1250, "Food", "2024-01-10")).unwrap();
        ledger.add_expense(draft(500, "Transport", "2024-02-05")).unwrap();

        let csv = ledger
            .export_view(
                &ExpenseFilter::new().month("2024-01"),
                &crate::export::compact_columns(),
            )
            .unwrap();

        assert_eq!(csv.lines().count(), 2);
        assert!(csv.contains("12.50,Food,2024-01-10,"));
        assert!(!csv.contains("Transport"));
    }

    #[test]
    fn test_find_expense_by_prefix() {
        let mut ledger = open_memory_ledger();
        let record = ledger.add_expense(draft(100, "Food", "2024-01-10")).unwrap();

        // Display form: "exp-" followed by the first 8 hex chars
        let display = record.id.to_string();
        let found = ledger.find_expense(&display).unwrap();
        assert_eq!(found.id, record.id);

        // Bare full UUID works too
        let full = record.id.as_uuid().to_string();
        assert_eq!(ledger.find_expense(&full).unwrap().id, record.id);
    }

    #[test]
    fn test_find_expense_unknown() {
        let ledger = open_memory_ledger();
        let err = ledger.find_expense("exp-deadbeef").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_theme_round_trip() {
        let mut ledger = open_memory_ledger();
        assert_eq!(ledger.theme(), None);

        ledger.set_theme(Theme::Dark).unwrap();
        assert_eq!(ledger.theme(), Some(Theme::Dark));

        ledger.set_theme(Theme::Light).unwrap();
        assert_eq!(ledger.theme(), Some(Theme::Light));
    }

    #[test]
    fn test_theme_ignores_garbage() {
        let mut kv = MemoryStore::new();
        kv.put(THEME_KEY, b"mauve").unwrap();

        let ledger = LedgerService::open(kv);
        assert_eq!(ledger.theme(), None);
    }

    #[test]
    fn test_import_collects_row_errors() {
        let mut ledger = open_memory_ledger();

        let rows = vec![
            Ok(draft(1250, "Food", "2024-01-10")),
            Err("Could not parse amount 'abc'".to_string()),
            Ok(draft(0, "Transport", "2024-01-11")),
            Ok(draft(500, "Transport", "2024-01-12")),
        ];

        let outcome = ledger.import_expenses(rows).unwrap();
        assert_eq!(outcome.imported, 2);
        assert_eq!(outcome.errors.len(), 2);
        assert_eq!(outcome.errors[0].0, 3);
        assert_eq!(outcome.errors[1].0, 4);
        assert_eq!(ledger.len(), 2);
    }
}

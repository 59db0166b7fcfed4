//! CSV import for expense records
//!
//! Reads files whose header row names the expense columns, in any order and
//! casing. Amount, Category, and Date are required; Note and Payment Method
//! are optional. Rows parse independently, so one bad row does not abort the
//! run; failures stay in place as messages for the caller to report.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{ExpenseDraft, Money};

/// Column indices resolved from a CSV header row
#[derive(Debug, Clone)]
struct HeaderMapping {
    amount: usize,
    category: usize,
    date: usize,
    note: Option<usize>,
    payment_method: Option<usize>,
}

impl HeaderMapping {
    /// Detect the mapping from a header record
    fn from_headers(headers: &StringRecord) -> LedgerResult<Self> {
        let mut amount = None;
        let mut category = None;
        let mut date = None;
        let mut note = None;
        let mut payment_method = None;

        for (idx, header) in headers.iter().enumerate() {
            let h = header.to_lowercase();
            let h = h.trim();

            if h.contains("amount") && amount.is_none() {
                amount = Some(idx);
            } else if h.contains("category") && category.is_none() {
                category = Some(idx);
            } else if h.contains("date") && date.is_none() {
                date = Some(idx);
            } else if (h.contains("payment") || h.contains("method")) && payment_method.is_none() {
                payment_method = Some(idx);
            } else if (h.contains("note") || h.contains("memo") || h.contains("description"))
                && note.is_none()
            {
                note = Some(idx);
            }
        }

        let missing =
            |name: &str| LedgerError::Import(format!("CSV is missing a '{}' column", name));

        Ok(Self {
            amount: amount.ok_or_else(|| missing("Amount"))?,
            category: category.ok_or_else(|| missing("Category"))?,
            date: date.ok_or_else(|| missing("Date"))?,
            note,
            payment_method,
        })
    }
}

/// Read expense drafts from a CSV file
pub fn read_expense_rows(path: &Path) -> LedgerResult<Vec<Result<ExpenseDraft, String>>> {
    let file = File::open(path)
        .map_err(|e| LedgerError::Import(format!("Failed to open {}: {}", path.display(), e)))?;
    read_rows_from_reader(file)
}

/// Read expense drafts from any CSV source
///
/// Returns one entry per data row, in file order.
pub fn read_rows_from_reader<R: std::io::Read>(
    reader: R,
) -> LedgerResult<Vec<Result<ExpenseDraft, String>>> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| LedgerError::Import(format!("Failed to read CSV header: {}", e)))?
        .clone();
    let mapping = HeaderMapping::from_headers(&headers)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                rows.push(Err(format!("Error reading CSV record: {}", e)));
                continue;
            }
        };
        rows.push(parse_row(&record, &mapping));
    }

    Ok(rows)
}

/// Parse a single CSV record into a draft
fn parse_row(record: &StringRecord, mapping: &HeaderMapping) -> Result<ExpenseDraft, String> {
    let amount_str = record
        .get(mapping.amount)
        .ok_or_else(|| "Missing amount field".to_string())?
        .trim();
    let amount =
        Money::parse(amount_str).map_err(|_| format!("Could not parse amount: '{}'", amount_str))?;

    let category = record
        .get(mapping.category)
        .ok_or_else(|| "Missing category field".to_string())?
        .trim()
        .to_string();

    let date_str = record
        .get(mapping.date)
        .ok_or_else(|| "Missing date field".to_string())?
        .trim();
    let date = parse_date(date_str)?;

    let note = mapping
        .note
        .and_then(|col| record.get(col))
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let payment_method = mapping
        .payment_method
        .and_then(|col| record.get(col))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let mut draft = ExpenseDraft::new(amount, category, date).with_note(note);
    if let Some(method) = payment_method {
        draft = draft.with_payment_method(method);
    }

    Ok(draft)
}

/// Parse a date string using multiple format attempts
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let formats = ["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y", "%Y/%m/%d"];

    for format in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(date);
        }
    }

    Err(format!("Could not parse date: '{}'", s))
}

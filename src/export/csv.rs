//! CSV export
//!
//! Serializes a filtered view to delimited text. The column set is data, not
//! code: the standard five-column schema and the compact four-column schema
//! (no payment method) go through the same emitter. Fields containing the
//! delimiter, quotes, or line breaks are quoted with doubled inner quotes.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::ExpenseRecord;

/// One exportable column of an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportColumn {
    Amount,
    Category,
    Date,
    Note,
    PaymentMethod,
}

impl ExportColumn {
    /// Header label for this column
    pub fn header(&self) -> &'static str {
        match self {
            Self::Amount => "Amount",
            Self::Category => "Category",
            Self::Date => "Date",
            Self::Note => "Note",
            Self::PaymentMethod => "Payment Method",
        }
    }

    /// The record's value for this column, unescaped
    pub fn value(&self, record: &ExpenseRecord) -> String {
        match self {
            Self::Amount => record.amount.to_decimal_string(),
            Self::Category => record.category.clone(),
            Self::Date => record.date_string(),
            Self::Note => record.note.clone(),
            Self::PaymentMethod => record.payment_method.clone().unwrap_or_default(),
        }
    }
}

/// The five-column schema: amount, category, date, note, payment method
pub fn standard_columns() -> Vec<ExportColumn> {
    vec![
        ExportColumn::Amount,
        ExportColumn::Category,
        ExportColumn::Date,
        ExportColumn::Note,
        ExportColumn::PaymentMethod,
    ]
}

/// The four-column schema used when payment methods are not tracked
pub fn compact_columns() -> Vec<ExportColumn> {
    vec![
        ExportColumn::Amount,
        ExportColumn::Category,
        ExportColumn::Date,
        ExportColumn::Note,
    ]
}

/// Write records as CSV: one header line, one line per record
pub fn write_expenses_csv<W: Write>(
    records: &[ExpenseRecord],
    columns: &[ExportColumn],
    writer: &mut W,
) -> LedgerResult<()> {
    let header: Vec<&str> = columns.iter().map(|c| c.header()).collect();
    writeln!(writer, "{}", header.join(","))
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|c| escape_csv(&c.value(record)))
            .collect();
        writeln!(writer, "{}", row.join(","))
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Convenience wrapper producing the CSV as a String
pub fn expenses_to_csv_string(
    records: &[ExpenseRecord],
    columns: &[ExportColumn],
) -> LedgerResult<String> {
    let mut buffer = Vec::new();
    write_expenses_csv(records, columns, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| LedgerError::Export(e.to_string()))
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, Money};
    use chrono::NaiveDate;

    fn record(
        amount_cents: i64,
        category: &str,
        date: &str,
        note: &str,
        payment_method: Option<&str>,
    ) -> ExpenseRecord {
        let mut draft = ExpenseDraft::new(
            Money::from_cents(amount_cents),
            category,
            date.parse::<NaiveDate>().unwrap(),
        )
        .with_note(note);
        if let Some(method) = payment_method {
            draft = draft.with_payment_method(method);
        }
        ExpenseRecord::from_draft(draft).unwrap()
    }

    #[test]
    fn test_standard_header() {
        let csv = expenses_to_csv_string(&[], &standard_columns()).unwrap();
        assert_eq!(csv, "Amount,Category,Date,Note,Payment Method\n");
    }

    #[test]
    fn test_compact_header() {
        let csv = expenses_to_csv_string(&[], &compact_columns()).unwrap();
        assert_eq!(csv, "Amount,Category,Date,Note\n");
    }

    #[test]
    fn test_row_values() {
        let records = vec![record(1250, "Food", "2024-01-10", "lunch", Some("card"))];
        let csv = expenses_to_csv_string(&records, &standard_columns()).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "12.50,Food,2024-01-10,lunch,card");
    }

    #[test]
    fn test_missing_payment_method_is_empty_field() {
        let records = vec![record(500, "Transport", "2024-01-20", "", None)];
        let csv = expenses_to_csv_string(&records, &standard_columns()).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[1], "5.00,Transport,2024-01-20,,");
    }

    #[test]
    fn test_comma_in_note_is_quoted() {
        let records = vec![record(
            1250,
            "Food",
            "2024-01-10",
            "lunch, with colleagues",
            Some("card"),
        )];
        let csv = expenses_to_csv_string(&records, &standard_columns()).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[1],
            "12.50,Food,2024-01-10,\"lunch, with colleagues\",card"
        );
    }

    #[test]
    fn test_quotes_are_doubled() {
        let records = vec![record(
            1250,
            "Food",
            "2024-01-10",
            "the \"good\" place",
            None,
        )];
        let csv = expenses_to_csv_string(&records, &standard_columns()).unwrap();

        assert!(csv.contains("\"the \"\"good\"\" place\""));
    }

    #[test]
    fn test_newline_in_note_is_quoted() {
        let records = vec![record(1250, "Food", "2024-01-10", "line1\nline2", None)];
        let csv = expenses_to_csv_string(&records, &standard_columns()).unwrap();

        assert!(csv.contains("\"line1\nline2\""));
    }

    #[test]
    fn test_compact_rows_omit_payment_method() {
        let records = vec![record(1250, "Food", "2024-01-10", "lunch", Some("card"))];
        let csv = expenses_to_csv_string(&records, &compact_columns()).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[1], "12.50,Food,2024-01-10,lunch");
        assert!(!csv.contains("card"));
    }

    #[test]
    fn test_one_line_per_record() {
        let records = vec![
            record(100, "A", "2024-01-01", "", None),
            record(200, "B", "2024-01-02", "", None),
            record(300, "C", "2024-01-03", "", None),
        ];
        let csv = expenses_to_csv_string(&records, &compact_columns()).unwrap();
        assert_eq!(csv.lines().count(), 4);
    }
}

//! Export module for Outlay
//!
//! CSV serialization of a filtered view, spreadsheet-compatible.

pub mod csv;

pub use csv::{
    compact_columns, expenses_to_csv_string, standard_columns, write_expenses_csv, ExportColumn,
};

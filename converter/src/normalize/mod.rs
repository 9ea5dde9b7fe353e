//! Row to record normalization.
//!
//! Zips the header with each data row. Missing cells become `""`, cells past
//! the header width are ignored, and records whose values are all empty are
//! dropped. Duplicate header names keep the first key position and the last
//! column's value; the emptiness check runs on the finished record.

use serde_json::Value;

use crate::models::{Record, ResultSet, Row};

/// Build one record from a data row.
pub fn row_to_record(header: &[String], row: &[String]) -> Record {
    let mut record = Record::new();
    for (i, key) in header.iter().enumerate() {
        let value = row.get(i).map(String::as_str).unwrap_or("");
        record.insert(key.clone(), Value::String(value.to_string()));
    }
    record
}

/// True if any value of the record is a non-empty string.
pub fn has_content(record: &Record) -> bool {
    record
        .values()
        .any(|v| v.as_str().is_some_and(|s| !s.is_empty()))
}

/// Convert data rows into records keyed by `header`.
///
/// Order is preserved; blank rows leave no placeholder.
pub fn normalize_rows(header: &[String], rows: &[Row]) -> ResultSet {
    rows.iter()
        .map(|row| row_to_record(header, row))
        .filter(has_content)
        .collect()
}

//! Data model shared by the conversion stages.
//!
//! - [`Row`] - One spreadsheet row as display strings
//! - [`Sheet`] - A named grid of rows, row 0 being the header
//! - [`Record`] - One data row keyed by header names
//! - [`ResultSet`] - The ordered records produced by a conversion

use serde_json::{Map, Value};

/// One row of cells, empty cells as `""`.
pub type Row = Vec<String>;

/// A data row keyed by header name, in header order.
pub type Record = Map<String, Value>;

/// Records in source row order, blank rows removed.
pub type ResultSet = Vec<Record>;

// =============================================================================
// Sheet
// =============================================================================

/// A single sheet read from a workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// Sheet name (file stem for delimited text).
    pub name: String,
    /// All rows, header first.
    pub rows: Vec<Row>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// True when the sheet has no rows, not even a header.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Split into the header row and the data rows.
    ///
    /// Returns `None` for an empty sheet.
    pub fn split_header(&self) -> Option<(&Row, &[Row])> {
        self.rows.split_first()
    }
}

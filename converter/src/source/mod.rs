//! Tabular source adapter.
//!
//! Turns a file on disk into a [`Sheet`]: a rectangular-ish array of rows of
//! display strings, empty cells as `""`. Workbooks go through calamine,
//! delimited text through the `csv` crate.

pub mod delimited;
pub mod workbook;

use std::path::Path;

use crate::error::{SourceError, SourceResult};
use crate::models::Sheet;

pub use delimited::{decode_content, detect_delimiter, detect_encoding, read_delimited};
pub use workbook::{cell_to_string, read_first_sheet};

/// Extensions read as delimited text rather than as a workbook.
const DELIMITED_EXTENSIONS: &[&str] = &["csv", "tsv", "txt"];

/// Extensions listed by the CLI when run without arguments.
const LISTED_EXTENSIONS: &[&str] = &["xlsx", "xls"];

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.iter().any(|x| e.eq_ignore_ascii_case(x)))
}

/// Read the first sheet of the spreadsheet at `path`.
///
/// Fails with [`SourceError::NotFound`] before any parsing when the path does
/// not exist.
pub fn read_sheet(path: &Path) -> SourceResult<Sheet> {
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }

    if has_extension(path, DELIMITED_EXTENSIONS) {
        read_delimited(path)
    } else {
        read_first_sheet(path)
    }
}

/// Names of `.xlsx`/`.xls` files in `dir`, sorted.
pub fn find_spreadsheets(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names: Vec<String> = std::fs::read_dir(dir)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_extension(path, LISTED_EXTENSIONS))
        .filter_map(|path| path.file_name().and_then(|n| n.to_str()).map(String::from))
        .collect();

    names.sort();
    Ok(names)
}

//! Workbook reader backed by calamine (xlsx, xlsm, xlsb, xls, ods).

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::{SourceError, SourceResult};
use crate::models::{Row, Sheet};

/// Render a cell as the text a spreadsheet would display.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_float(*f),
        Data::Bool(true) => "TRUE".to_string(),
        Data::Bool(false) => "FALSE".to_string(),
        Data::DateTime(dt) if dt.is_duration() => format_duration(dt.as_f64()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(dt) if dt.time() == chrono::NaiveTime::MIN => dt.format("%Y-%m-%d").to_string(),
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => format_float(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}

/// Excel's General display: 15 significant digits, no trailing zeros.
fn format_float(f: f64) -> String {
    let rounded: f64 = format!("{:.14e}", f).parse().unwrap_or(f);
    if rounded.fract() == 0.0 && rounded.abs() < 1e15 {
        format!("{}", rounded as i64)
    } else {
        rounded.to_string()
    }
}

/// Elapsed time in days as `[h]:mm:ss`.
fn format_duration(days: f64) -> String {
    let total = (days * 86_400.0).round() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let secs = total.abs();
    format!("{}{}:{:02}:{:02}", sign, secs / 3600, secs / 60 % 60, secs % 60)
}

/// Read the first sheet of a workbook.
pub fn read_first_sheet(path: &Path) -> SourceResult<Sheet> {
    let mut workbook = open_workbook_auto(path)?;

    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(SourceError::NoSheets)?;

    let range = workbook.worksheet_range(&name)?;

    let rows: Vec<Row> = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    Ok(Sheet::new(name, rows))
}

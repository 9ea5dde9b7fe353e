//! JSON output for a result set.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SinkError, SinkResult};
use crate::models::ResultSet;

/// Extension used for derived output paths.
pub const OUTPUT_EXTENSION: &str = "json";

/// Output path next to the source, with the extension swapped for `.json`.
pub fn default_output_path(source: &Path) -> PathBuf {
    source.with_extension(OUTPUT_EXTENSION)
}

/// Pretty-print records as a JSON array with 2-space indentation.
pub fn to_json(records: &ResultSet) -> SinkResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Serialize `records` and write them to `path` as UTF-8.
pub fn write_records(records: &ResultSet, path: &Path) -> SinkResult<()> {
    let json = to_json(records)?;
    fs::write(path, json).map_err(|source| SinkError::Write {
        path: path.to_path_buf(),
        source,
    })
}

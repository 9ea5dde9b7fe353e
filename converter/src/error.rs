//! Error types for the xlsx2json conversion pipeline.
//!
//! - [`SourceError`] - Reading the spreadsheet (missing file, empty sheet, parse failures)
//! - [`TranslationError`] - Header translation failures (always recovered)
//! - [`SinkError`] - Serializing and writing the JSON output
//! - [`ConvertError`] - Top-level errors returned by [`crate::pipeline::convert`]
//!
//! Conversion is automatic via `From` implementations, so `?` works across
//! error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Source Errors
// =============================================================================

/// Errors while loading the source spreadsheet.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source path does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The first sheet has no rows at all, not even a header.
    #[error("Spreadsheet is empty or has no data")]
    EmptySheet,

    /// The workbook contains no sheets.
    #[error("Workbook contains no sheets")]
    NoSheets,

    /// Failed to read the file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The workbook could not be opened or a sheet could not be read.
    #[error("Failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    /// Malformed delimited text.
    #[error("Invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Text could not be decoded.
    #[error("Encoding error: {0}")]
    Encoding(String),
}

// =============================================================================
// Translation Errors
// =============================================================================

/// Errors from the header translator.
///
/// These never abort a conversion: the pipeline logs them and keeps the
/// untranslated header.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// The engine tag is not one of the recognized engines.
    #[error("Unsupported translation engine: {0}")]
    UnsupportedEngine(String),

    /// HTTP request failed before a response arrived.
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    /// The service refused the request because of quota.
    #[error("Rate limited by translation service")]
    RateLimited,

    /// The service answered with a non-success status.
    #[error("API error: {0}")]
    ApiError(String),

    /// The response body could not be understood.
    #[error("Invalid translation response: {0}")]
    InvalidResponse(String),
}

// =============================================================================
// Sink Errors
// =============================================================================

/// Errors while producing the JSON output.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Records could not be serialized.
    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The destination could not be written.
    #[error("Failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Conversion Errors (top-level)
// =============================================================================

/// Top-level conversion errors.
///
/// This is the error type returned by [`crate::pipeline::convert`]. Only fatal
/// failures appear here; translation problems are handled inside the pipeline.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Source spreadsheet error.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Output error.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl ConvertError {
    /// True when the source file was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConvertError::Source(SourceError::NotFound(_)))
    }

    /// True when the first sheet had no rows.
    pub fn is_empty_sheet(&self) -> bool {
        matches!(self, ConvertError::Source(SourceError::EmptySheet))
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Result type for translation operations.
pub type TranslationResult<T> = Result<T, TranslationError>;

/// Result type for sink operations.
pub type SinkResult<T> = Result<T, SinkError>;

/// Result type for whole conversions.
pub type ConvertResult<T> = Result<T, ConvertError>;

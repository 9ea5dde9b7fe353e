//! # xlsx2json - Spreadsheet to JSON conversion
//!
//! Reads the first sheet of a workbook, keys every data row by the header
//! row, drops blank rows and writes the records as a pretty-printed JSON
//! array. Chinese headers can optionally be machine-translated into English
//! identifiers.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Spreadsheet │────▶│   Source    │────▶│  Normalize  │────▶│  JSON file  │
//! │ xlsx/xls/csv│     │(first sheet)│     │ (+translate)│     │  (records)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use xlsx2json::{convert, ConvertOptions};
//!
//! #[tokio::main]
//! async fn main() {
//!     let options = ConvertOptions::default().with_translation("vitalets");
//!     let result = convert("orders.xlsx".as_ref(), options).await.unwrap();
//!     println!("Wrote {} records to {}", result.records.len(), result.output_path.display());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Sheet, row and record types
//! - [`source`] - Workbook and delimited text readers
//! - [`normalize`] - Header/row zipping and blank-row suppression
//! - [`translate`] - Header translation
//! - [`sink`] - JSON serialization and output paths
//! - [`pipeline`] - End-to-end conversion
//! - [`config`] - Translator settings
//! - [`logs`] - Progress logging

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Stages
pub mod normalize;
pub mod sink;
pub mod source;
pub mod translate;

// Orchestration
pub mod pipeline;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{ConvertError, SinkError, SourceError, TranslationError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Record, ResultSet, Row, Sheet};

// =============================================================================
// Re-exports - Stages
// =============================================================================

pub use normalize::normalize_rows;

pub use sink::{default_output_path, to_json, write_records};

pub use source::{find_spreadsheets, read_sheet};

pub use translate::{
    needs_translation,
    to_identifier,
    translate_headers,
    Engine,
    GoogleTranslator,
    Translate,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use config::TranslatorConfig;

pub use pipeline::{convert, convert_with_translator, Conversion, ConvertOptions};

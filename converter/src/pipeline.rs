//! High-level conversion API.
//!
//! Combines every stage: read the first sheet, optionally translate the
//! header row, build records, write JSON.
//!
//! # Example
//!
//! ```rust,ignore
//! use xlsx2json::{convert, ConvertOptions};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let result = convert(Path::new("orders.xlsx"), ConvertOptions::default()).await?;
//!     println!("Converted {} rows", result.records.len());
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::config::TranslatorConfig;
use crate::error::{ConvertResult, SourceError};
use crate::logs::{log_info, log_success};
use crate::models::{ResultSet, Row, Sheet};
use crate::normalize::normalize_rows;
use crate::sink::{default_output_path, write_records};
use crate::source::read_sheet;
use crate::translate::{translate_headers, translate_headers_with_engine, Translate, DEFAULT_ENGINE_TAG};

/// Options for a conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Destination file; derived from the source path when absent
    pub output_path: Option<PathBuf>,

    /// Translate Chinese header cells into English identifiers
    pub translate_headers: bool,

    /// Translation engine tag
    pub engine: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            output_path: None,
            translate_headers: false,
            engine: DEFAULT_ENGINE_TAG.to_string(),
        }
    }
}

impl ConvertOptions {
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Enable header translation with the given engine tag.
    pub fn with_translation(mut self, engine: impl Into<String>) -> Self {
        self.translate_headers = true;
        self.engine = engine.into();
        self
    }

    /// Output path for `source` under these options.
    pub fn resolve_output(&self, source: &Path) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| default_output_path(source))
    }
}

/// Result of a conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Records in source order, blank rows removed
    pub records: ResultSet,

    /// Header names used as keys (after translation)
    pub headers: Vec<String>,

    /// Name of the sheet that was read
    pub sheet_name: String,

    /// File the JSON was written to
    pub output_path: PathBuf,
}

/// Convert the first sheet of `source` to a JSON file.
///
/// When translation is enabled the engine is built from `options.engine` and
/// the environment ([`TranslatorConfig::from_env`]).
pub async fn convert(source: &Path, options: ConvertOptions) -> ConvertResult<Conversion> {
    let sheet = load_sheet(source)?;
    let (header, data_rows) = split(&sheet)?;

    let headers = if options.translate_headers {
        log_info(format!("🌐 Translating headers with {}...", options.engine));
        translate_headers_with_engine(header, &options.engine, TranslatorConfig::from_env()).await
    } else {
        header.clone()
    };

    finish(source, &options, &sheet, headers, data_rows)
}

/// Same as [`convert`] but with a caller-supplied translator.
///
/// `options.engine` is ignored; `options.translate_headers` still decides
/// whether the translator is consulted.
pub async fn convert_with_translator<T: Translate>(
    source: &Path,
    options: ConvertOptions,
    translator: &T,
) -> ConvertResult<Conversion> {
    let sheet = load_sheet(source)?;
    let (header, data_rows) = split(&sheet)?;

    let headers = if options.translate_headers {
        log_info("🌐 Translating headers...");
        translate_headers(translator, header).await
    } else {
        header.clone()
    };

    finish(source, &options, &sheet, headers, data_rows)
}

fn load_sheet(source: &Path) -> ConvertResult<Sheet> {
    log_info(format!("📖 Reading {}", source.display()));
    let sheet = read_sheet(source)?;
    log_info(format!("Sheet: {}", sheet.name));
    Ok(sheet)
}

fn split(sheet: &Sheet) -> ConvertResult<(&Row, &[Row])> {
    let (header, data_rows) = sheet.split_header().ok_or(SourceError::EmptySheet)?;
    log_info(format!("Columns: {}", header.join(", ")));
    Ok((header, data_rows))
}

fn finish(
    source: &Path,
    options: &ConvertOptions,
    sheet: &Sheet,
    headers: Vec<String>,
    data_rows: &[Row],
) -> ConvertResult<Conversion> {
    let records = normalize_rows(&headers, data_rows);
    let skipped = data_rows.len() - records.len();
    log_success(format!("Converted {} rows", records.len()));
    if skipped > 0 {
        log_info(format!("Skipped {} blank rows", skipped));
    }

    let output_path = options.resolve_output(source);
    write_records(&records, &output_path)?;
    log_success(format!("💾 JSON saved to {}", output_path.display()));

    Ok(Conversion {
        records,
        headers,
        sheet_name: sheet.name.clone(),
        output_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConvertError, SinkError, TranslationError, TranslationResult};
    use rust_xlsxwriter::Workbook;
    use serde_json::{json, Value};
    use std::fs;

    struct Fixed;

    impl Translate for Fixed {
        async fn translate(&self, text: &str) -> TranslationResult<String> {
            match text {
                "姓名" => Ok("Full Name".to_string()),
                _ => Err(TranslationError::RateLimited),
            }
        }
    }

    fn write_xlsx(path: &Path, rows: &[&[&str]]) {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if !cell.is_empty() {
                    sheet.write_string(r as u32, c as u16, *cell).unwrap();
                }
            }
        }
        workbook.save(path).unwrap();
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_default_options() {
        let opts = ConvertOptions::default();
        assert!(!opts.translate_headers);
        assert_eq!(opts.engine, "vitalets");
        assert!(opts.output_path.is_none());
    }

    #[test]
    fn test_resolve_output() {
        let source = Path::new("in/data.xlsx");
        assert_eq!(
            ConvertOptions::default().resolve_output(source),
            PathBuf::from("in/data.json")
        );
        assert_eq!(
            ConvertOptions::default().with_output("out.json").resolve_output(source),
            PathBuf::from("out.json")
        );
    }

    #[tokio::test]
    async fn test_convert_xlsx_to_default_path() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("people.xlsx");
        write_xlsx(&source, &[&["Name", "Age"], &["John", "25"], &["", ""], &["Jane", ""]]);

        let result = convert(&source, ConvertOptions::default()).await.unwrap();

        assert_eq!(result.output_path, dir.path().join("people.json"));
        assert_eq!(result.records.len(), 2);
        assert_eq!(
            read_json(&result.output_path),
            json!([{"Name": "John", "Age": "25"}, {"Name": "Jane", "Age": ""}])
        );
    }

    #[tokio::test]
    async fn test_convert_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("header.csv");
        fs::write(&source, "Name,Age\n").unwrap();

        let result = convert(&source, ConvertOptions::default()).await.unwrap();

        assert!(result.records.is_empty());
        assert_eq!(fs::read_to_string(&result.output_path).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("nope.xlsx");

        let err = convert(&source, ConvertOptions::default()).await.unwrap_err();

        assert!(err.is_not_found());
        assert!(!dir.path().join("nope.json").exists());
    }

    #[tokio::test]
    async fn test_empty_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("empty.csv");
        fs::write(&source, "").unwrap();

        let err = convert(&source, ConvertOptions::default()).await.unwrap_err();

        assert!(err.is_empty_sheet());
    }

    #[tokio::test]
    async fn test_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("data.csv");
        fs::write(&source, "a\n1\n").unwrap();
        let options = ConvertOptions::default().with_output(dir.path().join("no/such/dir.json"));

        let err = convert(&source, options).await.unwrap_err();

        assert!(matches!(err, ConvertError::Sink(SinkError::Write { .. })));
    }

    #[tokio::test]
    async fn test_translated_headers_with_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("cn.xlsx");
        let output = dir.path().join("cn-out.json");
        write_xlsx(&source, &[&["姓名", "城市", "Age"], &["张三", "北京", "25"]]);
        let options = ConvertOptions::default().with_output(&output).with_translation("vitalets");

        let result = convert_with_translator(&source, options, &Fixed).await.unwrap();

        assert_eq!(result.headers, vec!["full_name", "城市", "Age"]);
        assert_eq!(
            read_json(&output),
            json!([{"full_name": "张三", "城市": "北京", "Age": "25"}])
        );
    }

    #[tokio::test]
    async fn test_translator_ignored_when_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("cn.csv");
        fs::write(&source, "姓名\n张三\n").unwrap();

        let result = convert_with_translator(&source, ConvertOptions::default(), &Fixed)
            .await
            .unwrap();

        assert_eq!(result.headers, vec!["姓名"]);
    }

    #[tokio::test]
    async fn test_unknown_engine_still_converts() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("cn.csv");
        fs::write(&source, "姓名,Age\n张三,25\n").unwrap();
        let options = ConvertOptions::default().with_translation("babelfish");

        let result = convert(&source, options).await.unwrap();

        assert_eq!(result.headers, vec!["姓名", "Age"]);
        assert_eq!(result.records.len(), 1);
    }
}

//! Delimited text reader with encoding and delimiter auto-detection.

use std::path::Path;

use crate::error::{SourceError, SourceResult};
use crate::models::{Row, Sheet};

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 wins outright; otherwise chardet guesses.
pub fn detect_encoding(bytes: &[u8]) -> String {
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    let charset = chardet::detect(bytes).0;

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" | "" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        "gb2312" | "gbk" | "gb18030" => "gb18030".to_string(),
        "big5" => "big5".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to a string using the named encoding.
///
/// Unknown labels fall back to lossy UTF-8.
pub fn decode_content(bytes: &[u8], encoding: &str) -> SourceResult<String> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

    if matches!(encoding, "utf-8" | "utf8" | "ascii") {
        return Ok(String::from_utf8_lossy(bytes).into_owned());
    }

    let codec = match encoding {
        "iso-8859-1" => Some(encoding_rs::WINDOWS_1252),
        other => encoding_rs::Encoding::for_label(other.as_bytes()),
    };

    match codec {
        Some(codec) => {
            let (decoded, _, had_errors) = codec.decode(bytes);
            if had_errors {
                return Err(SourceError::Encoding(format!(
                    "invalid {} byte sequence",
                    codec.name()
                )));
            }
            Ok(decoded.into_owned())
        }
        None => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

/// Detect the delimiter by counting occurrences in the first line
pub fn detect_delimiter(content: &str) -> u8 {
    let first_line = content.lines().next().unwrap_or("");

    let mut best = b',';
    let mut best_count = 0;

    for sep in [b';', b',', b'\t', b'|'] {
        let count = first_line.matches(sep as char).count();
        if count > best_count {
            best_count = count;
            best = sep;
        }
    }

    best
}

/// Parse decoded text into rows.
///
/// Rows keep their own width; the normalizer pads or truncates them.
pub fn parse_rows(content: &str, delimiter: u8) -> SourceResult<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(rows)
}

/// Read a delimited text file as a single sheet named after the file stem.
pub fn read_delimited(path: &Path) -> SourceResult<Sheet> {
    let bytes = std::fs::read(path)?;
    let encoding = detect_encoding(&bytes);
    let content = decode_content(&bytes, &encoding)?;
    let delimiter = detect_delimiter(&content);

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Sheet1");

    Ok(Sheet::new(name, parse_rows(&content, delimiter)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_detect_delimiter_semicolon() {
        assert_eq!(detect_delimiter("a;b;c\n1;2;3"), b';');
    }

    #[test]
    fn test_detect_delimiter_tab() {
        assert_eq!(detect_delimiter("a\tb\tc\n1\t2\t3"), b'\t');
    }

    #[test]
    fn test_detect_delimiter_pipe() {
        assert_eq!(detect_delimiter("a|b|c"), b'|');
    }

    #[test]
    fn test_detect_delimiter_single_column() {
        assert_eq!(detect_delimiter("name\nAlice"), b',');
    }

    #[test]
    fn test_quoted_values() {
        let rows = parse_rows("name,value\n\"Alice\",\"Hello, World\"", b',').unwrap();

        assert_eq!(rows[1], vec!["Alice", "Hello, World"]);
    }

    #[test]
    fn test_ragged_rows() {
        let rows = parse_rows("a;b;c\n1\n1;2;3;4", b';').unwrap();

        assert_eq!(rows[1].len(), 1);
        assert_eq!(rows[2].len(), 4);
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1").unwrap();
        assert_eq!(decoded, "Société");
    }

    #[test]
    fn test_detect_utf8_cjk() {
        assert_eq!(detect_encoding("姓名,年龄".as_bytes()), "utf-8");
    }

    #[test]
    fn test_utf8_bom_stripped() {
        let decoded = decode_content(b"\xEF\xBB\xBFname", "utf-8").unwrap();
        assert_eq!(decoded, "name");
    }

    #[test]
    fn test_read_delimited_file() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "姓名;年龄\n张三;25\n").unwrap();

        let sheet = read_delimited(file.path()).unwrap();

        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[0], vec!["姓名", "年龄"]);
        assert_eq!(sheet.rows[1], vec!["张三", "25"]);
    }

    #[test]
    fn test_read_empty_file() {
        let file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        let sheet = read_delimited(file.path()).unwrap();
        assert!(sheet.is_empty());
    }
}

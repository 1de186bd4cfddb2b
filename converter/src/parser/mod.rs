//! CSV parsing with BOM-tolerant decoding.
//!
//! Turns the raw bytes of a family export into a header row plus data rows.
//! No knowledge of the partner-id column lives here.

use csv::ReaderBuilder;
use encoding_rs::UTF_8;
use std::collections::HashMap;
use std::path::Path;

use crate::config::RaggedRows;
use crate::error::{CsvError, CsvResult};

/// Decoded input text
#[derive(Debug, Clone)]
pub struct DecodedInput {
    /// Text with any byte-order mark removed
    pub content: String,
    /// Whether the input started with a UTF-8 byte-order mark
    pub had_bom: bool,
}

/// Result of parsing with metadata
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    /// Column headers, in file order
    pub headers: Vec<String>,
    /// Data rows, each exactly `headers.len()` long
    pub rows: Vec<Vec<String>>,
    /// Whether a byte-order mark was stripped
    pub had_bom: bool,
    /// Rows that were padded or truncated to the header length
    pub padded_rows: usize,
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode raw bytes as UTF-8, removing a leading byte-order mark.
///
/// Bytes that are not valid UTF-8 fail the decode; the error names the
/// line of the first bad sequence.
pub fn decode_content(bytes: &[u8]) -> CsvResult<DecodedInput> {
    let (content, had_errors) = UTF_8.decode_with_bom_removal(bytes);

    if had_errors {
        return Err(CsvError::Encoding {
            line: first_invalid_line(bytes),
        });
    }

    Ok(DecodedInput {
        content: content.into_owned(),
        had_bom: bytes.starts_with(UTF8_BOM),
    })
}

/// 1-based line of the first invalid UTF-8 sequence.
fn first_invalid_line(bytes: &[u8]) -> u64 {
    let valid_up_to = match std::str::from_utf8(bytes) {
        Ok(_) => bytes.len(),
        Err(e) => e.valid_up_to(),
    };
    let newlines = bytes[..valid_up_to].iter().filter(|&&b| b == b'\n').count();
    newlines as u64 + 1
}

/// Parse CSV text into headers and rows.
///
/// The first row names the columns. Quoted fields may contain commas,
/// doubled quotes and newlines. Completely blank lines are skipped.
///
/// # Example
/// ```
/// use family_data::{parse_csv, RaggedRows};
///
/// let parsed = parse_csv("id,name\nI1,Alice\nI2,Bob", RaggedRows::Reject).unwrap();
///
/// assert_eq!(parsed.headers, vec!["id", "name"]);
/// assert_eq!(parsed.rows[1], vec!["I2", "Bob"]);
/// ```
pub fn parse_csv(content: &str, ragged: RaggedRows) -> CsvResult<ParseResult> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    check_headers(&headers)?;

    let mut rows = Vec::new();
    let mut padded_rows = 0;

    for result in reader.records() {
        let record = result?;
        let found = record.len();
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();

        if found != headers.len() {
            match ragged {
                RaggedRows::Reject => {
                    return Err(CsvError::RaggedRow {
                        line: record.position().map(|p| p.line()).unwrap_or(0),
                        expected: headers.len(),
                        found,
                    });
                }
                RaggedRows::Pad => {
                    row.resize(headers.len(), String::new());
                    padded_rows += 1;
                }
            }
        }

        rows.push(row);
    }

    Ok(ParseResult {
        headers,
        rows,
        had_bom: false,
        padded_rows,
    })
}

/// Parse CSV bytes, stripping a byte-order mark first.
pub fn parse_bytes(bytes: &[u8], ragged: RaggedRows) -> CsvResult<ParseResult> {
    let decoded = decode_content(bytes)?;
    let mut result = parse_csv(&decoded.content, ragged)?;
    result.had_bom = decoded.had_bom;
    Ok(result)
}

/// Read and parse a CSV file.
pub fn parse_csv_file<P: AsRef<Path>>(path: P, ragged: RaggedRows) -> CsvResult<ParseResult> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes(&bytes, ragged)
}

/// Reject empty or repeated column names; either would make object keys
/// collide or vanish in the JSON output.
fn check_headers(headers: &[String]) -> CsvResult<()> {
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (i, name) in headers.iter().enumerate() {
        let column = i + 1;
        if name.is_empty() {
            return Err(CsvError::EmptyHeader { column });
        }
        if let Some(&first) = seen.get(name.as_str()) {
            return Err(CsvError::DuplicateHeader {
                name: name.clone(),
                first,
                second: column,
            });
        }
        seen.insert(name.as_str(), column);
    }

    Ok(())
}

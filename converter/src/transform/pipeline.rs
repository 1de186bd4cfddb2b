//! End-to-end conversion: CSV file in, JSON file out.
//!
//! # Example
//!
//! ```rust,no_run
//! use family_data::{convert, ConvertOptions};
//!
//! fn main() -> Result<(), family_data::ConvertError> {
//!     let summary = convert(&ConvertOptions::default())?;
//!     println!("Converted {} records", summary.count());
//!     Ok(())
//! }
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::list_field::build_dataset;
use crate::config::{ConvertOptions, RaggedRows};
use crate::error::{ConvertError, ConvertResult, CsvError};
use crate::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::models::Dataset;
use crate::parser::{parse_bytes, ParseResult};

/// Parsing metadata kept after the rows are turned into records
#[derive(Debug, Clone)]
pub struct ParseInfo {
    pub headers: Vec<String>,
    pub had_bom: bool,
    pub padded_rows: usize,
}

impl From<&ParseResult> for ParseInfo {
    fn from(parsed: &ParseResult) -> Self {
        Self {
            headers: parsed.headers.clone(),
            had_bom: parsed.had_bom,
            padded_rows: parsed.padded_rows,
        }
    }
}

/// Result of a completed conversion
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    /// Number of records written
    pub records: usize,

    /// File the JSON array was written to
    pub output_path: PathBuf,

    /// CSV parsing metadata
    pub csv_info: ParseInfo,
}

impl ConvertSummary {
    /// Number of records converted.
    pub fn count(&self) -> usize {
        self.records
    }
}

/// Convert the configured CSV file into a JSON array file.
///
/// 1. Checks the input exists (the only handled precondition)
/// 2. Reads and decodes the CSV as UTF-8, stripping a byte-order mark
/// 3. Turns the list field into arrays
/// 4. Serializes compactly, leaving non-ASCII text unescaped
/// 5. Creates or truncates the output and writes it
///
/// The output file is only touched once the JSON is fully built, so a
/// missing, undecodable or malformed input never leaves a truncated file
/// behind.
pub fn convert(options: &ConvertOptions) -> ConvertResult<ConvertSummary> {
    let input = options.input_path.as_path();
    if !input.exists() {
        return Err(ConvertError::InputNotFound(input.to_path_buf()));
    }

    log_info(format!("📖 Reading {}", input.display()));
    let bytes = std::fs::read(input).map_err(CsvError::from)?;

    let (dataset, csv_info) = convert_bytes(&bytes, &options.list_field, options.ragged)?;

    let json = dataset_to_bytes(&dataset)?;
    write_output(&options.output_path, &json)?;
    log_success(format!("Wrote {} bytes to {}", json.len(), options.output_path.display()));

    Ok(ConvertSummary {
        records: dataset.len(),
        output_path: options.output_path.clone(),
        csv_info,
    })
}

/// Convert CSV bytes into records without touching the file system.
pub fn convert_bytes(
    bytes: &[u8],
    list_field: &str,
    ragged: RaggedRows,
) -> ConvertResult<(Dataset, ParseInfo)> {
    let parsed = parse_bytes(bytes, ragged)?;
    let info = ParseInfo::from(&parsed);

    if parsed.had_bom {
        log_info("Stripped byte-order mark");
    }
    if parsed.padded_rows > 0 {
        log_warning(format!(
            "{} row(s) did not match the header length and were padded",
            parsed.padded_rows
        ));
    }
    if !parsed.headers.is_empty() && !parsed.headers.iter().any(|h| h == list_field) {
        log_warning(format!("No '{}' column; every record gets an empty list", list_field));
    }

    log_info(format!("📋 CSV has {} columns:", parsed.headers.len()));
    for (i, col) in parsed.headers.iter().enumerate() {
        log_info_indent(format!("[{:2}] {}", i + 1, col), 1);
    }

    let dataset = build_dataset(parsed, list_field);
    log_success(format!("Read {} rows", dataset.len()));

    Ok((dataset, info))
}

/// Serialize a dataset as a compact JSON array.
pub fn dataset_to_json(dataset: &Dataset) -> ConvertResult<String> {
    Ok(serde_json::to_string(dataset)?)
}

/// Serialize a dataset as compact JSON bytes, ready to write.
pub fn dataset_to_bytes(dataset: &Dataset) -> ConvertResult<Vec<u8>> {
    let mut buf = Vec::new();
    serde_json::to_writer(&mut buf, dataset)?;
    Ok(buf)
}

fn write_output(path: &Path, content: &[u8]) -> ConvertResult<()> {
    let write_err = |source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content).map_err(write_err)?;
    writer.flush().map_err(write_err)?;
    Ok(())
}

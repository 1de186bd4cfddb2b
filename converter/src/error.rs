//! Error types for the family data converter.
//!
//! - [`CsvError`] - reading and parsing the CSV input
//! - [`ConvertError`] - top-level conversion errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Parsing Errors
// =============================================================================

/// Errors during CSV parsing.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read the input.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not valid UTF-8.
    #[error("Input is not valid UTF-8 at line {line}")]
    Encoding { line: u64 },

    /// The CSV reader rejected the input.
    #[error("Invalid CSV at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// Two header columns share a name.
    #[error("Duplicate header '{name}' in columns {first} and {second}")]
    DuplicateHeader {
        name: String,
        first: usize,
        second: usize,
    },

    /// A header column has no name.
    #[error("Header column {column} has an empty name")]
    EmptyHeader { column: usize },

    /// A data row does not have as many fields as the header.
    #[error("Line {line} has {found} fields, header has {expected}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(e) => CsvError::Io(e),
            _ => CsvError::Parse { line, message },
        }
    }
}

// =============================================================================
// Conversion Errors (top-level)
// =============================================================================

/// Top-level conversion errors.
///
/// This is the error type returned by [`crate::transform::pipeline::convert`].
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file does not exist.
    #[error("'{}' not found in the current directory.", .0.display())]
    InputNotFound(PathBuf),

    /// CSV parsing error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write the output file.
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// The only condition reported without failing the run.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConvertError::InputNotFound(_))
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let csv_err = CsvError::EmptyHeader { column: 3 };
        let convert_err: ConvertError = csv_err.into();
        assert!(convert_err.to_string().contains("column 3"));
        assert!(!convert_err.is_not_found());
    }

    #[test]
    fn test_not_found_message() {
        let err = ConvertError::InputNotFound(PathBuf::from("family_data.csv"));
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "'family_data.csv' not found in the current directory."
        );
    }

    #[test]
    fn test_ragged_row_format() {
        let err = CsvError::RaggedRow {
            line: 4,
            expected: 3,
            found: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("Line 4"));
        assert!(msg.contains("5 fields"));
        assert!(msg.contains("header has 3"));
    }

    #[test]
    fn test_encoding_error_format() {
        let err: ConvertError = CsvError::Encoding { line: 7 }.into();
        assert_eq!(err.to_string(), "CSV error: Input is not valid UTF-8 at line 7");
    }

    #[test]
    fn test_duplicate_header_format() {
        let err = CsvError::DuplicateHeader {
            name: "id".into(),
            first: 1,
            second: 4,
        };
        assert_eq!(err.to_string(), "Duplicate header 'id' in columns 1 and 4");
    }
}

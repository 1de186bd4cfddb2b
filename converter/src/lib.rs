//! # family_data - family tree CSV to JSON conversion
//!
//! Converts the `family_data.csv` export into the `family_data.json` array
//! read by the family tree viewer. Each row becomes an object keyed by the
//! CSV header; the `pids` (partner ids) cell becomes a list of ids.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│  Transform  │────▶│  JSON File  │
//! │ (UTF-8/BOM) │     │ (csv crate) │     │ (pids list) │     │  (compact)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use family_data::{convert, ConvertOptions};
//!
//! let summary = convert(&ConvertOptions::default()).unwrap();
//! println!("Converted {} records", summary.count());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Conversion options and default file names
//! - [`models`] - Record and dataset types
//! - [`parser`] - BOM-tolerant CSV parsing
//! - [`transform`] - List field transform and the conversion pipeline
//! - [`logs`] - Console progress logging

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Console output
pub mod logs;

// =============================================================================
// Re-exports - Errors and options
// =============================================================================

pub use config::{
    ConvertOptions,
    RaggedRows,
    DEFAULT_INPUT_FILE,
    DEFAULT_LIST_FIELD,
    DEFAULT_OUTPUT_FILE,
};

pub use error::{ConvertError, ConvertResult, CsvError, CsvResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Dataset, FieldValue, Record};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    decode_content,
    parse_bytes,
    parse_csv,
    parse_csv_file,
    DecodedInput,
    ParseResult,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::{
    apply_list_field,
    build_dataset,
    convert,
    convert_bytes,
    dataset_to_bytes,
    dataset_to_json,
    split_list,
    ConvertSummary,
    ParseInfo,
};

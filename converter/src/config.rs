//! Conversion options.
//!
//! The converter runs with no arguments against fixed file names in the
//! current directory. Those names live here as defaults of
//! [`ConvertOptions`] so library callers and tests can point it elsewhere.

use std::fmt;
use std::path::PathBuf;

/// Input file read when no path is given.
pub const DEFAULT_INPUT_FILE: &str = "family_data.csv";

/// Output file written when no path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "family_data.json";

/// Column holding the comma-separated partner ids.
pub const DEFAULT_LIST_FIELD: &str = "pids";

/// What to do with data rows whose field count differs from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RaggedRows {
    /// Fail the run on the first ragged row.
    #[default]
    Reject,
    /// Pad short rows with empty strings and drop surplus trailing fields.
    Pad,
}

impl fmt::Display for RaggedRows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RaggedRows::Reject => write!(f, "reject"),
            RaggedRows::Pad => write!(f, "pad"),
        }
    }
}

/// Options for a conversion run
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// CSV file to read
    pub input_path: PathBuf,

    /// JSON file to write (overwritten if present)
    pub output_path: PathBuf,

    /// Column converted from a delimited string into a list
    pub list_field: String,

    /// Ragged row handling
    pub ragged: RaggedRows,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            list_field: DEFAULT_LIST_FIELD.to_string(),
            ragged: RaggedRows::default(),
        }
    }
}

impl ConvertOptions {
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_ragged(mut self, ragged: RaggedRows) -> Self {
        self.ragged = ragged;
        self
    }
}

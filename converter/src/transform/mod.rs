//! Transformation module.
//!
//! - List field: partner-id cell to JSON list
//! - Pipeline: read, transform and write in one pass

pub mod list_field;
pub mod pipeline;

pub use list_field::{apply_list_field, build_dataset, split_list};
pub use pipeline::*;

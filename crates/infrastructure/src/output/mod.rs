//! Report writers
//!
//! CSV is the canonical output; JSON is written only when asked for.

mod csv_writer;
mod json_writer;

use std::{fmt, path::PathBuf, str::FromStr};

use application::ports::ReportWriterPort;
use serde::{Deserialize, Serialize};

pub use csv_writer::CsvReportWriter;
pub use json_writer::JsonReportWriter;

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Per-city rows followed by a summary section
    #[default]
    Csv,
    /// Pretty-printed JSON document
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {s}. Use 'csv' or 'json'")),
        }
    }
}

/// Create the writer for `format` targeting `path`
#[must_use]
pub fn create_writer(format: OutputFormat, path: impl Into<PathBuf>) -> Box<dyn ReportWriterPort> {
    match format {
        OutputFormat::Csv => Box::new(CsvReportWriter::new(path)),
        OutputFormat::Json => Box::new(JsonReportWriter::new(path)),
    }
}

/// Format an optional number with fixed precision, empty when absent
pub(crate) fn format_optional(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(String::new, |v| format!("{v:.precision$}"))
}

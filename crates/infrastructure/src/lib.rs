//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the Open-Meteo
//! weather adapter, the city list reader, and the CSV/JSON report writers.
//! Also owns configuration loading.

pub mod adapters;
pub mod config;
pub mod input;
pub mod output;

pub use adapters::*;
pub use config::{AppConfig, OutputConfig, PipelineConfig};
pub use input::{InputError, read_city_names};
pub use output::{CsvReportWriter, JsonReportWriter, OutputFormat, create_writer};

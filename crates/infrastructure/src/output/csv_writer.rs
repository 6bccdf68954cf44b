//! CSV report writer

use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use application::{error::ApplicationError, ports::ReportWriterPort};
use chrono::SecondsFormat;
use domain::{CityRecord, WeatherReport};
use tracing::{debug, instrument};

use super::format_optional;

const HEADER: [&str; 11] = [
    "city",
    "resolved_name",
    "country",
    "latitude",
    "longitude",
    "temperature_c",
    "wind_speed_kmh",
    "wind_direction_deg",
    "condition",
    "observed_at",
    "error",
];

/// Writes one row per city followed by a blank line and a
/// `statistic,value` summary section
///
/// The target file is created or overwritten.
#[derive(Debug, Clone)]
pub struct CsvReportWriter {
    path: PathBuf,
}

impl CsvReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn output_error(&self, e: impl Display) -> ApplicationError {
        ApplicationError::Output(format!("{}: {e}", self.path.display()))
    }

    fn write_to<W: Write>(report: &WeatherReport, mut out: W) -> Result<(), csv::Error> {
        let mut rows = csv::WriterBuilder::new().flexible(true).from_writer(&mut out);
        rows.write_record(HEADER)?;
        for record in &report.cities {
            rows.write_record(city_row(record))?;
        }
        rows.flush()?;
        drop(rows);

        // Blank separator line between the rows and the summary
        out.write_all(b"\n")?;

        let mut summary = csv::WriterBuilder::new().from_writer(&mut out);
        summary.write_record(["statistic", "value"])?;
        summary.write_record(["max", format_optional(report.max(), 1).as_str()])?;
        summary.write_record(["min", format_optional(report.min(), 1).as_str()])?;
        summary.write_record(["average", format_optional(report.average(), 2).as_str()])?;
        summary.flush()?;
        Ok(())
    }
}

fn city_row(record: &CityRecord) -> [String; 11] {
    let resolved = record.resolved();
    let conditions = record.conditions();

    [
        record.name.to_string(),
        resolved.map(|c| c.name.clone()).unwrap_or_default(),
        resolved.and_then(|c| c.country.clone()).unwrap_or_default(),
        resolved
            .map(|c| c.location.latitude().to_string())
            .unwrap_or_default(),
        resolved
            .map(|c| c.location.longitude().to_string())
            .unwrap_or_default(),
        format_optional(record.temperature(), 1),
        format_optional(conditions.and_then(|c| c.wind_speed), 1),
        conditions
            .and_then(|c| c.wind_direction)
            .map(|d| d.to_string())
            .unwrap_or_default(),
        conditions
            .and_then(|c| c.condition)
            .map(|c| c.description().to_string())
            .unwrap_or_default(),
        conditions
            .and_then(|c| c.observed_at)
            .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
            .unwrap_or_default(),
        record.error().unwrap_or_default().to_string(),
    ]
}

impl ReportWriterPort for CsvReportWriter {
    #[instrument(skip(self, report), fields(path = %self.path.display()))]
    fn write_report(&self, report: &WeatherReport) -> Result<(), ApplicationError> {
        let file = File::create(&self.path).map_err(|e| self.output_error(e))?;
        Self::write_to(report, BufWriter::new(file)).map_err(|e| self.output_error(e))?;

        debug!(rows = report.cities.len(), "CSV report written");
        Ok(())
    }

    fn destination(&self) -> &Path {
        &self.path
    }
}

//! JSON report writer

use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use application::{error::ApplicationError, ports::ReportWriterPort};
use domain::WeatherReport;
use tracing::{debug, instrument};

/// Writes the whole report as pretty-printed JSON
#[derive(Debug, Clone)]
pub struct JsonReportWriter {
    path: PathBuf,
}

impl JsonReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn output_error(&self, e: impl Display) -> ApplicationError {
        ApplicationError::Output(format!("{}: {e}", self.path.display()))
    }
}

impl ReportWriterPort for JsonReportWriter {
    #[instrument(skip(self, report), fields(path = %self.path.display()))]
    fn write_report(&self, report: &WeatherReport) -> Result<(), ApplicationError> {
        let file = File::create(&self.path).map_err(|e| self.output_error(e))?;
        let mut out = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut out, report).map_err(|e| self.output_error(e))?;
        out.write_all(b"\n")
            .and_then(|()| out.flush())
            .map_err(|e| self.output_error(e))?;

        debug!(cities = report.cities.len(), "JSON report written");
        Ok(())
    }

    fn destination(&self) -> &Path {
        &self.path
    }
}

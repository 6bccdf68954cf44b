//! Report writer port

use std::path::Path;

use domain::WeatherReport;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for persisting a finished report
#[cfg_attr(test, automock)]
pub trait ReportWriterPort: Send + Sync {
    /// Write the report, replacing any previous output at the destination
    fn write_report(&self, report: &WeatherReport) -> Result<(), ApplicationError>;

    /// Where the report ends up
    fn destination(&self) -> &Path;
}

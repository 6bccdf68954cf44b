//! Weather report service - The fetch, aggregate, write pipeline

use std::{fmt, sync::Arc, time::Duration};

use domain::{CityName, CityRecord, CurrentConditions, ResolvedCity, WeatherReport};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{CityWeatherPort, ReportWriterPort},
};

/// Service that turns a list of city names into a weather report
///
/// Cities are fetched strictly one after another. A failure for one city is
/// recorded on its record and never aborts the run.
pub struct WeatherReportService {
    weather: Arc<dyn CityWeatherPort>,
    request_delay: Duration,
}

impl fmt::Debug for WeatherReportService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherReportService")
            .field("request_delay", &self.request_delay)
            .finish_non_exhaustive()
    }
}

impl WeatherReportService {
    /// Create a new service without a pause between cities
    pub fn new(weather: Arc<dyn CityWeatherPort>) -> Self {
        Self {
            weather,
            request_delay: Duration::ZERO,
        }
    }

    /// Pause for `delay` between consecutive cities
    #[must_use]
    pub const fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    /// Fetch one city, turning any failure into a failed record
    #[instrument(skip(self), fields(city = %city))]
    pub async fn fetch_city(&self, city: CityName) -> CityRecord {
        match self.lookup(&city).await {
            Ok((resolved, conditions)) => {
                info!(
                    resolved = %resolved.name,
                    temperature = conditions.temperature,
                    "Fetched current weather"
                );
                CityRecord::fetched(city, resolved, conditions)
            },
            Err(e) => {
                warn!(error = %e, "Could not fetch weather, recording failure");
                CityRecord::failed(city, e.to_string())
            },
        }
    }

    async fn lookup(
        &self,
        city: &CityName,
    ) -> Result<(ResolvedCity, CurrentConditions), ApplicationError> {
        let resolved = self.weather.resolve_city(city).await?;
        debug!(location = %resolved.location, "Resolved city");

        let conditions = self.weather.current_conditions(&resolved.location).await?;
        Ok((resolved, conditions))
    }

    /// Fetch every city in order and aggregate the results
    #[instrument(skip_all, fields(cities = cities.len()))]
    pub async fn build_report(&self, cities: Vec<CityName>) -> WeatherReport {
        let mut records = Vec::with_capacity(cities.len());

        for (index, city) in cities.into_iter().enumerate() {
            if index > 0 && !self.request_delay.is_zero() {
                tokio::time::sleep(self.request_delay).await;
            }
            records.push(self.fetch_city(city).await);
        }

        let report = WeatherReport::new(records);
        info!(
            cities = report.cities.len(),
            failures = report.failure_count(),
            max = ?report.max(),
            min = ?report.min(),
            average = ?report.average(),
            "Weather report assembled"
        );
        report
    }

    /// Build the report and hand it to `writer`
    ///
    /// # Errors
    ///
    /// Returns the writer's error; per-city fetch failures are not errors.
    pub async fn generate(
        &self,
        cities: Vec<CityName>,
        writer: &dyn ReportWriterPort,
    ) -> Result<WeatherReport, ApplicationError> {
        let report = self.build_report(cities).await;

        writer.write_report(&report)?;
        info!(path = %writer.destination().display(), "Report written");

        Ok(report)
    }
}

//! Aggregated weather report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::city_record::CityRecord;

/// Max/min/average over a set of temperatures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureStats {
    /// Highest temperature in Celsius
    pub max: f64,
    /// Lowest temperature in Celsius
    pub min: f64,
    /// Arithmetic mean in Celsius
    pub average: f64,
    /// Number of temperatures the statistics cover
    pub count: usize,
}

impl TemperatureStats {
    /// Compute statistics over the finite values of `temperatures`
    ///
    /// Returns `None` if there is no finite value to aggregate.
    #[must_use]
    pub fn compute(temperatures: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut max = f64::NEG_INFINITY;
        let mut min = f64::INFINITY;
        let mut sum = 0.0;
        let mut count = 0_usize;

        for t in temperatures.into_iter().filter(|t| t.is_finite()) {
            max = max.max(t);
            min = min.min(t);
            sum += t;
            count += 1;
        }

        if count == 0 {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let average = (sum / count as f64).clamp(min, max);

        Some(Self {
            max,
            min,
            average,
            count,
        })
    }
}

/// Per-city records plus statistics over the successful ones
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// When the report was assembled
    pub generated_at: DateTime<Utc>,
    /// One record per input city, in input order
    pub cities: Vec<CityRecord>,
    /// Aggregates over fetched temperatures; absent if none were fetched
    pub stats: Option<TemperatureStats>,
}

impl WeatherReport {
    /// Build a report, aggregating over the records that have a temperature
    #[must_use]
    pub fn new(cities: Vec<CityRecord>) -> Self {
        let stats = TemperatureStats::compute(cities.iter().filter_map(CityRecord::temperature));
        Self {
            generated_at: Utc::now(),
            cities,
            stats,
        }
    }

    /// Highest fetched temperature
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.stats.map(|s| s.max)
    }

    /// Lowest fetched temperature
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.stats.map(|s| s.min)
    }

    /// Mean of fetched temperatures
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        self.stats.map(|s| s.average)
    }

    /// Number of cities whose fetch failed
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.cities.iter().filter(|c| !c.is_fetched()).count()
    }

    /// Whether the report has no cities at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

//! Per-city fetch results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{CityName, GeoLocation, WeatherCondition};

/// A city as resolved by the geocoding service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedCity {
    /// Canonical name returned by the geocoder (may differ from the input)
    pub name: String,
    /// Country name, if the geocoder knows it
    pub country: Option<String>,
    /// Coordinates used for the weather lookup
    pub location: GeoLocation,
}

/// Current weather at a resolved city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Air temperature at 2 m in Celsius
    pub temperature: f64,
    /// Wind speed at 10 m in km/h
    pub wind_speed: Option<f64>,
    /// Wind direction at 10 m in degrees
    pub wind_direction: Option<u16>,
    /// Decoded WMO weather code
    pub condition: Option<WeatherCondition>,
    /// Observation time
    pub observed_at: Option<DateTime<Utc>>,
}

impl CurrentConditions {
    /// Conditions carrying only a temperature
    #[must_use]
    pub const fn with_temperature(temperature: f64) -> Self {
        Self {
            temperature,
            wind_speed: None,
            wind_direction: None,
            condition: None,
            observed_at: None,
        }
    }
}

/// Outcome of fetching one city's weather
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchOutcome {
    /// Geocoding and the weather lookup both succeeded
    Fetched {
        /// Where the weather was looked up
        city: ResolvedCity,
        /// What was observed there
        conditions: CurrentConditions,
    },
    /// Either step failed; the reason is kept for the output
    Failed {
        /// Display string of the underlying error
        reason: String,
    },
}

/// One input city together with its fetch outcome
///
/// Records are created once the fetch for that city has finished and are
/// not modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    /// The city name exactly as read from the input
    pub name: CityName,
    /// What happened when fetching it
    pub outcome: FetchOutcome,
}

impl CityRecord {
    /// Record a successful fetch
    #[must_use]
    pub const fn fetched(name: CityName, city: ResolvedCity, conditions: CurrentConditions) -> Self {
        Self {
            name,
            outcome: FetchOutcome::Fetched { city, conditions },
        }
    }

    /// Record a failed fetch
    #[must_use]
    pub fn failed(name: CityName, reason: impl Into<String>) -> Self {
        Self {
            name,
            outcome: FetchOutcome::Failed {
                reason: reason.into(),
            },
        }
    }

    /// Temperature, if the fetch succeeded and produced a finite value
    #[must_use]
    pub fn temperature(&self) -> Option<f64> {
        match &self.outcome {
            FetchOutcome::Fetched { conditions, .. } if conditions.temperature.is_finite() => {
                Some(conditions.temperature)
            },
            _ => None,
        }
    }

    /// Error reason, if the fetch failed
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            FetchOutcome::Failed { reason } => Some(reason),
            FetchOutcome::Fetched { .. } => None,
        }
    }

    /// Resolved city, if geocoding succeeded
    #[must_use]
    pub const fn resolved(&self) -> Option<&ResolvedCity> {
        match &self.outcome {
            FetchOutcome::Fetched { city, .. } => Some(city),
            FetchOutcome::Failed { .. } => None,
        }
    }

    /// Current conditions, if the fetch succeeded
    #[must_use]
    pub const fn conditions(&self) -> Option<&CurrentConditions> {
        match &self.outcome {
            FetchOutcome::Fetched { conditions, .. } => Some(conditions),
            FetchOutcome::Failed { .. } => None,
        }
    }

    /// Whether the fetch succeeded
    #[must_use]
    pub const fn is_fetched(&self) -> bool {
        matches!(self.outcome, FetchOutcome::Fetched { .. })
    }
}

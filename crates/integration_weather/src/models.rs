//! Weather data models
//!
//! Types for the Open-Meteo geocoding and forecast responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A place returned by the geocoding API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedPlace {
    /// Canonical place name
    pub name: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Country name
    pub country: Option<String>,
    /// ISO 3166-1 alpha-2 country code
    pub country_code: Option<String>,
    /// First-level administrative area (state, region)
    pub admin1: Option<String>,
}

/// Current weather conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Observation time (UTC)
    pub time: DateTime<Utc>,
    /// Temperature at 2 m in Celsius
    pub temperature: f64,
    /// Wind speed at 10 m in km/h
    pub wind_speed: Option<f64>,
    /// Wind direction at 10 m in degrees (0-360)
    pub wind_direction: Option<u16>,
    /// WMO weather code
    pub weather_code: Option<u8>,
}

/// Raw geocoding search response
///
/// `results` is omitted entirely when nothing matched.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<GeocodingResult>>,
}

/// Raw geocoding search hit
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub admin1: Option<String>,
}

impl From<GeocodingResult> for GeocodedPlace {
    fn from(raw: GeocodingResult) -> Self {
        Self {
            name: raw.name,
            latitude: raw.latitude,
            longitude: raw.longitude,
            country: raw.country,
            country_code: raw.country_code,
            admin1: raw.admin1,
        }
    }
}

/// Raw current weather block
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherData {
    pub time: String,
    #[serde(default)]
    pub temperature_2m: Option<f64>,
    #[serde(default)]
    pub wind_speed_10m: Option<f64>,
    #[serde(default)]
    pub wind_direction_10m: Option<u16>,
    #[serde(default)]
    pub weather_code: Option<u8>,
}

/// Raw forecast API response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub current: Option<WeatherData>,
}

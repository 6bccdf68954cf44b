//! Open-Meteo weather client
//!
//! HTTP client for the Open-Meteo geocoding and forecast APIs.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ApiResponse, CurrentWeather, GeocodedPlace, GeocodingResponse, WeatherData};

/// Variables requested in the `current` block of a forecast call
const CURRENT_VARIABLES: &str = "temperature_2m,wind_speed_10m,wind_direction_10m,weather_code";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The geocoder returned no match for the city
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else if err.is_decode() {
            Self::ParseError(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Open-Meteo forecast API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Open-Meteo geocoding API base URL (default: <https://geocoding-api.open-meteo.com/v1>)
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,

    /// Per-request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Language for geocoding results (default: en)
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    10
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            geocoding_base_url: default_geocoding_base_url(),
            timeout_secs: default_timeout(),
            language: default_language(),
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Resolve a city name to its best-matching place
    async fn search_city(&self, name: &str) -> Result<GeocodedPlace, WeatherError>;

    /// Get current weather for a location
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentWeather, WeatherError>;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Build the API URL for a current-conditions request
    ///
    /// No `timezone` parameter is sent, so timestamps come back in GMT.
    fn build_current_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&current={}",
            self.config.base_url, latitude, longitude, CURRENT_VARIABLES
        )
    }

    /// Send a request and decode its JSON body, mapping HTTP status codes
    async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, WeatherError> {
        let response = request.send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }

    /// Parse current weather from API response
    fn parse_current_weather(data: &WeatherData) -> Result<CurrentWeather, WeatherError> {
        let time = Self::parse_datetime(&data.time)?;

        let temperature = data
            .temperature_2m
            .filter(|t| t.is_finite())
            .ok_or_else(|| WeatherError::ParseError("No temperature in response".to_string()))?;

        Ok(CurrentWeather {
            time,
            temperature,
            wind_speed: data.wind_speed_10m,
            wind_direction: data.wind_direction_10m,
            weather_code: data.weather_code,
        })
    }

    /// Parse datetime string to `DateTime<Utc>`
    fn parse_datetime(s: &str) -> Result<DateTime<Utc>, WeatherError> {
        // ISO 8601 without seconds, as Open-Meteo sends it (2026-02-05T14:00)
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
            return Ok(Utc.from_utc_datetime(&dt));
        }

        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Ok(Utc.from_utc_datetime(&dt));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&Utc));
        }

        Err(WeatherError::ParseError(format!(
            "Invalid datetime format: {s}"
        )))
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self))]
    async fn search_city(&self, name: &str) -> Result<GeocodedPlace, WeatherError> {
        let url = format!("{}/search", self.config.geocoding_base_url);
        debug!(url = %url, "Geocoding city");

        let request = self.client.get(&url).query(&[
            ("name", name),
            ("count", "1"),
            ("language", self.config.language.as_str()),
            ("format", "json"),
        ]);

        let response: GeocodingResponse = Self::fetch_json(request).await?;

        let place: GeocodedPlace = response
            .results
            .and_then(|results| results.into_iter().next())
            .map(Into::into)
            .ok_or_else(|| WeatherError::CityNotFound(name.to_string()))?;

        Self::validate_coordinates(place.latitude, place.longitude)?;

        debug!(
            resolved = %place.name,
            lat = place.latitude,
            lon = place.longitude,
            "Resolved city"
        );
        Ok(place)
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentWeather, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = self.build_current_url(latitude, longitude);
        debug!(url = %url, "Fetching current weather");

        let api_response: ApiResponse = Self::fetch_json(self.client.get(&url)).await?;

        let current_data = api_response.current.ok_or_else(|| {
            WeatherError::ParseError("No current weather data in response".to_string())
        })?;

        Self::parse_current_weather(&current_data)
    }
}

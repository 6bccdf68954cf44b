//! Weather adapter - Implements CityWeatherPort using integration_weather

use application::{error::ApplicationError, ports::CityWeatherPort};
use async_trait::async_trait;
use domain::{
    CityName, CurrentConditions, DomainError, GeoLocation, ResolvedCity, WeatherCondition,
};
use integration_weather::{
    CurrentWeather, GeocodedPlace, OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for the Open-Meteo geocoding and forecast APIs
pub struct WeatherAdapter {
    client: OpenMeteoClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenMeteoClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::with_defaults()
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenMeteoClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::CityNotFound(_) => ApplicationError::NotFound(err.to_string()),
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::ParseError(e) => ApplicationError::InvalidResponse(e),
            WeatherError::InvalidCoordinates => {
                ApplicationError::Domain(DomainError::InvalidCoordinates)
            },
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    fn map_place(place: GeocodedPlace) -> Result<ResolvedCity, ApplicationError> {
        let location = GeoLocation::new(place.latitude, place.longitude)?;
        Ok(ResolvedCity {
            name: place.name,
            country: place.country,
            location,
        })
    }

    fn map_current(current: &CurrentWeather) -> CurrentConditions {
        CurrentConditions {
            temperature: current.temperature,
            wind_speed: current.wind_speed,
            wind_direction: current.wind_direction,
            condition: current.weather_code.map(WeatherCondition::from_wmo_code),
            observed_at: Some(current.time),
        }
    }
}

#[async_trait]
impl CityWeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(city = %city))]
    async fn resolve_city(&self, city: &CityName) -> Result<ResolvedCity, ApplicationError> {
        let place = self
            .client
            .search_city(city.as_str())
            .await
            .map_err(Self::map_error)?;

        debug!(
            name = %place.name,
            country = ?place.country,
            lat = place.latitude,
            lon = place.longitude,
            "Geocoded city"
        );
        Self::map_place(place)
    }

    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn current_conditions(
        &self,
        location: &GeoLocation,
    ) -> Result<CurrentConditions, ApplicationError> {
        let result = self
            .client
            .get_current(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(current) => {
                debug!(
                    temperature = current.temperature,
                    weather_code = ?current.weather_code,
                    "Retrieved current weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result.map(|c| Self::map_current(&c))
    }
}

//! City weather port
//!
//! Defines the interface for resolving a city and reading its current weather.

use async_trait::async_trait;
use domain::{CityName, CurrentConditions, GeoLocation, ResolvedCity};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for city weather lookups
///
/// The two steps are separate so a failure can be attributed to geocoding or
/// to the weather call.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CityWeatherPort: Send + Sync {
    /// Resolve a city name to coordinates
    async fn resolve_city(&self, city: &CityName) -> Result<ResolvedCity, ApplicationError>;

    /// Get current conditions at a location
    async fn current_conditions(
        &self,
        location: &GeoLocation,
    ) -> Result<CurrentConditions, ApplicationError>;
}

//! Value Objects - Immutable, identity-less domain primitives

mod city_name;
mod geo_location;
mod weather_condition;

pub use city_name::CityName;
pub use geo_location::GeoLocation;
pub use weather_condition::WeatherCondition;

//! Open-Meteo weather integration
//!
//! Client for the Open-Meteo geocoding and forecast APIs (<https://open-meteo.com>).
//! Resolves city names to coordinates and fetches current conditions without
//! requiring an API key.

pub mod client;
mod models;

pub use client::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{CurrentWeather, GeocodedPlace};

//! Domain entities - Per-city results and the aggregated report

mod city_record;
mod weather_report;

pub use city_record::{CityRecord, CurrentConditions, FetchOutcome, ResolvedCity};
pub use weather_report::{TemperatureStats, WeatherReport};

//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod city_weather_port;
mod report_writer_port;

#[cfg(test)]
pub use city_weather_port::MockCityWeatherPort;
pub use city_weather_port::CityWeatherPort;
#[cfg(test)]
pub use report_writer_port::MockReportWriterPort;
pub use report_writer_port::ReportWriterPort;

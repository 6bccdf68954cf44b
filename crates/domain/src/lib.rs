//! Domain layer for weather-stats
//!
//! Contains the city records, the aggregated weather report, value objects
//! and domain errors. No I/O happens here.

pub mod city_list;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use city_list::parse_city_list;
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;

//! Application layer - Use cases and orchestration
//!
//! Defines the ports the weather pipeline talks through and the service that
//! runs it: fetch every city in order, aggregate, hand the report to a writer.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;

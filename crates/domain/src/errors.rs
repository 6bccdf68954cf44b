//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// City name is empty after trimming
    #[error("City name must not be empty")]
    EmptyCityName,

    /// Coordinates outside the valid range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

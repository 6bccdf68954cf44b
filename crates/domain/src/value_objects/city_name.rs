//! City name value object
//!
//! A city name as read from the input list. Surrounding whitespace is
//! stripped; the name must not be empty afterwards.
//!
//! # Examples
//!
//! ```
//! use domain::CityName;
//!
//! let city = CityName::new("  Paris ").unwrap();
//! assert_eq!(city.as_str(), "Paris");
//!
//! assert!(CityName::new("   ").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A trimmed, non-empty city name
///
/// Case is preserved: the name is written back to the output exactly as the
/// user typed it, so the output lines up with the input file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CityName(String);

impl CityName {
    /// Create a new city name, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyCityName` if nothing is left after trimming.
    pub fn new(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyCityName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CityName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CityName> for String {
    fn from(value: CityName) -> Self {
        value.0
    }
}

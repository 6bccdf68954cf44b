//! Weather condition decoded from WMO weather interpretation codes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse weather condition
///
/// See <https://open-meteo.com/en/docs> for the WMO code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// WMO 0
    ClearSky,
    /// WMO 1
    MainlyClear,
    /// WMO 2
    PartlyCloudy,
    /// WMO 3
    Overcast,
    /// WMO 45, 48
    Fog,
    /// WMO 51-57
    Drizzle,
    /// WMO 61-67
    Rain,
    /// WMO 71-77
    Snow,
    /// WMO 80-82
    RainShowers,
    /// WMO 85, 86
    SnowShowers,
    /// WMO 95-99
    Thunderstorm,
    /// Any code not listed above
    Unknown,
}

impl WeatherCondition {
    /// Map a WMO weather code to a condition
    #[must_use]
    pub const fn from_wmo_code(code: u8) -> Self {
        match code {
            0 => Self::ClearSky,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 | 48 => Self::Fog,
            51 | 53 | 55 | 56 | 57 => Self::Drizzle,
            61 | 63 | 65 | 66 | 67 => Self::Rain,
            71 | 73 | 75 | 77 => Self::Snow,
            80..=82 => Self::RainShowers,
            85 | 86 => Self::SnowShowers,
            95 | 96 | 99 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    /// Human-readable description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ClearSky => "Clear sky",
            Self::MainlyClear => "Mainly clear",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::RainShowers => "Rain showers",
            Self::SnowShowers => "Snow showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

//! Application configuration
//!
//! Layered with the `config` crate:
//! - built-in defaults
//! - `weather-stats.toml` in the working directory (optional), or an explicit file
//! - environment variables prefixed `WEATHER_STATS_`, nested with `__`
//!   (e.g. `WEATHER_STATS_WEATHER__TIMEOUT_SECS=5`)

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    time::Duration,
};

use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::output::OutputFormat;

/// Default config file name, looked up in the working directory
const DEFAULT_CONFIG_FILE: &str = "weather-stats";

/// Default report file name without extension
const DEFAULT_OUTPUT_STEM: &str = "weather_data";

/// Prefix for environment overrides
const ENV_PREFIX: &str = "WEATHER_STATS";

/// Pipeline pacing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Pause between consecutive cities in milliseconds (0 disables it)
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
}

const fn default_request_delay_ms() -> u64 {
    500
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            request_delay_ms: default_request_delay_ms(),
        }
    }
}

impl PipelineConfig {
    /// Pause between consecutive cities
    #[must_use]
    pub const fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

/// Report output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output file path; when unset the name follows the format
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

impl OutputConfig {
    /// Path to write a report in `format` to
    ///
    /// An explicit `path` always wins, otherwise `weather_data.csv` or
    /// `weather_data.json`.
    #[must_use]
    pub fn path_for(&self, format: OutputFormat) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{DEFAULT_OUTPUT_STEM}.{format}")))
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Open-Meteo client configuration
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Pipeline pacing
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Report output
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from file and process environment
    ///
    /// With `path` set, that file must exist. Without it, `weather-stats.toml`
    /// (or any format the `config` crate recognises) is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Load configuration, taking environment overrides from `env` instead
    /// of the process environment when given
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        debug!(
            base_url = %loaded.weather.base_url,
            geocoding_base_url = %loaded.weather.geocoding_base_url,
            output = ?loaded.output.path,
            format = %loaded.output.format,
            "Configuration loaded"
        );
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn empty_env() -> Option<HashMap<String, String>> {
        Some(HashMap::new())
    }

    #[test]
    fn defaults_without_sources() {
        let config = AppConfig::load_with_env(None, empty_env()).unwrap();

        assert!(config.output.path.is_none());
        assert_eq!(
            config.output.path_for(OutputFormat::Csv),
            PathBuf::from("weather_data.csv")
        );
        assert_eq!(config.output.format, OutputFormat::Csv);
        assert_eq!(config.pipeline.request_delay(), Duration::from_millis(500));
        assert_eq!(config.weather.timeout_secs, 10);
    }

    #[test]
    fn default_path_follows_format() {
        let output = OutputConfig::default();

        assert_eq!(
            output.path_for(OutputFormat::Json),
            PathBuf::from("weather_data.json")
        );
        assert_eq!(
            output.path_for(OutputFormat::Csv),
            PathBuf::from("weather_data.csv")
        );
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        assert!(AppConfig::load_with_env(Some(&missing), empty_env()).is_err());
    }

    #[test]
    fn loads_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[weather]
base_url = "http://localhost:9999/v1"
timeout_secs = 3

[pipeline]
request_delay_ms = 0

[output]
path = "out/report.json"
format = "json"
"#
        )
        .unwrap();

        let config = AppConfig::load_with_env(Some(file.path()), empty_env()).unwrap();

        assert_eq!(config.weather.base_url, "http://localhost:9999/v1");
        assert_eq!(config.weather.timeout_secs, 3);
        assert_eq!(
            config.weather.geocoding_base_url,
            "https://geocoding-api.open-meteo.com/v1"
        );
        assert_eq!(config.pipeline.request_delay(), Duration::ZERO);
        assert_eq!(
            config.output.path_for(OutputFormat::Csv),
            PathBuf::from("out/report.json")
        );
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[pipeline]\nrequest_delay_ms = 250").unwrap();

        let env = HashMap::from([
            (
                "WEATHER_STATS_PIPELINE__REQUEST_DELAY_MS".to_string(),
                "0".to_string(),
            ),
            (
                "WEATHER_STATS_WEATHER__GEOCODING_BASE_URL".to_string(),
                "http://127.0.0.1:8080".to_string(),
            ),
        ]);

        let config = AppConfig::load_with_env(Some(file.path()), Some(env)).unwrap();

        assert_eq!(config.pipeline.request_delay_ms, 0);
        assert_eq!(config.weather.geocoding_base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn invalid_format_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[output]\nformat = \"xml\"").unwrap();

        assert!(AppConfig::load_with_env(Some(file.path()), empty_env()).is_err());
    }
}

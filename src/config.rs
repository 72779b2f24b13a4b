//! Configuration management for the snowcast library
//!
//! Handles loading configuration from an optional TOML file and
//! `SNOWCAST`-prefixed environment variables, with sensible defaults so the
//! library works without any configuration at all (Open-Meteo needs no key).

use crate::{Result, SnowcastError};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowcastConfig {
    /// Weather API configuration
    pub weather: WeatherConfig,
    /// Cache configuration
    pub cache: CacheConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL for the Open-Meteo API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Forecast timezone sent to the API
    #[serde(default = "default_weather_timezone")]
    pub timezone: String,
    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
    /// Number of forecast days requested by the binary
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

/// Cache configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache TTL in minutes
    #[serde(default = "default_cache_ttl_minutes")]
    pub ttl_minutes: u32,
    /// Cache directory location
    #[serde(default = "default_cache_location")]
    pub location: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_weather_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_weather_timezone() -> String {
    "Europe/Zurich".to_string()
}

fn default_weather_timeout() -> u32 {
    30
}

fn default_forecast_days() -> u8 {
    7
}

fn default_cache_ttl_minutes() -> u32 {
    30
}

fn default_cache_location() -> String {
    ".cache/snowcast".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            timezone: default_weather_timezone(),
            timeout_seconds: default_weather_timeout(),
            forecast_days: default_forecast_days(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: default_cache_ttl_minutes(),
            location: default_cache_location(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl SnowcastConfig {
    /// Load configuration from an optional file path plus environment
    /// overrides (`SNOWCAST_WEATHER__BASE_URL` and friends).
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder();

        builder = match path {
            Some(path) => builder.add_source(File::with_name(path)),
            None => builder.add_source(File::with_name("config/snowcast").required(false)),
        };

        builder = builder.add_source(Environment::with_prefix("SNOWCAST").separator("__"));

        let settings = builder
            .build()
            .map_err(|e| SnowcastError::config(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| SnowcastError::config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SnowcastConfig::default();
        assert_eq!(config.weather.base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.weather.timezone, "Europe/Zurich");
        assert_eq!(config.weather.forecast_days, 7);
        assert_eq!(config.cache.ttl_minutes, 30);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = SnowcastConfig::load(None).expect("defaults should load");
        assert_eq!(config.weather.timeout_seconds, 30);
        assert_eq!(config.cache.location, ".cache/snowcast");
    }
}

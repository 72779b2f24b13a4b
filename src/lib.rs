//! snowcast - multi-model ski weather consensus for the Davos trip
//!
//! Fetches daily forecasts from several independent Open-Meteo models for
//! every mountain in the Davos ski area, collapses them into per-day
//! consensus aggregates with a confidence grade, and deterministically
//! maps each day onto a mood bucket and an Anchorman quote.

pub mod cache;
pub mod config;
pub mod error;
pub mod mountains;
pub mod quotes;
pub mod weather;
pub mod wind;

// Re-export core types for the public API
pub use cache::{CacheStore, FjallStore, ForecastCache, MemoryStore};
pub use config::SnowcastConfig;
pub use error::SnowcastError;
pub use mountains::{ForecastModel, Mountain, MOUNTAINS, WEATHER_MODELS};
pub use quotes::{classify_day, get_weather_quote, select_quote, QuoteCategory, QuoteSelection};
pub use weather::open_meteo::{weather_description, weather_icon};
pub use weather::{AggregatedWeather, Confidence, DayAggregate, DayForecast, WeatherService};
pub use wind::{circular_mean_degrees, format_wind_display, wind_compass, wind_strength_label};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SnowcastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}

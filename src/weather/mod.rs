//! Multi-model weather consensus service
//!
//! Fetches every (mountain x model) daily series concurrently, collapses
//! them into per-mountain and combined aggregates, and caches the result
//! under a TTL so dashboard reloads stay off the network.

use std::collections::HashMap;
use std::time::Duration;

use chrono::Utc;
use futures::future::join_all;
use tracing::{debug, info, instrument, warn};

use crate::cache::{CacheStore, ForecastCache};
use crate::config::SnowcastConfig;
use crate::mountains::{MOUNTAINS, WEATHER_MODELS};
use crate::{Result, SnowcastError};

pub mod aggregate;
pub mod open_meteo;
mod types;

pub use types::{AggregatedWeather, Confidence, DayAggregate, DayForecast};

use aggregate::aggregate_forecasts;
use open_meteo::fetch_model_forecast;

/// Weather consensus service over an injected cache store
pub struct WeatherService {
    client: reqwest::Client,
    cache: ForecastCache,
    base_url: String,
    timezone: String,
}

impl WeatherService {
    /// Create a new service from configuration and a cache backend
    pub fn new(config: &SnowcastConfig, store: Box<dyn CacheStore>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.weather.timeout_seconds.into()))
            .user_agent(concat!("snowcast/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SnowcastError::fetch(format!("failed to build HTTP client: {e}")))?;

        let ttl = Duration::from_secs(u64::from(config.cache.ttl_minutes) * 60);

        Ok(Self {
            client,
            cache: ForecastCache::new(store, ttl),
            base_url: config.weather.base_url.clone(),
            timezone: config.weather.timezone.clone(),
        })
    }

    /// Get the aggregated multi-model forecast for the next `days` days.
    ///
    /// Serves from cache when fresh. On a miss, all (mountain x model)
    /// requests run concurrently; a failed branch is logged and dropped so
    /// the consensus degrades instead of failing, and partial results are
    /// cached like full ones. Only when every branch fails does the call
    /// return an error.
    #[instrument(skip(self))]
    pub async fn get_aggregated_weather(&self, days: u8) -> Result<AggregatedWeather> {
        if let Some(cached) = self.cache.get::<AggregatedWeather>() {
            debug!("Serving aggregated weather from cache");
            return Ok(cached);
        }

        info!(
            "Fetching {} forecast series ({} mountains x {} models)",
            MOUNTAINS.len() * WEATHER_MODELS.len(),
            MOUNTAINS.len(),
            WEATHER_MODELS.len()
        );

        // Fan out over every combination; each branch is awaited and
        // caught individually so one hung or failed request only costs
        // its own series.
        let mut fetches = Vec::with_capacity(MOUNTAINS.len() * WEATHER_MODELS.len());
        for mountain in &MOUNTAINS {
            for model in &WEATHER_MODELS {
                let client = &self.client;
                let base_url = &self.base_url;
                let timezone = &self.timezone;
                fetches.push(async move {
                    let result =
                        fetch_model_forecast(client, base_url, mountain, model, days, timezone)
                            .await;
                    (mountain, model, result)
                });
            }
        }
        let results = join_all(fetches).await;

        let mut per_model: HashMap<String, HashMap<String, Vec<DayForecast>>> = WEATHER_MODELS
            .iter()
            .map(|m| (m.name.to_string(), HashMap::new()))
            .collect();
        let mut mountain_series: HashMap<&str, Vec<Vec<DayForecast>>> =
            MOUNTAINS.iter().map(|m| (m.id, Vec::new())).collect();
        let mut surviving = 0usize;

        for (mountain, model, result) in results {
            match result {
                Ok(series) => {
                    if let Some(models) = per_model.get_mut(model.name) {
                        models.insert(mountain.id.to_string(), series.clone());
                    }
                    if let Some(forecasts) = mountain_series.get_mut(mountain.id) {
                        forecasts.push(series);
                    }
                    surviving += 1;
                }
                Err(e) => {
                    warn!("Failed to fetch {} for {}: {}", model.name, mountain.name, e);
                }
            }
        }

        if surviving == 0 {
            return Err(SnowcastError::fetch(
                "all forecast requests failed, no series to aggregate",
            ));
        }
        debug!(
            "{} of {} series survived",
            surviving,
            MOUNTAINS.len() * WEATHER_MODELS.len()
        );

        let day_count = days as usize;

        // Per-mountain consensus across that mountain's surviving models
        let mut per_location = HashMap::new();
        for mountain in &MOUNTAINS {
            if let Some(series) = mountain_series.get(mountain.id) {
                if !series.is_empty() {
                    per_location.insert(
                        mountain.id.to_string(),
                        aggregate_forecasts(series, day_count),
                    );
                }
            }
        }

        // Combined Davos consensus over every surviving series, in fixed
        // mountain order so the first-wins weather code is deterministic
        let all_series: Vec<Vec<DayForecast>> = MOUNTAINS
            .iter()
            .filter_map(|m| mountain_series.remove(m.id))
            .flatten()
            .collect();
        let combined = aggregate_forecasts(&all_series, day_count);

        let result = AggregatedWeather {
            combined,
            per_location,
            per_model,
            fetched_at: Utc::now(),
        };

        // Partial results are cached like full ones
        self.cache.set(&result);

        Ok(result)
    }

    /// Drop the cached forecast so the next call refetches
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

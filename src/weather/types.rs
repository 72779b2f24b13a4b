//! Forecast data model
//!
//! `DayForecast` is one model's view of one mountain on one day;
//! `DayAggregate` collapses every contributing series for a day into a
//! single consensus row. Both round-trip through the JSON cache.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inter-model agreement for a day, derived from the temperature span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Temperature span of at most 2 degrees across sources
    High,
    /// Span of at most 5 degrees
    Medium,
    /// Anything wider
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}

/// One model's daily forecast for one mountain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    /// Mean of the daily max and min temperature, in Celsius
    pub temperature: f64,
    pub temperature_max: f64,
    pub temperature_min: f64,
    /// Precipitation sum in mm
    pub precipitation: f64,
    /// Snowfall sum in cm
    pub snowfall: f64,
    /// Maximum wind speed in m/s
    pub wind: f64,
    /// WMO weather interpretation code
    pub weather_code: i32,
}

/// Consensus aggregate for one day across all contributing series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAggregate {
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    /// Median of per-source mean temperatures, rounded to whole degrees
    pub temp_median: i32,
    /// Minimum over all per-source minima, rounded
    pub temp_min: i32,
    /// Maximum over all per-source maxima, rounded
    pub temp_max: i32,
    /// Median precipitation in mm, one decimal
    pub precip_median: f64,
    /// Median snowfall in cm, one decimal
    pub snow_median: f64,
    /// Median wind speed in m/s, rounded
    pub wind_median: i32,
    /// Code from the first contributing source (first wins, no voting)
    pub weather_code: i32,
    pub confidence: Confidence,
}

/// Full aggregation result: the combined Davos consensus, one aggregate
/// series per mountain, and the raw per-model series that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedWeather {
    /// Consensus over every surviving series across all mountains
    pub combined: Vec<DayAggregate>,
    /// Per-mountain consensus, keyed by mountain id
    pub per_location: HashMap<String, Vec<DayAggregate>>,
    /// Raw series keyed by model name, then mountain id
    pub per_model: HashMap<String, HashMap<String, Vec<DayForecast>>>,
    pub fetched_at: DateTime<Utc>,
}

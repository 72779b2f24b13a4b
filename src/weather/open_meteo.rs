//! Open-Meteo daily forecast adapter
//!
//! Fetches one model's daily series for one mountain and normalizes it
//! into [`DayForecast`] records. The response is validated at this
//! boundary: parallel daily arrays must line up with the `time` axis and
//! temperatures must be present, so malformed upstream data fails fast
//! with a typed error instead of leaking defaults into the aggregator.

use serde::Deserialize;
use tracing::debug;

use crate::mountains::{ForecastModel, Mountain};
use crate::weather::types::DayForecast;
use crate::{Result, SnowcastError};

/// Daily variables requested from the API, in response-array order
pub const DAILY_VARIABLES: &str = "temperature_2m_max,temperature_2m_min,precipitation_sum,snowfall_sum,wind_speed_10m_max,weather_code";

/// Forecast response from Open-Meteo (daily block only)
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailyData,
}

/// Daily weather arrays, parallel to `time`
#[derive(Debug, Deserialize)]
struct DailyData {
    time: Vec<String>,
    temperature_2m_max: Vec<Option<f64>>,
    temperature_2m_min: Vec<Option<f64>>,
    precipitation_sum: Vec<Option<f64>>,
    snowfall_sum: Vec<Option<f64>>,
    wind_speed_10m_max: Vec<Option<f64>>,
    weather_code: Vec<Option<i32>>,
}

impl DailyData {
    /// Check that every array spans the same days as the time axis
    fn validate(&self) -> Result<()> {
        let days = self.time.len();
        let lengths = [
            ("temperature_2m_max", self.temperature_2m_max.len()),
            ("temperature_2m_min", self.temperature_2m_min.len()),
            ("precipitation_sum", self.precipitation_sum.len()),
            ("snowfall_sum", self.snowfall_sum.len()),
            ("wind_speed_10m_max", self.wind_speed_10m_max.len()),
            ("weather_code", self.weather_code.len()),
        ];
        for (name, len) in lengths {
            if len != days {
                return Err(SnowcastError::schema(format!(
                    "daily array {name} has {len} entries for {days} days"
                )));
            }
        }
        Ok(())
    }
}

/// Fetch one model's daily forecast series for one mountain.
///
/// Returns at most `days` records in ascending date order starting today.
/// No retries; a transport error or non-success status maps to a fetch
/// error and the caller decides whether the series is expendable.
pub async fn fetch_model_forecast(
    client: &reqwest::Client,
    base_url: &str,
    mountain: &Mountain,
    model: &ForecastModel,
    days: u8,
    timezone: &str,
) -> Result<Vec<DayForecast>> {
    let url = format!(
        "{base_url}/forecast?latitude={}&longitude={}&daily={DAILY_VARIABLES}&models={}&forecast_days={days}&timezone={timezone}",
        mountain.lat, mountain.lon, model.id,
    );
    debug!("Requesting {} for {}: {}", model.name, mountain.name, url);

    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(SnowcastError::fetch(format!(
            "{} for {} returned status {}",
            model.name,
            mountain.name,
            response.status()
        )));
    }

    let parsed: ForecastResponse = response
        .json()
        .await
        .map_err(|e| SnowcastError::schema(format!("invalid forecast response: {e}")))?;

    let daily = parsed.daily;
    daily.validate()?;

    let mut forecasts = Vec::with_capacity(daily.time.len().min(days as usize));
    for (i, date) in daily.time.iter().enumerate().take(days as usize) {
        let temperature_max = daily.temperature_2m_max[i].ok_or_else(|| {
            SnowcastError::schema(format!("missing temperature_2m_max for {date}"))
        })?;
        let temperature_min = daily.temperature_2m_min[i].ok_or_else(|| {
            SnowcastError::schema(format!("missing temperature_2m_min for {date}"))
        })?;

        forecasts.push(DayForecast {
            date: date.clone(),
            temperature: (temperature_max + temperature_min) / 2.0,
            temperature_max,
            temperature_min,
            precipitation: daily.precipitation_sum[i].unwrap_or(0.0),
            snowfall: daily.snowfall_sum[i].unwrap_or(0.0),
            wind: daily.wind_speed_10m_max[i].unwrap_or(0.0),
            weather_code: daily.weather_code[i].unwrap_or(0),
        });
    }

    Ok(forecasts)
}

/// WMO weather interpretation code to emoji
#[must_use]
pub fn weather_icon(code: i32) -> &'static str {
    match code {
        0 => "☀️",
        1..=3 => "⛅",
        4..=49 => "🌫️",
        50..=59 => "🌧️",
        60..=69 => "🌨️",
        70..=79 => "❄️",
        80..=86 => "🌨️",
        95.. => "⛈️",
        _ => "☁️",
    }
}

/// WMO weather interpretation code to Norwegian description
#[must_use]
pub fn weather_description(code: i32) -> &'static str {
    match code {
        0 => "Klart",
        1..=3 => "Delvis skyet",
        4..=49 => "Tåke",
        50..=59 => "Yr",
        60..=69 => "Regn",
        70..=79 => "Snø",
        80..=86 => "Snøbyger",
        95.. => "Tordenvær",
        _ => "Overskyet",
    }
}

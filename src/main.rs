use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use snowcast::{
    format_wind_display, get_weather_quote, weather_description, weather_icon, FjallStore,
    SnowcastConfig, WeatherService,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = SnowcastConfig::load(None).context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    let store = FjallStore::new(&config.cache.location)
        .context("Failed to open cache database")?;
    let service = WeatherService::new(&config, Box::new(store))?;

    let weather = service
        .get_aggregated_weather(config.weather.forecast_days)
        .await
        .context("Failed to fetch aggregated weather")?;

    let series_count: usize = weather.per_model.values().map(|m| m.len()).sum();
    println!(
        "Davos {}-dagersvarsel (konsensus over {} serier):",
        weather.combined.len(),
        series_count
    );
    println!();

    for day in &weather.combined {
        let quote = get_weather_quote(Some(day), None);
        println!(
            "{}  {} {}  {}..{}°C (median {}°C)  {}  [{}]",
            day.date,
            weather_icon(day.weather_code),
            weather_description(day.weather_code),
            day.temp_min,
            day.temp_max,
            day.temp_median,
            format_wind_display(f64::from(day.wind_median), None),
            day.confidence,
        );
        println!("    \"{}\" - {}", quote.quote, quote.speaker);
    }

    Ok(())
}

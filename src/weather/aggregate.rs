//! Multi-series consensus aggregation
//!
//! Collapses any number of per-model/per-mountain daily series into one
//! `DayAggregate` per day: medians over the contributing samples, the
//! min/max temperature envelope, and a confidence grade derived from how
//! far the sources disagree.

use crate::weather::types::{Confidence, DayAggregate, DayForecast};

/// Standard sample median; 0 for empty input
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 != 0 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Grade inter-source agreement from the day's temperature spread
#[must_use]
pub fn confidence_for_span(temp_span: f64) -> Confidence {
    if temp_span <= 2.0 {
        Confidence::High
    } else if temp_span <= 5.0 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Collapse the given series into at most `day_count` daily aggregates.
///
/// Series may be shorter than `day_count` or empty; a day with no
/// contributing entry in any series is skipped entirely rather than
/// emitted as a placeholder.
///
/// Confidence measures how far the sources disagree: the spread between
/// the warmest and coldest per-source mean temperature. A single-source
/// day has zero spread and always grades high, even though one source
/// agreeing with itself is not real consensus. Intentional simplification.
#[must_use]
pub fn aggregate_forecasts(series: &[Vec<DayForecast>], day_count: usize) -> Vec<DayAggregate> {
    let mut result = Vec::new();

    for day_index in 0..day_count {
        let day_data: Vec<&DayForecast> =
            series.iter().filter_map(|s| s.get(day_index)).collect();

        if day_data.is_empty() {
            continue;
        }

        let temps: Vec<f64> = day_data.iter().map(|d| d.temperature).collect();
        let precips: Vec<f64> = day_data.iter().map(|d| d.precipitation).collect();
        let snows: Vec<f64> = day_data.iter().map(|d| d.snowfall).collect();
        let winds: Vec<f64> = day_data.iter().map(|d| d.wind).collect();

        let temp_min = day_data
            .iter()
            .map(|d| d.temperature_min)
            .fold(f64::INFINITY, f64::min);
        let temp_max = day_data
            .iter()
            .map(|d| d.temperature_max)
            .fold(f64::NEG_INFINITY, f64::max);

        let temp_span = temps.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b))
            - temps.iter().fold(f64::INFINITY, |a, &b| a.min(b));

        result.push(DayAggregate {
            date: day_data[0].date.clone(),
            temp_median: median(&temps).round() as i32,
            temp_min: temp_min.round() as i32,
            temp_max: temp_max.round() as i32,
            precip_median: round1(median(&precips)),
            snow_median: round1(median(&snows)),
            wind_median: median(&winds).round() as i32,
            weather_code: day_data[0].weather_code,
            confidence: confidence_for_span(temp_span),
        });
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn forecast(date: &str, min: f64, max: f64, precip: f64, snow: f64, wind: f64, code: i32) -> DayForecast {
        DayForecast {
            date: date.to_string(),
            temperature: (max + min) / 2.0,
            temperature_max: max,
            temperature_min: min,
            precipitation: precip,
            snowfall: snow,
            wind,
            weather_code: code,
        }
    }

    #[test]
    fn test_median_single_value() {
        assert_eq!(median(&[5.0]), 5.0);
    }

    #[test]
    fn test_median_even_count() {
        assert_eq!(median(&[1.0, 3.0]), 2.0);
    }

    #[test]
    fn test_median_odd_count() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
    }

    #[test]
    fn test_median_empty_is_zero() {
        assert_eq!(median(&[]), 0.0);
    }

    #[rstest]
    #[case(0.0, Confidence::High)]
    #[case(2.0, Confidence::High)]
    #[case(3.0, Confidence::Medium)]
    #[case(5.0, Confidence::Medium)]
    #[case(6.0, Confidence::Low)]
    #[case(10.0, Confidence::Low)]
    fn test_confidence_bands(#[case] span: f64, #[case] expected: Confidence) {
        assert_eq!(confidence_for_span(span), expected);
    }

    #[test]
    fn test_temperature_envelope_invariant() {
        let series = vec![
            vec![forecast("2025-01-10", -8.0, -2.0, 1.0, 4.0, 6.0, 73)],
            vec![forecast("2025-01-10", -5.0, 0.0, 2.0, 6.0, 9.0, 75)],
            vec![forecast("2025-01-10", -6.5, -1.0, 0.5, 5.0, 7.0, 71)],
        ];
        let aggregates = aggregate_forecasts(&series, 1);
        assert_eq!(aggregates.len(), 1);
        let day = &aggregates[0];
        assert!(day.temp_min <= day.temp_median);
        assert!(day.temp_median <= day.temp_max);
        assert_eq!(day.temp_min, -8);
        assert_eq!(day.temp_max, 0);
    }

    #[test]
    fn test_confidence_follows_source_disagreement() {
        // Means -5 and -3: spread 2 -> high
        let series = vec![
            vec![forecast("2025-01-10", -6.0, -4.0, 0.0, 0.0, 3.0, 1)],
            vec![forecast("2025-01-10", -4.0, -2.0, 0.0, 0.0, 3.0, 1)],
        ];
        assert_eq!(aggregate_forecasts(&series, 1)[0].confidence, Confidence::High);

        // Means -5 and 0: spread 5 -> medium
        let series = vec![
            vec![forecast("2025-01-10", -6.0, -4.0, 0.0, 0.0, 3.0, 1)],
            vec![forecast("2025-01-10", -1.0, 1.0, 0.0, 0.0, 3.0, 1)],
        ];
        assert_eq!(aggregate_forecasts(&series, 1)[0].confidence, Confidence::Medium);

        // Means -10 and 0: spread 10 -> low
        let series = vec![
            vec![forecast("2025-01-10", -11.0, -9.0, 0.0, 0.0, 3.0, 1)],
            vec![forecast("2025-01-10", -1.0, 1.0, 0.0, 0.0, 3.0, 1)],
        ];
        assert_eq!(aggregate_forecasts(&series, 1)[0].confidence, Confidence::Low);
    }

    #[test]
    fn test_single_source_day_is_always_high_confidence() {
        // Even a source with a wide daily temperature range agrees with
        // itself: zero spread, high confidence.
        let series = vec![vec![forecast("2025-01-10", -12.0, -3.0, 0.2, 1.0, 4.0, 3)]];
        let aggregates = aggregate_forecasts(&series, 1);
        assert_eq!(aggregates[0].confidence, Confidence::High);
        assert_eq!(aggregates[0].temp_min, -12);
        assert_eq!(aggregates[0].temp_max, -3);
    }

    #[test]
    fn test_missing_trailing_days_are_skipped() {
        let series = vec![
            vec![
                forecast("2025-01-10", -5.0, -2.0, 0.0, 0.0, 3.0, 1),
                forecast("2025-01-11", -6.0, -3.0, 0.0, 0.0, 4.0, 2),
            ],
            vec![forecast("2025-01-10", -4.0, -1.0, 0.0, 0.0, 2.0, 0)],
        ];
        // Requesting 4 days yields 2: days 3 and 4 have no samples anywhere
        let aggregates = aggregate_forecasts(&series, 4);
        assert_eq!(aggregates.len(), 2);
        assert_eq!(aggregates[1].date, "2025-01-11");
    }

    #[test]
    fn test_weather_code_first_wins() {
        let series = vec![
            vec![forecast("2025-01-10", -5.0, -2.0, 0.0, 0.0, 3.0, 75)],
            vec![forecast("2025-01-10", -5.0, -2.0, 0.0, 0.0, 3.0, 0)],
            vec![forecast("2025-01-10", -5.0, -2.0, 0.0, 0.0, 3.0, 95)],
        ];
        assert_eq!(aggregate_forecasts(&series, 1)[0].weather_code, 75);
    }

    #[test]
    fn test_precip_and_snow_round_to_one_decimal() {
        let series = vec![
            vec![forecast("2025-01-10", -5.0, -2.0, 1.26, 3.14, 3.0, 71)],
        ];
        let day = &aggregate_forecasts(&series, 1)[0];
        assert_eq!(day.precip_median, 1.3);
        assert_eq!(day.snow_median, 3.1);
    }

    #[test]
    fn test_wind_median_rounds_to_integer() {
        let series = vec![
            vec![forecast("2025-01-10", -5.0, -2.0, 0.0, 0.0, 7.4, 1)],
            vec![forecast("2025-01-10", -5.0, -2.0, 0.0, 0.0, 9.0, 1)],
        ];
        // median(7.4, 9.0) = 8.2 -> 8
        assert_eq!(aggregate_forecasts(&series, 1)[0].wind_median, 8);
    }

    #[test]
    fn test_empty_input_produces_no_days() {
        assert!(aggregate_forecasts(&[], 7).is_empty());
        let empty_series: Vec<Vec<DayForecast>> = vec![vec![], vec![]];
        assert!(aggregate_forecasts(&empty_series, 7).is_empty());
    }
}

//! Wind formatting utilities
//!
//! Pure helpers turning wind speed and direction into the Norwegian
//! labels the dashboard renders.

/// Wind speed (m/s) to Norwegian Beaufort-like label.
///
/// Fixed upper-bound bands checked in ascending order, first match wins.
#[must_use]
pub fn wind_strength_label(speed_ms: f64) -> &'static str {
    if speed_ms < 0.3 {
        "Stille"
    } else if speed_ms <= 1.5 {
        "Flau vind"
    } else if speed_ms <= 3.3 {
        "Svak vind"
    } else if speed_ms <= 5.4 {
        "Lett bris"
    } else if speed_ms <= 7.9 {
        "Laber bris"
    } else if speed_ms <= 10.7 {
        "Frisk bris"
    } else if speed_ms <= 13.8 {
        "Liten kuling"
    } else if speed_ms <= 17.1 {
        "Stiv kuling"
    } else if speed_ms <= 20.7 {
        "Sterk kuling"
    } else if speed_ms <= 24.4 {
        "Liten storm"
    } else if speed_ms <= 28.4 {
        "Full storm"
    } else if speed_ms <= 32.6 {
        "Sterk storm"
    } else {
        "Orkan"
    }
}

/// Wind direction (degrees) to one of 8 Norwegian compass labels.
///
/// The north sector spans [337.5, 360) and [0, 22.5); every other sector
/// is 45 degrees wide.
#[must_use]
pub fn wind_compass(degrees: f64) -> &'static str {
    let normalized = ((degrees % 360.0) + 360.0) % 360.0;

    if !(22.5..337.5).contains(&normalized) {
        "N"
    } else if normalized < 67.5 {
        "NØ"
    } else if normalized < 112.5 {
        "Ø"
    } else if normalized < 157.5 {
        "SØ"
    } else if normalized < 202.5 {
        "S"
    } else if normalized < 247.5 {
        "SV"
    } else if normalized < 292.5 {
        "V"
    } else {
        "NV"
    }
}

/// Circular mean of wind directions in degrees, rounded to whole degrees
/// and normalized to [0, 360). 0 for empty input.
///
/// Directions are circular (0 == 360), so the arithmetic mean is wrong:
/// the mean of 350 and 10 is 0, not 180. Each angle becomes a unit
/// vector, the components are averaged, and atan2 converts back.
#[must_use]
pub fn circular_mean_degrees(degrees: &[f64]) -> f64 {
    if degrees.is_empty() {
        return 0.0;
    }

    let mut sin_sum = 0.0;
    let mut cos_sum = 0.0;
    for deg in degrees {
        let rad = deg.to_radians();
        sin_sum += rad.sin();
        cos_sum += rad.cos();
    }

    let count = degrees.len() as f64;
    let mut mean_deg = (sin_sum / count).atan2(cos_sum / count).to_degrees();
    if mean_deg < 0.0 {
        mean_deg += 360.0;
    }

    mean_deg.round() % 360.0
}

/// Compose the wind display string, e.g. "12 m/s (Liten kuling) fra NV".
///
/// The direction segment is omitted when no (finite) direction is given.
#[must_use]
pub fn format_wind_display(speed_ms: f64, direction_deg: Option<f64>) -> String {
    let strength = wind_strength_label(speed_ms);
    let speed = speed_ms.round() as i64;

    match direction_deg {
        Some(direction) if !direction.is_nan() => {
            format!("{speed} m/s ({strength}) fra {}", wind_compass(direction))
        }
        _ => format!("{speed} m/s ({strength})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "Stille")]
    #[case(0.3, "Flau vind")]
    #[case(1.5, "Flau vind")]
    #[case(3.3, "Svak vind")]
    #[case(5.4, "Lett bris")]
    #[case(7.9, "Laber bris")]
    #[case(10.7, "Frisk bris")]
    #[case(12.4, "Liten kuling")]
    #[case(13.8, "Liten kuling")]
    #[case(17.1, "Stiv kuling")]
    #[case(20.7, "Sterk kuling")]
    #[case(24.4, "Liten storm")]
    #[case(28.4, "Full storm")]
    #[case(32.6, "Sterk storm")]
    #[case(32.7, "Orkan")]
    fn test_strength_band_boundaries(#[case] speed: f64, #[case] expected: &str) {
        assert_eq!(wind_strength_label(speed), expected);
    }

    #[rstest]
    #[case(0.0, "N")]
    #[case(22.4, "N")]
    #[case(44.0, "NØ")]
    #[case(90.0, "Ø")]
    #[case(135.0, "SØ")]
    #[case(180.0, "S")]
    #[case(225.0, "SV")]
    #[case(270.0, "V")]
    #[case(315.0, "NV")]
    #[case(337.5, "N")]
    #[case(359.0, "N")]
    fn test_compass_sectors(#[case] degrees: f64, #[case] expected: &str) {
        assert_eq!(wind_compass(degrees), expected);
    }

    #[test]
    fn test_compass_normalizes_out_of_range_input() {
        assert_eq!(wind_compass(360.0), "N");
        assert_eq!(wind_compass(405.0), "NØ");
        assert_eq!(wind_compass(-45.0), "NV");
    }

    #[test]
    fn test_circular_mean_wraps_north() {
        let mean = circular_mean_degrees(&[350.0, 10.0]);
        assert!(mean < 1.0 || mean > 359.0, "got {mean}");
    }

    #[test]
    fn test_circular_mean_simple_average() {
        assert_eq!(circular_mean_degrees(&[80.0, 100.0]), 90.0);
    }

    #[test]
    fn test_circular_mean_empty_is_zero() {
        assert_eq!(circular_mean_degrees(&[]), 0.0);
    }

    #[test]
    fn test_circular_mean_stays_in_range() {
        let mean = circular_mean_degrees(&[359.6, 359.8]);
        assert!((0.0..360.0).contains(&mean));
    }

    #[test]
    fn test_format_without_direction() {
        assert_eq!(format_wind_display(12.4, None), "12 m/s (Liten kuling)");
    }

    #[test]
    fn test_format_with_direction() {
        assert_eq!(
            format_wind_display(12.4, Some(315.0)),
            "12 m/s (Liten kuling) fra NV"
        );
    }

    #[test]
    fn test_format_ignores_nan_direction() {
        assert_eq!(
            format_wind_display(4.0, Some(f64::NAN)),
            "4 m/s (Lett bris)"
        );
    }
}

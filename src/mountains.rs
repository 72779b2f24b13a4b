//! Davos ski area mountains and forecast models
//!
//! Static curated data: the mountains the consensus is computed over, and
//! the independent Open-Meteo forecast models that contribute samples.

/// A mountain in the Davos ski area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mountain {
    pub id: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    /// Summit elevation in meters
    pub elevation: u16,
}

/// An Open-Meteo forecast model contributing to the consensus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastModel {
    /// Open-Meteo model identifier (the `models` query parameter)
    pub id: &'static str,
    /// Display name used as the per-model result key
    pub name: &'static str,
}

/// Mountains the aggregation runs over
pub const MOUNTAINS: [Mountain; 5] = [
    Mountain {
        id: "parsenn",
        name: "Parsenn",
        lat: 46.83,
        lon: 9.80,
        elevation: 2844,
    },
    Mountain {
        id: "jakobshorn",
        name: "Jakobshorn",
        lat: 46.77,
        lon: 9.85,
        elevation: 2590,
    },
    Mountain {
        id: "pischa",
        name: "Pischa",
        lat: 46.85,
        lon: 9.90,
        elevation: 2483,
    },
    Mountain {
        id: "rinerhorn",
        name: "Rinerhorn",
        lat: 46.74,
        lon: 9.77,
        elevation: 2490,
    },
    Mountain {
        id: "madrisa",
        name: "Madrisa",
        lat: 46.93,
        lon: 9.86,
        elevation: 2602,
    },
];

/// Davos town center, used as the label for the combined aggregate
pub const DAVOS_CENTER: (f64, f64) = (46.80, 9.84);

/// Independent forecast models queried for every mountain
pub const WEATHER_MODELS: [ForecastModel; 4] = [
    ForecastModel {
        id: "ecmwf_ifs025",
        name: "ECMWF",
    },
    ForecastModel {
        id: "gfs_seamless",
        name: "GFS",
    },
    ForecastModel {
        id: "icon_seamless",
        name: "ICON",
    },
    ForecastModel {
        id: "gem_seamless",
        name: "GEM",
    },
];

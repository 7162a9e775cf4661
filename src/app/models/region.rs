//! Strategic region records: a named grouping of provinces sharing one
//! seasonal weather model.

use super::day_month::DayMonth;
use serde::{Deserialize, Serialize};

/// A strategic region: an id-tagged, named set of provinces with an ordered
/// sequence of weather periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategicRegion {
    /// Region id, unique across every file loaded in one session
    pub id: u32,

    /// Logical name of the region (e.g. "C_DAKOTA")
    pub name: String,

    /// Province ids belonging to the region, in file order.
    ///
    /// Duplicates are permitted (semantically redundant, never an error)
    /// and the loader does not sort or deduplicate.
    pub provinces: Vec<u32>,

    /// Weather periods in file order. Later overlapping periods are
    /// overrides/additions for the consumer to interpret; the loader never
    /// deduplicates or reorders them.
    pub weather: Vec<WeatherPeriod>,
}

/// One weather regime, active during a fractional date range of the year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherPeriod {
    /// Start and end dates of the period, inclusive. A start after the end
    /// is passed through unchanged; range semantics belong to the consumer.
    pub between: (DayMonth, DayMonth),

    /// Minimum and maximum temperature. No ordering is enforced between
    /// the two beyond both being finite.
    pub temperature: (f64, f64),

    /// Day and night temperature deltas
    pub temperature_day_night: (f64, f64),

    /// Weight for no weather phenomenon occurring
    pub no_phenomenon: f64,

    /// Weight for light rain
    pub rain_light: f64,

    /// Weight for heavy rain
    pub rain_heavy: f64,

    /// Weight for snow
    pub snow: f64,

    /// Weight for a blizzard
    pub blizzard: f64,

    /// Weight for arctic water
    pub arctic_water: f64,

    /// Weight for mud
    pub mud: f64,

    /// Weight for a sandstorm
    pub sandstorm: f64,

    /// Minimum snow level always present during the period
    pub min_snow_level: f64,
}

impl WeatherPeriod {
    /// Sum of the eight phenomenon weights.
    ///
    /// These are weighted likelihoods, not strict probabilities: observed
    /// data sums to well over 1.0 and that is not an error.
    pub fn phenomenon_sum(&self) -> f64 {
        self.no_phenomenon
            + self.rain_light
            + self.rain_heavy
            + self.snow
            + self.blizzard
            + self.arctic_water
            + self.mud
            + self.sandstorm
    }
}

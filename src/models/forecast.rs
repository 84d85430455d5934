//! Forecast models: current conditions plus the daily outlook

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the daily forecast table
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DailyForecast {
    /// Calendar date of this forecast day
    pub date: NaiveDate,
    /// Daily maximum temperature in Celsius
    pub max_temp_c: f64,
    /// Daily minimum temperature in Celsius
    pub min_temp_c: f64,
}

/// Result of one successful weather lookup
///
/// Constructed fresh from each provider response; never cached across
/// lookups. `daily` is empty when the provider omitted the daily section.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastReport {
    /// Current temperature in Celsius
    pub current_temperature_c: f64,
    /// Current wind speed in km/h
    pub current_wind_speed_kph: f64,
    /// Daily forecast rows in chronological order
    pub daily: Vec<DailyForecast>,
}

impl ForecastReport {
    /// Format the current conditions line
    #[must_use]
    pub fn format_current(&self) -> String {
        format!(
            "Temperature: {}\u{00b0}C | Wind Speed: {} km/h",
            self.current_temperature_c, self.current_wind_speed_kph
        )
    }

    /// Whether the provider returned a daily forecast section
    #[must_use]
    pub fn has_daily(&self) -> bool {
        !self.daily.is_empty()
    }
}

impl DailyForecast {
    /// Format one table row as "date  max  min"
    #[must_use]
    pub fn format_row(&self) -> String {
        format!(
            "{}  {:>8.1}  {:>8.1}",
            self.date, self.max_temp_c, self.min_temp_c
        )
    }
}

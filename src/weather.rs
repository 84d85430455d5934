//! Weather client for OpenMeteo integration
//!
//! Issues one forecast request per lookup and parses the response into a
//! [`ForecastReport`]. OpenMeteo needs no API key. Transport faults, non-2xx
//! statuses and malformed bodies are all converted into errors at this
//! boundary; nothing here panics the interaction loop.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use crate::Result;
use crate::config::WeatherConfig;
use crate::error::TripMateError;
use crate::models::ForecastReport;

/// Number of forecast days requested from the provider
pub const FORECAST_DAYS: u32 = 7;

/// Weather API client for OpenMeteo
#[derive(Debug, Clone)]
pub struct WeatherClient {
    /// HTTP client
    client: Client,
    /// Base URL of the forecast API (overridable for tests)
    base_url: String,
}

impl WeatherClient {
    /// Create a new weather client
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("tripmate/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TripMateError::transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the forecast request URL for a coordinate pair
    #[must_use]
    pub fn forecast_url(&self, lat: f64, lon: f64) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&current_weather=true&daily=temperature_2m_max,temperature_2m_min,weathercode&forecast_days={}&timezone=auto",
            self.base_url, lat, lon, FORECAST_DAYS
        )
    }

    /// Get current conditions and the daily forecast for a coordinate pair
    ///
    /// Exactly one request per invocation: no retry and no caching across
    /// calls. A response without a current-weather section is an error; a
    /// response without a daily section just yields an empty forecast table.
    #[instrument(skip(self))]
    pub async fn fetch_forecast(&self, lat: f64, lon: f64) -> Result<ForecastReport> {
        let url = self.forecast_url(lat, lon);
        debug!("OpenMeteo request URL: {url}");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("OpenMeteo request failed with status {status}");
            return Err(TripMateError::transport(format!(
                "weather request failed with status: {} - {}",
                status,
                status.canonical_reason().unwrap_or("Unknown error")
            )));
        }

        let body: openmeteo::ForecastResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse OpenMeteo response: {e}");
            TripMateError::transport(format!("invalid weather response body: {e}"))
        })?;

        let report = openmeteo::into_report(body)?;
        info!(
            "Retrieved current weather and {} forecast days for {:.4}, {:.4}",
            report.daily.len(),
            lat,
            lon
        );

        Ok(report)
    }
}

/// `OpenMeteo` API response structures and conversion utilities
mod openmeteo {
    use chrono::NaiveDate;
    use serde::Deserialize;

    use crate::Result;
    use crate::error::TripMateError;
    use crate::models::{DailyForecast, ForecastReport};

    /// Forecast response from `OpenMeteo`
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub current_weather: Option<CurrentWeather>,
        pub daily: Option<DailyData>,
    }

    /// Current conditions block from `OpenMeteo`
    #[derive(Debug, Deserialize)]
    pub struct CurrentWeather {
        pub temperature: f64,
        pub windspeed: f64,
    }

    /// Daily weather data from `OpenMeteo`; arrays are index-aligned
    #[derive(Debug, Deserialize)]
    pub struct DailyData {
        pub time: Vec<String>,
        #[serde(rename = "temperature_2m_max")]
        pub temperature_max: Vec<f64>,
        #[serde(rename = "temperature_2m_min")]
        pub temperature_min: Vec<f64>,
    }

    /// Convert a raw response into a report
    ///
    /// The current-weather section is required; the daily section is not.
    pub fn into_report(response: ForecastResponse) -> Result<ForecastReport> {
        let Some(current) = response.current_weather else {
            return Err(TripMateError::WeatherDataMissing);
        };

        let daily = response.daily.map(parse_daily).unwrap_or_default();

        Ok(ForecastReport {
            current_temperature_c: current.temperature,
            current_wind_speed_kph: current.windspeed,
            daily,
        })
    }

    fn parse_daily(daily: DailyData) -> Vec<DailyForecast> {
        let days = daily
            .time
            .len()
            .min(daily.temperature_max.len())
            .min(daily.temperature_min.len());

        (0..days)
            .filter_map(|i| {
                let date = NaiveDate::parse_from_str(&daily.time[i], "%Y-%m-%d").ok()?;
                Some(DailyForecast {
                    date,
                    max_temp_c: daily.temperature_max[i],
                    min_temp_c: daily.temperature_min[i],
                })
            })
            .collect()
    }

}

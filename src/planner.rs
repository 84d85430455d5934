//! Lookup workflow orchestration
//!
//! Ties the registry, weather client and attraction sampler together:
//! resolve the city, fetch its forecast, draw the attraction sample, then
//! record the lookup in the session. Any failure leaves the session exactly
//! as it was, so the next interaction starts clean.

use tracing::{info, instrument};

use crate::Result;
use crate::attractions;
use crate::config::TripMateConfig;
use crate::error::TripMateError;
use crate::models::ForecastReport;
use crate::registry::CityRegistry;
use crate::session::SessionState;
use crate::weather::WeatherClient;

/// Everything shown for one successful city lookup
#[derive(Debug, Clone)]
pub struct CitySuggestions {
    /// Title-cased display name of the resolved city
    pub city: String,
    /// Current conditions and daily outlook
    pub forecast: ForecastReport,
    /// Random attraction sample for this lookup
    pub attractions: Vec<String>,
}

/// Travel suggestion service
#[derive(Debug, Clone)]
pub struct TravelPlanner {
    registry: CityRegistry,
    weather: WeatherClient,
}

impl TravelPlanner {
    /// Create a planner from configuration
    pub fn new(config: &TripMateConfig) -> Result<Self> {
        Ok(Self {
            registry: CityRegistry::new(),
            weather: WeatherClient::new(&config.weather)?,
        })
    }

    /// The city registry backing this planner
    #[must_use]
    pub fn registry(&self) -> &CityRegistry {
        &self.registry
    }

    /// Run one lookup: resolve, fetch weather, sample attractions
    ///
    /// Blank input is rejected before resolution, and resolution failures
    /// return before any network call is made. The session is only touched
    /// after the whole chain succeeded.
    #[instrument(skip(self, session))]
    pub async fn suggestions(
        &self,
        raw_input: &str,
        session: &mut SessionState,
    ) -> Result<CitySuggestions> {
        if raw_input.trim().is_empty() {
            return Err(TripMateError::EmptyInput);
        }

        let entry = self.registry.resolve(raw_input)?;
        info!(
            "Resolved '{}' to coordinates {}",
            raw_input.trim(),
            entry.format_coordinates()
        );

        let forecast = self
            .weather
            .fetch_forecast(entry.latitude, entry.longitude)
            .await?;

        let attractions = attractions::sample(&entry.key, &self.registry);
        let city = CityRegistry::display_name(raw_input);

        session.record_lookup(city.clone(), attractions.clone());

        Ok(CitySuggestions {
            city,
            forecast,
            attractions,
        })
    }
}

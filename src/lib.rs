//! `TripMate` - interactive city travel assistant
//!
//! This library provides the core functionality for city lookup, weather
//! retrieval, attraction sampling and session-scoped favorites.

pub mod attractions;
pub mod config;
pub mod error;
pub mod models;
pub mod planner;
pub mod registry;
pub mod repl;
pub mod session;
pub mod weather;

// Re-export core types for public API
pub use config::TripMateConfig;
pub use error::TripMateError;
pub use models::{CityEntry, DailyForecast, FavoriteEntry, ForecastReport};
pub use planner::{CitySuggestions, TravelPlanner};
pub use registry::CityRegistry;
pub use session::{FavoritesStore, SessionState};
pub use weather::WeatherClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripMateError>;

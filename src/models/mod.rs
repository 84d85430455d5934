//! Data models for the `TripMate` application
//!
//! This module contains the core domain models organized by concern:
//! - City: supported cities with coordinates and attraction pools
//! - Forecast: current conditions and the 7-day outlook
//! - Favorite: saved (city, attraction) pairs

pub mod city;
pub mod favorite;
pub mod forecast;

// Re-export all public types for convenient access
pub use city::CityEntry;
pub use favorite::FavoriteEntry;
pub use forecast::{DailyForecast, ForecastReport};

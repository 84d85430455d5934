//! City model for supported destinations

use serde::{Deserialize, Serialize};

/// One supported city with its coordinates and candidate attractions
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CityEntry {
    /// Normalized (lowercased, trimmed) city key, unique within the registry
    pub key: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Fixed candidate attraction pool, in registry order
    pub attractions: Vec<String>,
}

impl CityEntry {
    /// Create a new city entry
    #[must_use]
    pub fn new(key: &str, latitude: f64, longitude: f64, attractions: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            latitude,
            longitude,
            attractions: attractions.iter().map(ToString::to_string).collect(),
        }
    }

    /// Format city position as a coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

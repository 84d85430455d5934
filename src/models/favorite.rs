//! Favorite model for saved attractions

use serde::{Deserialize, Serialize};

/// One saved (city, attraction) pair
///
/// Duplicates are permitted; entries live only for the session.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FavoriteEntry {
    /// Human-readable city name (title case)
    pub city: String,
    /// Attraction name as shown in the lookup that saved it
    pub attraction: String,
}

impl FavoriteEntry {
    /// Create a new favorite entry
    #[must_use]
    pub fn new(city: impl Into<String>, attraction: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            attraction: attraction.into(),
        }
    }

    /// Format the entry the way the favorites view lists it
    #[must_use]
    pub fn format_entry(&self) -> String {
        format!("{} - {}", self.city, self.attraction)
    }
}

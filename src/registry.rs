//! Static city registry
//!
//! Read-only lookup table mapping normalized city keys to coordinates and
//! attraction pools. Resolution is exact-match only: no fuzzy matching, no
//! aliases, no partial matches.

use crate::Result;
use crate::error::TripMateError;
use crate::models::CityEntry;

/// Registry of supported cities, in presentation order
#[derive(Debug, Clone)]
pub struct CityRegistry {
    cities: Vec<CityEntry>,
}

impl Default for CityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CityRegistry {
    /// Build the registry with the built-in city table
    #[must_use]
    pub fn new() -> Self {
        let cities = vec![
            CityEntry::new(
                "beijing",
                39.9042,
                116.4074,
                &["Forbidden City", "Great Wall", "Summer Palace", "Houhai Lake"],
            ),
            CityEntry::new(
                "tokyo",
                35.6895,
                139.6917,
                &["Shibuya", "Senso-ji Temple", "Tokyo Tower", "Ueno Park"],
            ),
            CityEntry::new(
                "paris",
                48.8566,
                2.3522,
                &[
                    "Eiffel Tower",
                    "Louvre Museum",
                    "Seine River",
                    "Notre-Dame Cathedral",
                ],
            ),
            CityEntry::new(
                "new york",
                40.7128,
                -74.0060,
                &[
                    "Central Park",
                    "Times Square",
                    "Statue of Liberty",
                    "Metropolitan Museum",
                ],
            ),
            CityEntry::new(
                "london",
                51.5074,
                -0.1278,
                &["Big Ben", "London Eye", "Buckingham Palace", "Thames River"],
            ),
        ];

        Self { cities }
    }

    /// Normalize raw user input into a registry key
    #[must_use]
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// Title-case a raw city input for display ("new york" -> "New York")
    #[must_use]
    pub fn display_name(raw: &str) -> String {
        Self::normalize(raw)
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Resolve raw input to a city entry via exact-match lookup
    pub fn resolve(&self, raw: &str) -> Result<&CityEntry> {
        let key = Self::normalize(raw);
        self.cities
            .iter()
            .find(|city| city.key == key)
            .ok_or_else(|| TripMateError::UnsupportedCity {
                input: raw.trim().to_string(),
                supported: self.supported_cities(),
            })
    }

    /// Attraction pool for a normalized key, if the city is known
    #[must_use]
    pub fn attractions(&self, key: &str) -> Option<&[String]> {
        self.cities
            .iter()
            .find(|city| city.key == key)
            .map(|city| city.attractions.as_slice())
    }

    /// Display names of all supported cities, in registry order
    #[must_use]
    pub fn supported_cities(&self) -> Vec<String> {
        self.cities
            .iter()
            .map(|city| Self::display_name(&city.key))
            .collect()
    }
}

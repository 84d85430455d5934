//! Error types and handling for the `TripMate` application

use thiserror::Error;

/// Main error type for the `TripMate` application
#[derive(Error, Debug)]
pub enum TripMateError {
    /// The user submitted a blank city name
    #[error("no city name provided")]
    EmptyInput,

    /// The requested city is not in the registry
    #[error("unsupported city: '{input}'")]
    UnsupportedCity {
        input: String,
        supported: Vec<String>,
    },

    /// The provider responded without a current-weather section
    #[error("weather provider response is missing the current weather section")]
    WeatherDataMissing,

    /// Network, HTTP status or body-parsing faults at the client boundary
    #[error("transport error: {message}")]
    Transport { message: String },

    /// An index into the favorites list (or attraction sample) is out of bounds
    #[error("index {index} is out of bounds for a list of {len} entries")]
    InvalidIndex { index: usize, len: usize },

    /// Configuration-related errors
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl TripMateError {
    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripMateError::EmptyInput => "Please enter a city name!".to_string(),
            TripMateError::UnsupportedCity { supported, .. } => {
                format!("Currently supported cities: {}", supported.join(" / "))
            }
            TripMateError::WeatherDataMissing => {
                "Failed to retrieve weather data. Please try again later.".to_string()
            }
            TripMateError::Transport { .. } => {
                "Unable to reach the weather service. Please check your internet connection."
                    .to_string()
            }
            TripMateError::InvalidIndex { index, .. } => {
                format!("Nothing at position {} - pick a number from the list.", index + 1)
            }
            TripMateError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for TripMateError {
    fn from(source: reqwest::Error) -> Self {
        Self::Transport {
            message: source.to_string(),
        }
    }
}

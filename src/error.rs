//! Error types shared across the weather engine
//!
//! Configuration problems and bad caller input are reported through
//! [`WeatherError`]. Every failing operation leaves the weather state as it was.

use crate::persistence::PersistenceError;

/// Result type for weather operations
pub type WeatherResult<T> = Result<T, WeatherError>;

/// Errors surfaced by weather operations
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// Unknown catalog id or malformed configuration/catalog data
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Caller supplied an out-of-range or unrecognised value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl WeatherError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, WeatherError::Configuration(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, WeatherError::InvalidInput(_))
    }
}

/// Create an unknown climate error
pub fn unknown_climate(id: &str) -> WeatherError {
    WeatherError::Configuration(format!("unknown climate '{}'", id))
}

/// Create an unknown season error
pub fn unknown_season(id: &str) -> WeatherError {
    WeatherError::Configuration(format!("unknown season '{}'", id))
}

/// Create an unknown weather type error
pub fn unknown_weather_type(id: &str) -> WeatherError {
    WeatherError::Configuration(format!("unknown weather type '{}'", id))
}

/// Create an invalid input error for a value the named kind does not recognise
pub fn unrecognised(kind: &str, value: impl std::fmt::Display) -> WeatherError {
    WeatherError::InvalidInput(format!("unknown {} '{}'", kind, value))
}

/// Create a configuration error from a TOML parse failure
pub fn malformed_toml(what: &str, error: toml::de::Error) -> WeatherError {
    WeatherError::Configuration(format!("malformed {}: {}", what, error))
}

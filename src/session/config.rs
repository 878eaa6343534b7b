//! Session configuration loaded from TOML

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::session::{DEFAULT_START_HOUR, DEFAULT_UPDATE_INTERVAL_HOURS};
use crate::error::{malformed_toml, WeatherError, WeatherResult};
use crate::time::TimeSlot;
use crate::weather::{Catalog, Ruleset, Terrain, WeatherModel, WeatherState};

/// Starting dimensions used when nothing has been persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InitialState {
    pub temperature: i32,
    pub wind: i32,
    pub precipitation: i32,
    pub humidity: i32,
    pub variability: i32,
}

impl Default for InitialState {
    fn default() -> Self {
        let state = WeatherState::default();
        Self {
            temperature: state.temperature(),
            wind: state.wind(),
            precipitation: state.precipitation(),
            humidity: state.humidity(),
            variability: state.variability(),
        }
    }
}

impl InitialState {
    pub fn to_state(&self) -> WeatherState {
        WeatherState::new(
            self.temperature,
            self.wind,
            self.precipitation,
            self.humidity,
            self.variability,
        )
    }
}

/// Weather session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeatherConfig {
    /// In-world hours between automatic refreshes
    pub update_interval_hours: f64,
    pub climate: String,
    pub season: String,
    pub model: WeatherModel,
    pub terrain: Terrain,
    /// Overrides the climate's own ruleset when set
    pub ruleset: Option<Ruleset>,
    /// Seed for the session generator; entropy when absent
    pub seed: Option<u64>,
    /// Fixed time-of-day slot applied after every refresh
    pub time_of_day: Option<TimeSlot>,
    /// Follow the in-world clock instead of a fixed slot
    pub auto_time_of_day: bool,
    pub start_hour: u8,
    pub initial: InitialState,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            update_interval_hours: DEFAULT_UPDATE_INTERVAL_HOURS,
            climate: "temperate".to_string(),
            season: "spring".to_string(),
            model: WeatherModel::default(),
            terrain: Terrain::default(),
            ruleset: None,
            seed: None,
            time_of_day: None,
            auto_time_of_day: false,
            start_hour: DEFAULT_START_HOUR,
            initial: InitialState::default(),
        }
    }
}

impl WeatherConfig {
    pub fn from_toml_str(source: &str) -> WeatherResult<Self> {
        toml::from_str(source).map_err(|e| malformed_toml("weather config", e))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> WeatherResult<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            WeatherError::Configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&source)?;
        log::info!("[WeatherConfig] Loaded {}", path.display());
        Ok(config)
    }

    /// Check the values that serde cannot, against the catalog in use
    pub fn validate(&self, catalog: &Catalog) -> WeatherResult<()> {
        if !self.update_interval_hours.is_finite() || self.update_interval_hours <= 0.0 {
            return Err(WeatherError::Configuration(format!(
                "update_interval_hours must be positive, got {}",
                self.update_interval_hours
            )));
        }
        if self.start_hour > 23 {
            return Err(WeatherError::Configuration(format!(
                "start_hour must be 0-23, got {}",
                self.start_hour
            )));
        }
        catalog.climate(&self.climate)?;
        catalog.season(&self.season)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = WeatherConfig::from_toml_str("").unwrap();
        assert_eq!(config, WeatherConfig::default());
        assert_eq!(config.update_interval_hours, 4.0);
        assert_eq!(config.initial.to_state(), WeatherState::default());
    }

    #[test]
    fn test_full_config() {
        let config = WeatherConfig::from_toml_str(
            r#"
            update_interval_hours = 6.0
            climate = "scorched_wastes"
            season = "dry_season"
            model = "hex"
            terrain = "glass"
            ruleset = "extreme_heat"
            seed = 7
            time_of_day = "late_night"
            start_hour = 22

            [initial]
            temperature = 9
            variability = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.model, WeatherModel::Hex);
        assert_eq!(config.terrain, Terrain::Glass);
        assert_eq!(config.ruleset, Some(Ruleset::ExtremeHeat));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.time_of_day, Some(TimeSlot::LateNight));
        assert_eq!(config.initial.to_state(), WeatherState::new(9, 0, 0, 0, 3));
        config.validate(&Catalog::builtin()).unwrap();
    }

    #[test]
    fn test_unknown_field_is_configuration_error() {
        let err = WeatherConfig::from_toml_str("climat = \"arctic\"").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let catalog = Catalog::builtin();

        let config = WeatherConfig {
            update_interval_hours: 0.0,
            ..WeatherConfig::default()
        };
        assert!(config.validate(&catalog).is_err());

        let config = WeatherConfig {
            climate: "lunar".to_string(),
            ..WeatherConfig::default()
        };
        assert!(config.validate(&catalog).unwrap_err().is_configuration());

        let config = WeatherConfig {
            start_hour: 24,
            ..WeatherConfig::default()
        };
        assert!(config.validate(&catalog).is_err());
    }
}

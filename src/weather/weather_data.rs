//! Weather state and the selectors that steer derivation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::dimensions::{MAX, SIGNED_MIN, VARIABILITY_MIN};
use crate::error::{unrecognised, WeatherError};
use crate::weather::hex_grid::HexCoord;

/// One scalar weather axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Temperature,
    Wind,
    Precipitation,
    Humidity,
    Variability,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Temperature,
        Dimension::Wind,
        Dimension::Precipitation,
        Dimension::Humidity,
        Dimension::Variability,
    ];

    /// Dimensions moved by the drift engine
    pub const DRIFTING: [Dimension; 4] = [
        Dimension::Temperature,
        Dimension::Wind,
        Dimension::Precipitation,
        Dimension::Humidity,
    ];

    /// Inclusive bounds for this dimension
    pub fn range(&self) -> (i32, i32) {
        match self {
            Dimension::Variability => (VARIABILITY_MIN, MAX),
            _ => (SIGNED_MIN, MAX),
        }
    }

    pub fn clamp(&self, value: i32) -> i32 {
        let (min, max) = self.range();
        value.clamp(min, max)
    }

    pub fn contains(&self, value: i32) -> bool {
        let (min, max) = self.range();
        (min..=max).contains(&value)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Temperature => "temperature",
            Dimension::Wind => "wind",
            Dimension::Precipitation => "precipitation",
            Dimension::Humidity => "humidity",
            Dimension::Variability => "variability",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dimension {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "temperature" | "temp" => Ok(Dimension::Temperature),
            "wind" => Ok(Dimension::Wind),
            "precipitation" | "precip" => Ok(Dimension::Precipitation),
            "humidity" => Ok(Dimension::Humidity),
            "variability" => Ok(Dimension::Variability),
            _ => Err(unrecognised("dimension", s)),
        }
    }
}

/// Current atmospheric state
///
/// Every setter clamps into the dimension's range, so a value read back is
/// always in bounds. Deserialising clamps as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawWeatherState")]
pub struct WeatherState {
    temperature: i32,
    wind: i32,
    precipitation: i32,
    humidity: i32,
    variability: i32,
    hex_position: Option<HexCoord>,
    weather_type_id: Option<String>,
}

impl WeatherState {
    /// Create a state, clamping each value into range
    pub fn new(temperature: i32, wind: i32, precipitation: i32, humidity: i32, variability: i32) -> Self {
        Self {
            temperature: Dimension::Temperature.clamp(temperature),
            wind: Dimension::Wind.clamp(wind),
            precipitation: Dimension::Precipitation.clamp(precipitation),
            humidity: Dimension::Humidity.clamp(humidity),
            variability: Dimension::Variability.clamp(variability),
            hex_position: None,
            weather_type_id: None,
        }
    }

    pub fn temperature(&self) -> i32 {
        self.temperature
    }

    pub fn wind(&self) -> i32 {
        self.wind
    }

    pub fn precipitation(&self) -> i32 {
        self.precipitation
    }

    pub fn humidity(&self) -> i32 {
        self.humidity
    }

    pub fn variability(&self) -> i32 {
        self.variability
    }

    pub fn get(&self, dimension: Dimension) -> i32 {
        match dimension {
            Dimension::Temperature => self.temperature,
            Dimension::Wind => self.wind,
            Dimension::Precipitation => self.precipitation,
            Dimension::Humidity => self.humidity,
            Dimension::Variability => self.variability,
        }
    }

    /// Set a dimension, clamping into its range
    pub fn set(&mut self, dimension: Dimension, value: i32) {
        let value = dimension.clamp(value);
        match dimension {
            Dimension::Temperature => self.temperature = value,
            Dimension::Wind => self.wind = value,
            Dimension::Precipitation => self.precipitation = value,
            Dimension::Humidity => self.humidity = value,
            Dimension::Variability => self.variability = value,
        }
    }

    /// Builder form of [`WeatherState::set`]
    pub fn with(mut self, dimension: Dimension, value: i32) -> Self {
        self.set(dimension, value);
        self
    }

    pub fn hex_position(&self) -> Option<HexCoord> {
        self.hex_position
    }

    pub fn weather_type_id(&self) -> Option<&str> {
        self.weather_type_id.as_deref()
    }

    /// Place the state on a hex cell of the given weather type
    pub fn set_hex(&mut self, position: HexCoord, weather_type_id: impl Into<String>) {
        self.hex_position = Some(position);
        self.weather_type_id = Some(weather_type_id.into());
    }

    pub fn clear_hex(&mut self) {
        self.hex_position = None;
        self.weather_type_id = None;
    }

    /// Re-clamp every dimension, e.g. after deserialising foreign data
    pub fn clamped(mut self) -> Self {
        for dimension in Dimension::ALL {
            self.set(dimension, self.get(dimension));
        }
        self
    }

    pub fn is_within_bounds(&self) -> bool {
        Dimension::ALL.iter().all(|d| d.contains(self.get(*d)))
    }
}

/// Unchecked wire form of [`WeatherState`]
#[derive(Deserialize)]
struct RawWeatherState {
    temperature: i32,
    wind: i32,
    precipitation: i32,
    humidity: i32,
    variability: i32,
    #[serde(default)]
    hex_position: Option<HexCoord>,
    #[serde(default)]
    weather_type_id: Option<String>,
}

impl From<RawWeatherState> for WeatherState {
    fn from(raw: RawWeatherState) -> Self {
        let mut state = WeatherState::new(raw.temperature, raw.wind, raw.precipitation, raw.humidity, raw.variability);
        if let (Some(position), Some(weather_type_id)) = (raw.hex_position, raw.weather_type_id) {
            state.set_hex(position, weather_type_id);
        }
        state
    }
}

impl Default for WeatherState {
    fn default() -> Self {
        Self::new(0, 0, 0, 0, 5)
    }
}

impl fmt::Display for WeatherState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "temperature {}, wind {}, precipitation {}, humidity {}, variability {}",
            self.temperature, self.wind, self.precipitation, self.humidity, self.variability
        )?;
        if let Some(position) = self.hex_position {
            write!(f, ", hex {}", position)?;
        }
        Ok(())
    }
}

/// Selects the threshold and description tables used for derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ruleset {
    #[default]
    Standard,
    ExtremeHeat,
}

impl Ruleset {
    pub fn name(&self) -> &'static str {
        match self {
            Ruleset::Standard => "standard",
            Ruleset::ExtremeHeat => "extreme_heat",
        }
    }
}

impl FromStr for Ruleset {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "standard" => Ok(Ruleset::Standard),
            "extreme_heat" | "extremeheat" => Ok(Ruleset::ExtremeHeat),
            _ => Err(unrecognised("ruleset", s)),
        }
    }
}

/// Ground the party is crossing; only matters for terrain hazards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    #[default]
    Open,
    /// Obsidian plains: wind turns shards into projectiles
    Glass,
    /// Silt basin: wind raises blinding silt
    Silt,
}

impl Terrain {
    pub fn name(&self) -> &'static str {
        match self {
            Terrain::Open => "open",
            Terrain::Glass => "glass",
            Terrain::Silt => "silt",
        }
    }
}

impl FromStr for Terrain {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Terrain::Open),
            "glass" => Ok(Terrain::Glass),
            "silt" => Ok(Terrain::Silt),
            _ => Err(unrecognised("terrain", s)),
        }
    }
}

/// Which generation model advances the state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherModel {
    #[default]
    Dimensional,
    Hex,
}

impl WeatherModel {
    pub fn name(&self) -> &'static str {
        match self {
            WeatherModel::Dimensional => "dimensional",
            WeatherModel::Hex => "hex",
        }
    }
}

impl fmt::Display for WeatherModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WeatherModel {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dimensional" => Ok(WeatherModel::Dimensional),
            "hex" => Ok(WeatherModel::Hex),
            _ => Err(unrecognised("weather model", s)),
        }
    }
}

//! Read-only catalogs: presets, weather types, hex layout and phrase tables
//!
//! A [`Catalog`] is assembled once (either the built-in one or from TOML) and
//! shared behind an `Arc`; nothing mutates it afterwards.

use std::collections::BTreeMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::constants::dimensions::TABLE_LEN;
use crate::error::{
    malformed_toml, unknown_climate, unknown_season, unknown_weather_type, WeatherError, WeatherResult,
};
use crate::weather::builtin;
use crate::weather::hex_grid::{HexCoord, HexGrid};
use crate::weather::weather_data::{Dimension, Ruleset, WeatherState};

lazy_static! {
    static ref BUILTIN_CATALOG: Arc<Catalog> = Arc::new(Catalog::assemble(builtin::catalog_data()));
}

/// Named climate; its values are pull targets for the drift engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimatePreset {
    pub name: String,
    pub temperature: i32,
    pub wind: i32,
    pub precipitation: i32,
    pub humidity: i32,
    pub variability: i32,
    /// Ruleset implied by this climate unless the session overrides it
    #[serde(default)]
    pub ruleset: Ruleset,
}

/// Named season; its values are pull targets for the drift engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonPreset {
    pub name: String,
    pub temperature: i32,
    pub wind: i32,
    pub precipitation: i32,
    pub humidity: i32,
    pub variability: i32,
}

macro_rules! preset_values {
    ($preset:ty) => {
        impl $preset {
            pub fn value(&self, dimension: Dimension) -> i32 {
                match dimension {
                    Dimension::Temperature => self.temperature,
                    Dimension::Wind => self.wind,
                    Dimension::Precipitation => self.precipitation,
                    Dimension::Humidity => self.humidity,
                    Dimension::Variability => self.variability,
                }
            }

            fn check_ranges(&self, id: &str) -> WeatherResult<()> {
                for dimension in Dimension::ALL {
                    let value = self.value(dimension);
                    if !dimension.contains(value) {
                        return Err(WeatherError::Configuration(format!(
                            "preset '{}' has {} {} outside {:?}",
                            id,
                            dimension,
                            value,
                            dimension.range()
                        )));
                    }
                }
                Ok(())
            }
        }
    };
}

preset_values!(ClimatePreset);
preset_values!(SeasonPreset);

/// Absolute replacements a weather type applies on arrival
///
/// Precipitation and variability are never overridden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeatherOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<i32>,
}

impl WeatherOverrides {
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, i32)> {
        [
            (Dimension::Temperature, self.temperature),
            (Dimension::Wind, self.wind),
            (Dimension::Humidity, self.humidity),
        ]
        .into_iter()
        .filter_map(|(dimension, value)| value.map(|v| (dimension, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Replace only the overridden fields
    pub fn apply_to(&self, state: &mut WeatherState) {
        for (dimension, value) in self.iter() {
            state.set(dimension, value);
        }
    }
}

/// A discrete weather condition tied to hex cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherTypeDef {
    pub id: String,
    pub name: String,
    pub description: String,
    pub effect: String,
    #[serde(default)]
    pub overrides: WeatherOverrides,
}

/// Phrases for the values -10..=10 of one dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DescriptionTable(Vec<String>);

impl DescriptionTable {
    pub fn new(phrases: Vec<String>) -> Self {
        Self(phrases)
    }

    pub fn from_static(phrases: &[&str]) -> Self {
        Self(phrases.iter().map(|p| p.to_string()).collect())
    }

    /// Phrase for a value; out-of-range values use the nearest end
    pub fn phrase(&self, value: i32) -> &str {
        let index = Dimension::Temperature.clamp(value) - Dimension::Temperature.range().0;
        self.0
            .get(index as usize)
            .or_else(|| self.0.last())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One table per described dimension, plus the extreme-heat temperature table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptionTables {
    pub temperature: DescriptionTable,
    pub extreme_heat_temperature: DescriptionTable,
    pub wind: DescriptionTable,
    pub precipitation: DescriptionTable,
    pub humidity: DescriptionTable,
}

impl DescriptionTables {
    pub fn temperature_for(&self, ruleset: Ruleset) -> &DescriptionTable {
        match ruleset {
            Ruleset::Standard => &self.temperature,
            Ruleset::ExtremeHeat => &self.extreme_heat_temperature,
        }
    }

    fn validate(&self) -> WeatherResult<()> {
        let tables = [
            ("temperature", &self.temperature),
            ("extreme_heat_temperature", &self.extreme_heat_temperature),
            ("wind", &self.wind),
            ("precipitation", &self.precipitation),
            ("humidity", &self.humidity),
        ];
        for (name, table) in tables {
            if table.len() != TABLE_LEN {
                return Err(WeatherError::Configuration(format!(
                    "description table '{}' has {} entries, expected {}",
                    name,
                    table.len(),
                    TABLE_LEN
                )));
            }
        }
        Ok(())
    }
}

/// Serialized hex cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HexCellData {
    pub q: i32,
    pub r: i32,
    pub weather_type: String,
}

/// Serialized hex layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HexGridData {
    #[serde(default)]
    pub start: HexCoord,
    pub cells: Vec<HexCellData>,
}

/// Catalog as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    pub default_weather_type: String,
    pub climates: BTreeMap<String, ClimatePreset>,
    pub seasons: BTreeMap<String, SeasonPreset>,
    pub weather_types: Vec<WeatherTypeDef>,
    pub hex_grid: HexGridData,
    pub descriptions: DescriptionTables,
}

impl CatalogData {
    fn validate(&self) -> WeatherResult<()> {
        for (id, climate) in &self.climates {
            climate.check_ranges(id)?;
        }
        for (id, season) in &self.seasons {
            season.check_ranges(id)?;
        }

        let mut seen = FxHashSet::default();
        for def in &self.weather_types {
            if !seen.insert(def.id.as_str()) {
                return Err(WeatherError::Configuration(format!(
                    "weather type '{}' defined twice",
                    def.id
                )));
            }
            for (dimension, value) in def.overrides.iter() {
                if !dimension.contains(value) {
                    return Err(WeatherError::Configuration(format!(
                        "weather type '{}' overrides {} with out-of-range {}",
                        def.id, dimension, value
                    )));
                }
            }
        }
        if !seen.contains(self.default_weather_type.as_str()) {
            return Err(unknown_weather_type(&self.default_weather_type));
        }

        for cell in &self.hex_grid.cells {
            if !seen.contains(cell.weather_type.as_str()) {
                return Err(WeatherError::Configuration(format!(
                    "hex cell ({}, {}) references unknown weather type '{}'",
                    cell.q, cell.r, cell.weather_type
                )));
            }
        }
        let start = self.hex_grid.start;
        if !self.hex_grid.cells.iter().any(|c| c.q == start.q && c.r == start.r) {
            return Err(WeatherError::Configuration(format!(
                "hex start cell {} is not populated",
                start
            )));
        }

        self.descriptions.validate()
    }
}

/// Immutable lookup structures built from [`CatalogData`]
#[derive(Debug, Clone)]
pub struct Catalog {
    climates: FxHashMap<String, ClimatePreset>,
    seasons: FxHashMap<String, SeasonPreset>,
    weather_types: FxHashMap<String, WeatherTypeDef>,
    hex_grid: HexGrid,
    descriptions: DescriptionTables,
    default_weather_type: String,
}

impl Catalog {
    /// Shared handle to the catalog bundled with the crate
    pub fn builtin() -> Arc<Catalog> {
        Arc::clone(&BUILTIN_CATALOG)
    }

    /// Validate and index catalog data
    pub fn from_data(data: CatalogData) -> WeatherResult<Catalog> {
        data.validate()?;
        Ok(Self::assemble(data))
    }

    pub fn from_toml_str(source: &str) -> WeatherResult<Catalog> {
        let data: CatalogData = toml::from_str(source).map_err(|e| malformed_toml("catalog", e))?;
        Self::from_data(data)
    }

    fn assemble(data: CatalogData) -> Catalog {
        let mut hex_grid = HexGrid::new(data.hex_grid.start);
        for cell in data.hex_grid.cells {
            hex_grid.insert(HexCoord::new(cell.q, cell.r), cell.weather_type);
        }

        Catalog {
            climates: data.climates.into_iter().collect(),
            seasons: data.seasons.into_iter().collect(),
            weather_types: data
                .weather_types
                .into_iter()
                .map(|def| (def.id.clone(), def))
                .collect(),
            hex_grid,
            descriptions: data.descriptions,
            default_weather_type: data.default_weather_type,
        }
    }

    pub fn climate(&self, id: &str) -> WeatherResult<&ClimatePreset> {
        self.climates.get(id).ok_or_else(|| unknown_climate(id))
    }

    pub fn season(&self, id: &str) -> WeatherResult<&SeasonPreset> {
        self.seasons.get(id).ok_or_else(|| unknown_season(id))
    }

    pub fn weather_type(&self, id: &str) -> Option<&WeatherTypeDef> {
        self.weather_types.get(id)
    }

    pub fn default_weather_type(&self) -> &str {
        &self.default_weather_type
    }

    pub fn hex_grid(&self) -> &HexGrid {
        &self.hex_grid
    }

    pub fn descriptions(&self) -> &DescriptionTables {
        &self.descriptions
    }

    pub fn climate_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.climates.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn season_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.seasons.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

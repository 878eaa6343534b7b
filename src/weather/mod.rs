/// Weather module - state, catalogs, the two update models and the
/// effect/description derivations

pub mod builtin;
pub mod catalog;
pub mod description;
pub mod drift;
pub mod effects;
pub mod hex_automaton;
pub mod hex_grid;
pub mod weather_data;

// Re-export commonly used types
pub use catalog::{
    Catalog, CatalogData, ClimatePreset, DescriptionTable, DescriptionTables, SeasonPreset,
    WeatherOverrides, WeatherTypeDef,
};
pub use description::{DescriptionComposer, PrecipitationKind};
pub use drift::{drift, DimensionalDriftEngine};
pub use effects::{calculate_effects, EffectRecord, Movement, TemperatureHazard, Visibility};
pub use hex_automaton::{HexWeatherAutomaton, StepOutcome};
pub use hex_grid::{Direction, HexCoord, HexGrid};
pub use weather_data::{Dimension, Ruleset, Terrain, WeatherModel, WeatherState};

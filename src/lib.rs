//! Procedural weather for tabletop campaigns
//!
//! Weather is a handful of bounded integer dimensions advanced either by a
//! continuous drift towards climate and season presets or by walking a sparse
//! hex map of named weather types. The state then feeds narrative text and
//! game-mechanical effects under a selectable ruleset.
//!
//! Pure computation lives in [`weather`] and [`time`]; [`session`] adds
//! scheduling, commands, persistence through [`persistence`] and change
//! notifications.

pub mod constants;
pub mod error;
pub mod persistence;
pub mod session;
pub mod time;
pub mod weather;

pub use error::{WeatherError, WeatherResult};
pub use persistence::{JsonFileStore, MemoryStore, PersistenceError, PersistenceResult, SettingsStore};
pub use session::{
    ChangeCause, HexLocation, WeatherChanged, WeatherCommand, WeatherConfig, WeatherListener, WeatherReport,
    WeatherSession,
};
pub use time::{apply_time_of_day, TimeOfDay, TimeSlot};
pub use weather::{
    calculate_effects, Catalog, DescriptionComposer, Dimension, DimensionalDriftEngine, Direction, EffectRecord,
    HexCoord, HexWeatherAutomaton, Ruleset, Terrain, WeatherModel, WeatherState,
};

//! Discrete model: the weather walks one cell at a time across a hex map
//!
//! Arriving on a cell adopts that cell's weather type, whose overrides
//! replace a subset of the state's dimensions outright.

use rand::Rng;

use crate::weather::catalog::Catalog;
use crate::weather::hex_grid::{Direction, HexCoord};
use crate::weather::weather_data::WeatherState;

/// Where a step ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved in the requested direction
    Direct(HexCoord),
    /// Requested cell was unmapped; moved via an alternate direction
    Diverted { to: HexCoord, via: Direction },
    /// No neighbour is populated
    Stayed(HexCoord),
}

impl StepOutcome {
    pub fn position(&self) -> HexCoord {
        match *self {
            StepOutcome::Direct(to) => to,
            StepOutcome::Diverted { to, .. } => to,
            StepOutcome::Stayed(at) => at,
        }
    }
}

/// Hex walker bound to a catalog's grid and weather types
pub struct HexWeatherAutomaton<'a> {
    catalog: &'a Catalog,
}

impl<'a> HexWeatherAutomaton<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Current cell of a state, or the grid's start cell if it has none yet
    pub fn position_of(&self, state: &WeatherState) -> HexCoord {
        state
            .hex_position()
            .unwrap_or_else(|| self.catalog.hex_grid().start())
    }

    /// Decide the destination of one step without touching any state
    pub fn plan(&self, from: HexCoord, direction: Direction) -> StepOutcome {
        match self.catalog.hex_grid().resolve_step(from, direction) {
            Some((to, taken)) if taken == direction => StepOutcome::Direct(to),
            Some((to, via)) => StepOutcome::Diverted { to, via },
            None => StepOutcome::Stayed(from),
        }
    }

    /// Move one step and adopt the destination's weather type
    pub fn step(&self, state: &WeatherState, direction: Direction) -> WeatherState {
        let from = self.position_of(state);
        let outcome = self.plan(from, direction);
        match outcome {
            StepOutcome::Direct(_) => {}
            StepOutcome::Diverted { to, via } => {
                log::debug!("[HexWeatherAutomaton] Hex {} blocked {}; diverted {} to {}", from, direction, via, to)
            }
            StepOutcome::Stayed(at) => log::warn!("[HexWeatherAutomaton] Hex cell {} has no populated neighbours", at),
        }
        self.arrive(state, outcome.position())
    }

    /// Step in a uniformly drawn direction
    pub fn tick<R: Rng + ?Sized>(&self, state: &WeatherState, rng: &mut R) -> WeatherState {
        let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        self.step(state, direction)
    }

    /// Place the state on `position` and apply its weather type's overrides
    pub fn arrive(&self, state: &WeatherState, position: HexCoord) -> WeatherState {
        let grid = self.catalog.hex_grid();
        let type_id = grid.cell_type(position).unwrap_or_else(|| {
            log::warn!("[HexWeatherAutomaton] Hex cell {} is unmapped; using default weather type", position);
            self.catalog.default_weather_type()
        });

        let mut next = state.clone();
        match self.catalog.weather_type(type_id) {
            Some(def) => def.overrides.apply_to(&mut next),
            None => log::warn!("[HexWeatherAutomaton] Hex cell {} references unknown weather type '{}'", position, type_id),
        }
        next.set_hex(position, type_id);
        log::debug!("[HexWeatherAutomaton] Hex weather now '{}' at {}: {}", type_id, position, next);
        next
    }
}

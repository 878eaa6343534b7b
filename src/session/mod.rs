//! Host-facing weather session
//!
//! A [`WeatherSession`] owns the current [`WeatherState`] together with the
//! configuration, a seeded generator and a settings store. Models compute a
//! candidate state first; only when that succeeds is it persisted, swapped
//! in and announced to listeners, so a failing command leaves everything as
//! it was.

pub mod command;
pub mod config;
pub mod events;
pub mod report;

pub use command::WeatherCommand;
pub use config::{InitialState, WeatherConfig};
pub use events::{ChangeCause, WeatherChanged, WeatherListener};
pub use report::{HexLocation, WeatherReport};

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{WeatherError, WeatherResult};
use crate::persistence::{load_state, save_state, SettingsStore};
use crate::time::{baseline_temperature, with_time_of_day, TimeOfDay, TimeSlot};
use crate::weather::{
    calculate_effects, Catalog, DescriptionComposer, DimensionalDriftEngine, EffectRecord, HexWeatherAutomaton,
    Ruleset, WeatherModel, WeatherState,
};

pub struct WeatherSession {
    catalog: Arc<Catalog>,
    config: WeatherConfig,
    state: WeatherState,
    rng: StdRng,
    store: Box<dyn SettingsStore>,
    listeners: Vec<Box<dyn WeatherListener>>,
    elapsed_hours: f64,
    clock: TimeOfDay,
}

impl WeatherSession {
    /// Start a session on the built-in catalog
    pub fn new<S: SettingsStore + 'static>(config: WeatherConfig, store: S) -> WeatherResult<Self> {
        Self::with_catalog(Catalog::builtin(), config, store)
    }

    /// Start a session, restoring any state already in `store`
    pub fn with_catalog<S: SettingsStore + 'static>(
        catalog: Arc<Catalog>,
        config: WeatherConfig,
        store: S,
    ) -> WeatherResult<Self> {
        config.validate(&catalog)?;

        let state = load_state(&store, &config.initial.to_state())?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        log::info!(
            "[WeatherSession] Started in {} / {} with the {} model from {}",
            config.climate,
            config.season,
            config.model,
            store.store_name()
        );

        Ok(Self {
            catalog,
            clock: TimeOfDay::new(config.start_hour, 0),
            config,
            state,
            rng,
            store: Box::new(store),
            listeners: Vec::new(),
            elapsed_hours: 0.0,
        })
    }

    pub fn state(&self) -> &WeatherState {
        &self.state
    }

    pub fn config(&self) -> &WeatherConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &dyn SettingsStore {
        self.store.as_ref()
    }

    /// In-world clock
    pub fn clock(&self) -> TimeOfDay {
        self.clock
    }

    /// Hours accumulated towards the next scheduled refresh
    pub fn elapsed_hours(&self) -> f64 {
        self.elapsed_hours
    }

    /// Configured override, else the active climate's ruleset
    pub fn ruleset(&self) -> Ruleset {
        effective_ruleset(&self.catalog, &self.config)
    }

    /// Time slot whose temperature override is in force, if any
    pub fn active_time_slot(&self) -> Option<TimeSlot> {
        active_slot(&self.config, self.clock)
    }

    pub fn add_listener<L: WeatherListener + 'static>(&mut self, listener: L) {
        log::debug!("[WeatherSession] Listener '{}' registered", listener.listener_name());
        self.listeners.push(Box::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Advance in-world time, refreshing once the update interval is reached
    ///
    /// Returns whether a refresh happened.
    pub fn advance_time(&mut self, hours: f64) -> WeatherResult<bool> {
        if !hours.is_finite() || hours < 0.0 {
            return Err(WeatherError::InvalidInput(format!(
                "time can only advance by a non-negative number of hours, got {}",
                hours
            )));
        }

        self.clock.advance(hours);
        self.elapsed_hours += hours;

        if self.elapsed_hours < self.config.update_interval_hours {
            return Ok(false);
        }

        let next = self.run_model()?;
        self.commit(next, self.config.clone(), ChangeCause::Scheduled)?;
        self.elapsed_hours = 0.0;
        Ok(true)
    }

    /// Run the active model immediately
    pub fn refresh(&mut self) -> WeatherResult<&WeatherState> {
        let next = self.run_model()?;
        self.commit(next, self.config.clone(), ChangeCause::ForcedRefresh)?;
        Ok(&self.state)
    }

    pub fn execute(&mut self, command: WeatherCommand) -> WeatherResult<()> {
        log::debug!("[WeatherSession] Executing '{}'", command);

        match command {
            WeatherCommand::ForceRefresh => {
                self.refresh()?;
            }
            WeatherCommand::SetDimension { dimension, value } => {
                if !dimension.contains(value) {
                    let (min, max) = dimension.range();
                    return Err(WeatherError::InvalidInput(format!(
                        "{} must be within {}..={}, got {}",
                        dimension, min, max, value
                    )));
                }
                let next = self.state.clone().with(dimension, value);
                self.commit(next, self.config.clone(), ChangeCause::DimensionSet { dimension, value })?;
            }
            WeatherCommand::SetClimate(climate) => {
                self.catalog.climate(&climate)?;
                let config = WeatherConfig {
                    climate: climate.clone(),
                    ..self.config.clone()
                };
                let next = self.with_slot_override(self.state.clone(), &config)?;
                self.commit(next, config, ChangeCause::ClimateChanged { climate: climate.clone() })?;
                log::info!("[WeatherSession] Climate set to {}", climate);
            }
            WeatherCommand::SetSeason(season) => {
                self.catalog.season(&season)?;
                let config = WeatherConfig {
                    season: season.clone(),
                    ..self.config.clone()
                };
                let next = self.with_slot_override(self.state.clone(), &config)?;
                self.commit(next, config, ChangeCause::SeasonChanged { season: season.clone() })?;
                log::info!("[WeatherSession] Season set to {}", season);
            }
            WeatherCommand::HexMove(direction) => {
                if self.config.model != WeatherModel::Hex {
                    return Err(WeatherError::InvalidInput(format!(
                        "hex moves need the hex model, the session runs the {} model",
                        self.config.model
                    )));
                }
                let moved = HexWeatherAutomaton::new(&self.catalog).step(&self.state, direction);
                let next = self.with_slot_override(moved, &self.config)?;
                self.commit(next, self.config.clone(), ChangeCause::HexMove { direction })?;
            }
            WeatherCommand::SetTimeOfDay(slot) => {
                let config = WeatherConfig {
                    time_of_day: Some(slot),
                    auto_time_of_day: false,
                    ..self.config.clone()
                };
                let next = self.with_slot_override(self.state.clone(), &config)?;
                self.commit(next, config, ChangeCause::TimeOfDayChanged { slot: Some(slot) })?;
                log::info!("[WeatherSession] Time of day set to {}", slot);
            }
            WeatherCommand::ClearTimeOfDay => {
                let config = WeatherConfig {
                    time_of_day: None,
                    auto_time_of_day: false,
                    ..self.config.clone()
                };
                self.commit(self.state.clone(), config, ChangeCause::TimeOfDayChanged { slot: None })?;
                log::info!("[WeatherSession] Time of day override cleared");
            }
            WeatherCommand::SetModel(model) => {
                let config = WeatherConfig {
                    model,
                    ..self.config.clone()
                };
                self.commit(self.state.clone(), config, ChangeCause::ModelChanged { model })?;
                log::info!("[WeatherSession] Switched to the {} model", model);
            }
        }
        Ok(())
    }

    pub fn describe(&self) -> String {
        DescriptionComposer::new(self.catalog.descriptions()).describe(&self.state, self.ruleset(), self.config.terrain)
    }

    pub fn effects(&self) -> EffectRecord {
        calculate_effects(&self.state, self.ruleset(), self.config.terrain)
    }

    /// Current hex cell; None under the dimensional model
    pub fn hex_location(&self) -> Option<HexLocation> {
        match self.config.model {
            WeatherModel::Hex => HexLocation::of(&self.state, &self.catalog),
            WeatherModel::Dimensional => None,
        }
    }

    pub fn report(&self) -> WeatherReport {
        WeatherReport {
            time: self.clock,
            time_slot: self.active_time_slot(),
            climate: self.config.climate.clone(),
            season: self.config.season.clone(),
            model: self.config.model,
            ruleset: self.ruleset(),
            terrain: self.config.terrain,
            state: self.state.clone(),
            description: self.describe(),
            effects: self.effects(),
            hex: self.hex_location(),
        }
    }

    fn run_model(&mut self) -> WeatherResult<WeatherState> {
        let next = match self.config.model {
            WeatherModel::Dimensional => DimensionalDriftEngine::new(&self.catalog).advance(
                &self.state,
                &self.config.climate,
                &self.config.season,
                &mut self.rng,
            )?,
            WeatherModel::Hex => HexWeatherAutomaton::new(&self.catalog).tick(&self.state, &mut self.rng),
        };
        self.with_slot_override(next, &self.config)
    }

    fn with_slot_override(&self, state: WeatherState, config: &WeatherConfig) -> WeatherResult<WeatherState> {
        match active_slot(config, self.clock) {
            Some(slot) => {
                let climate = self.catalog.climate(&config.climate)?;
                let season = self.catalog.season(&config.season)?;
                Ok(with_time_of_day(&state, baseline_temperature(climate, season), slot))
            }
            None => Ok(state),
        }
    }

    fn commit(&mut self, next: WeatherState, config: WeatherConfig, cause: ChangeCause) -> WeatherResult<()> {
        save_state(self.store.as_mut(), &next)?;

        self.state = next;
        self.config = config;
        log::debug!("[WeatherSession] {:?} -> {}", cause, self.state);

        let event = WeatherChanged {
            state: self.state.clone(),
            model: self.config.model,
            hex: self.hex_location(),
            cause,
        };
        for listener in &self.listeners {
            log::trace!("[WeatherSession] Notifying '{}'", listener.listener_name());
            listener.on_weather_changed(&event);
        }
        Ok(())
    }
}

fn active_slot(config: &WeatherConfig, clock: TimeOfDay) -> Option<TimeSlot> {
    if config.auto_time_of_day {
        Some(clock.slot())
    } else {
        config.time_of_day
    }
}

fn effective_ruleset(catalog: &Catalog, config: &WeatherConfig) -> Ruleset {
    config.ruleset.unwrap_or_else(|| {
        catalog
            .climate(&config.climate)
            .map(|climate| climate.ruleset)
            .unwrap_or_default()
    })
}

//! Continuous model: each dimension drifts toward climate and season targets
//!
//! Each step pulls a dimension a fifth of the way toward the climate target
//! and an eighth of the way toward the season target, then adds noise scaled
//! by the averaged variability.

use rand::Rng;

use crate::constants::drift::{
    CLIMATE_PULL_DIVISOR, DRY_HUMIDITY_THRESHOLD, NOISE_DIVISOR, SEASON_PULL_DIVISOR,
};
use crate::error::WeatherResult;
use crate::weather::catalog::{Catalog, ClimatePreset, SeasonPreset};
use crate::weather::weather_data::{Dimension, WeatherState};

/// Drift engine bound to a catalog
pub struct DimensionalDriftEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> DimensionalDriftEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Advance `state` one step under the named climate and season
    ///
    /// Unknown ids are configuration errors; nothing is computed in that case.
    pub fn advance<R: Rng + ?Sized>(
        &self,
        state: &WeatherState,
        climate_id: &str,
        season_id: &str,
        rng: &mut R,
    ) -> WeatherResult<WeatherState> {
        let climate = self.catalog.climate(climate_id)?;
        let season = self.catalog.season(season_id)?;
        let next = drift(state, climate, season, rng);
        log::debug!(
            "[DimensionalDriftEngine] Drifted weather under {}/{}: {}",
            climate_id,
            season_id,
            next
        );
        Ok(next)
    }
}

/// Averaged variability of state, climate and season, floored
pub fn effective_variability(state: &WeatherState, climate: &ClimatePreset, season: &SeasonPreset) -> i32 {
    (state.variability() + climate.variability + season.variability).div_euclid(3)
}

/// One drift step against resolved presets
pub fn drift<R: Rng + ?Sized>(
    state: &WeatherState,
    climate: &ClimatePreset,
    season: &SeasonPreset,
    rng: &mut R,
) -> WeatherState {
    let noise_amplitude = effective_variability(state, climate, season) as f64 / NOISE_DIVISOR;
    let mut next = state.clone();

    for dimension in Dimension::DRIFTING {
        let current = state.get(dimension) as f64;
        let climate_pull = (climate.value(dimension) as f64 - current) / CLIMATE_PULL_DIVISOR;
        let season_pull = (season.value(dimension) as f64 - current) / SEASON_PULL_DIVISOR;
        let noise = rng.gen_range(-1.0..=1.0) * noise_amplitude;

        let (min, max) = dimension.range();
        let value = (current + climate_pull + season_pull + noise).clamp(min as f64, max as f64);
        next.set(dimension, round_half_up(value));
    }

    // Moisture starvation suppresses precipitation after the general update
    if next.humidity() < DRY_HUMIDITY_THRESHOLD && next.precipitation() > 0 {
        let reduction = 1 + rng.gen_range(0..2);
        next.set(Dimension::Precipitation, next.precipitation() - reduction);
    }

    next
}

/// Round to nearest, with halves going towards positive infinity
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

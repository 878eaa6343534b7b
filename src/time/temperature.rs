//! Time-of-day temperature override
//!
//! Temperature is recomputed from the climate/season baseline plus the slot's
//! fixed offset; the other dimensions are never touched.

use crate::time::time_of_day::TimeSlot;
use crate::weather::catalog::{ClimatePreset, SeasonPreset};
use crate::weather::weather_data::{Dimension, WeatherState};

/// Floored mean of climate and season temperature
pub fn baseline_temperature(climate: &ClimatePreset, season: &SeasonPreset) -> i32 {
    (climate.temperature + season.temperature).div_euclid(2)
}

/// Baseline shifted by the slot's offset, clamped into range
pub fn apply_time_of_day(baseline: i32, slot: TimeSlot) -> i32 {
    Dimension::Temperature.clamp(baseline + slot.temperature_offset())
}

/// Copy of `state` with temperature replaced by the slot temperature
pub fn with_time_of_day(state: &WeatherState, baseline: i32, slot: TimeSlot) -> WeatherState {
    state
        .clone()
        .with(Dimension::Temperature, apply_time_of_day(baseline, slot))
}

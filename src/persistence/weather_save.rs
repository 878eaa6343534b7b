//! Mapping between [`WeatherState`] and settings keys

use serde_json::Value;

use crate::constants::keys;
use crate::persistence::error::corrupted_data;
use crate::persistence::settings_store::{json_kind, SettingsStore};
use crate::persistence::PersistenceResult;
use crate::weather::{Dimension, HexCoord, WeatherState};

fn dimension_key(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Temperature => keys::TEMPERATURE,
        Dimension::Wind => keys::WIND,
        Dimension::Precipitation => keys::PRECIPITATION,
        Dimension::Humidity => keys::HUMIDITY,
        Dimension::Variability => keys::VARIABILITY,
    }
}

/// Write every dimension and the hex location, then flush the store
pub fn save_state(store: &mut dyn SettingsStore, state: &WeatherState) -> PersistenceResult<()> {
    for dimension in Dimension::ALL {
        store.set(dimension_key(dimension), Value::from(state.get(dimension)))?;
    }

    match (state.hex_position(), state.weather_type_id()) {
        (Some(position), Some(weather_type)) => {
            store.set(keys::HEX_Q, Value::from(position.q))?;
            store.set(keys::HEX_R, Value::from(position.r))?;
            store.set(keys::WEATHER_TYPE, Value::from(weather_type))?;
        }
        _ => {
            store.set(keys::HEX_Q, Value::Null)?;
            store.set(keys::HEX_R, Value::Null)?;
            store.set(keys::WEATHER_TYPE, Value::Null)?;
        }
    }

    store.flush()?;
    log::debug!("[WeatherSave] Saved {} to {}", state, store.store_name());
    Ok(())
}

/// Read a state back, taking anything missing from `defaults`
///
/// Values of the wrong JSON type are rejected. Numbers outside a
/// dimension's range are clamped.
pub fn load_state(store: &dyn SettingsStore, defaults: &WeatherState) -> PersistenceResult<WeatherState> {
    let mut state = defaults.clone();

    for dimension in Dimension::ALL {
        let key = dimension_key(dimension);
        if let Some(value) = read_integer(store, key)? {
            let (min, max) = dimension.range();
            let clamped = value.clamp(i64::from(min), i64::from(max)) as i32;
            if i64::from(clamped) != value {
                log::warn!(
                    "[WeatherSave] {} = {} is outside {:?}, clamping to {}",
                    key,
                    value,
                    dimension.range(),
                    clamped
                );
            }
            state.set(dimension, clamped);
        }
    }

    let q = read_integer(store, keys::HEX_Q)?;
    let r = read_integer(store, keys::HEX_R)?;
    let weather_type = read_string(store, keys::WEATHER_TYPE)?;

    match (q, r, weather_type) {
        (Some(q), Some(r), Some(weather_type)) => {
            let position = HexCoord::new(to_coordinate(keys::HEX_Q, q)?, to_coordinate(keys::HEX_R, r)?);
            state.set_hex(position, weather_type);
        }
        (None, None, None) => {}
        _ => {
            log::warn!("[WeatherSave] Incomplete hex location in {}, ignoring it", store.store_name());
        }
    }

    Ok(state)
}

fn read_integer(store: &dyn SettingsStore, key: &str) -> PersistenceResult<Option<i64>> {
    match store.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => number
            .as_i64()
            .map(Some)
            .ok_or_else(|| corrupted_data(format!("{} holds {} instead of an integer", key, number))),
        Some(other) => Err(corrupted_data(format!(
            "{} holds {} instead of an integer",
            key,
            json_kind(&other)
        ))),
    }
}

fn read_string(store: &dyn SettingsStore, key: &str) -> PersistenceResult<Option<String>> {
    match store.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(other) => Err(corrupted_data(format!(
            "{} holds {} instead of a string",
            key,
            json_kind(&other)
        ))),
    }
}

fn to_coordinate(key: &str, value: i64) -> PersistenceResult<i32> {
    i32::try_from(value).map_err(|_| corrupted_data(format!("{} = {} is not a hex coordinate", key, value)))
}

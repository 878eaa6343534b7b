//! Session behaviour against a real settings file

use std::fs;

use tempfile::TempDir;

use tabletop_weather::constants::keys;
use tabletop_weather::persistence::{load_state, save_state};
use tabletop_weather::{
    Dimension, Direction, HexCoord, JsonFileStore, PersistenceError, SettingsStore, WeatherCommand, WeatherConfig,
    WeatherError, WeatherModel, WeatherSession, WeatherState,
};

fn hex_config() -> WeatherConfig {
    WeatherConfig {
        model: WeatherModel::Hex,
        seed: Some(3),
        ..WeatherConfig::default()
    }
}

#[test]
fn state_survives_reopening_the_store() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("weather.json");

    let saved = {
        let mut session = WeatherSession::new(hex_config(), JsonFileStore::open(&path).unwrap()).unwrap();
        session.execute(WeatherCommand::HexMove(Direction::East)).unwrap();
        session.execute(WeatherCommand::HexMove(Direction::East)).unwrap();
        session
            .execute(WeatherCommand::SetDimension {
                dimension: Dimension::Precipitation,
                value: -4,
            })
            .unwrap();
        session.state().clone()
    };

    assert_eq!(saved.hex_position(), Some(HexCoord::new(2, 0)));

    let session = WeatherSession::new(hex_config(), JsonFileStore::open(&path).unwrap()).unwrap();
    assert_eq!(*session.state(), saved);
    assert_eq!(session.hex_location().unwrap().weather_type_id, "scorching");
}

#[test]
fn save_and_load_through_file_store() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");

    let mut state = WeatherState::new(-9, 4, 8, 6, 7);
    state.set_hex(HexCoord::new(-2, 1), "cool_wind");

    let mut store = JsonFileStore::open(&path).unwrap();
    save_state(&mut store, &state).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw[keys::TEMPERATURE], -9);
    assert_eq!(raw[keys::WEATHER_TYPE], "cool_wind");

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(load_state(&reopened, &WeatherState::default()).unwrap(), state);
}

#[test]
fn foreign_keys_are_left_alone() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    fs::write(&path, r#"{ "ui.theme": "dark", "weather.wind": 3 }"#).unwrap();

    let mut session = WeatherSession::new(WeatherConfig::default(), JsonFileStore::open(&path).unwrap()).unwrap();
    assert_eq!(session.state().wind(), 3);
    session.refresh().unwrap();

    let store = JsonFileStore::open(&path).unwrap();
    assert_eq!(store.get("ui.theme"), Some(serde_json::json!("dark")));
}

#[test]
fn corrupted_store_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    fs::write(&path, r#"{ "weather.humidity": "soggy" }"#).unwrap();

    let store = JsonFileStore::open(&path).unwrap();
    match WeatherSession::new(WeatherConfig::default(), store) {
        Err(WeatherError::Persistence(PersistenceError::CorruptedData(msg))) => {
            assert!(msg.contains(keys::HUMIDITY), "{}", msg)
        }
        Err(other) => panic!("unexpected error {}", other),
        Ok(_) => panic!("corrupted store was accepted"),
    }
}

#[test]
fn config_file_drives_the_session() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("weather.toml");
    fs::write(
        &config_path,
        r#"
        climate = "scorched_wastes"
        season = "dry_season"
        terrain = "silt"
        seed = 42
        update_interval_hours = 2.0

        [initial]
        temperature = 8
        wind = 6
        humidity = -6
        "#,
    )
    .unwrap();

    let config = WeatherConfig::load(&config_path).unwrap();
    let store = JsonFileStore::open(temp_dir.path().join("state.json")).unwrap();
    let mut session = WeatherSession::new(config, store).unwrap();

    let report = session.report();
    assert_eq!(report.state, WeatherState::new(8, 6, 0, -6, 5));
    assert!(report.effects.exhaustion_risk);
    assert!(report.description.contains("silt"), "{}", report.description);

    assert!(!session.advance_time(1.0).unwrap());
    assert!(session.advance_time(1.0).unwrap());
    assert!(temp_dir.path().join("state.json").exists());
}

#[test]
fn missing_config_file_is_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = WeatherConfig::load(temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(err.is_configuration());
}

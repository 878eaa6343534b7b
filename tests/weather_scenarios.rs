//! End-to-end checks of the weather models and derivations
//!
//! These exercise the public API the way a host would:
//! - bounded drift for every climate/season pairing
//! - hex movement across the irregular edge of the built-in map
//! - effects and narration for the reference scenarios
//! - the time-of-day override touching temperature only

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tabletop_weather::time::with_time_of_day;
use tabletop_weather::weather::{drift, Movement, StepOutcome, Visibility};
use tabletop_weather::{
    apply_time_of_day, calculate_effects, Catalog, DescriptionComposer, Dimension, Direction, HexCoord,
    HexWeatherAutomaton, Ruleset, Terrain, TimeSlot, WeatherState,
};

fn random_state(rng: &mut StdRng) -> WeatherState {
    WeatherState::new(
        rng.gen_range(-10..=10),
        rng.gen_range(-10..=10),
        rng.gen_range(-10..=10),
        rng.gen_range(-10..=10),
        rng.gen_range(0..=10),
    )
}

#[test]
fn drift_stays_in_bounds_for_every_preset() {
    let catalog = Catalog::builtin();
    let mut rng = StdRng::seed_from_u64(2024);

    for climate_id in catalog.climate_ids() {
        for season_id in catalog.season_ids() {
            let climate = catalog.climate(climate_id).unwrap();
            let season = catalog.season(season_id).unwrap();

            let mut state = random_state(&mut rng);
            for _ in 0..50 {
                let variability = state.variability();
                state = drift(&state, climate, season, &mut rng);
                assert!(state.is_within_bounds(), "{}/{}: {}", climate_id, season_id, state);
                assert_eq!(state.variability(), variability);
            }
        }
    }
}

#[test]
fn hex_walk_always_lands_on_mapped_cells() {
    let catalog = Catalog::builtin();
    let automaton = HexWeatherAutomaton::new(&catalog);
    let mut rng = StdRng::seed_from_u64(99);

    let mut state = WeatherState::default();
    for _ in 0..500 {
        let before = automaton.position_of(&state);
        state = automaton.tick(&state, &mut rng);
        let after = state.hex_position().unwrap();

        assert!(catalog.hex_grid().is_populated(after), "walked off the map to {}", after);
        assert!(before.distance(after) <= 1);
        assert_eq!(
            state.weather_type_id(),
            catalog.hex_grid().cell_type(after)
        );
    }
}

#[test]
fn boundary_move_falls_through_to_first_populated_alternate() {
    let catalog = Catalog::builtin();
    let automaton = HexWeatherAutomaton::new(&catalog);

    let outcome = automaton.plan(HexCoord::new(3, -2), Direction::NorthEast);
    assert_eq!(
        outcome,
        StepOutcome::Diverted {
            to: HexCoord::new(3, -1),
            via: Direction::SouthEast
        }
    );

    let mut state = WeatherState::default();
    state.set_hex(HexCoord::new(3, -2), "sandstorm");
    let moved = automaton.step(&state, Direction::NorthEast);
    assert_eq!(moved.hex_position(), Some(HexCoord::new(3, -1)));
    assert_eq!(moved.weather_type_id(), Some("scorching"));
}

#[test]
fn extreme_heat_at_peak_temperature() {
    let state = WeatherState::new(10, 0, 0, 0, 5);
    let effects = calculate_effects(&state, Ruleset::ExtremeHeat, Terrain::Open);
    assert!(effects.exhaustion_risk);
    assert_eq!(effects.water_consumption_multiplier, 3.0);
}

#[test]
fn standard_thunderstorm() {
    let catalog = Catalog::builtin();
    let composer = DescriptionComposer::new(catalog.descriptions());

    for temperature in -10..=10 {
        let state = WeatherState::new(temperature, 5, 7, 4, 5);

        let effects = calculate_effects(&state, Ruleset::Standard, Terrain::Open);
        assert_eq!(effects.visibility, Visibility::HeavilyObscured);
        assert_eq!(effects.perception_penalty, -5);

        let text = composer.describe(&state, Ruleset::Standard, Terrain::Open);
        assert!(text.to_lowercase().contains("thunder"), "{}: {}", temperature, text);
    }
}

#[test]
fn glass_storm_hurts() {
    let state = WeatherState::new(7, 9, -3, -9, 5);
    let effects = calculate_effects(&state, Ruleset::ExtremeHeat, Terrain::Glass);
    assert_eq!(effects.direct_damage, 2);
    assert_eq!(effects.visibility, Visibility::HeavilyObscured);
    assert_eq!(effects.movement, Movement::Difficult);
}

#[test]
fn derivations_never_panic() {
    let catalog = Catalog::builtin();
    let composer = DescriptionComposer::new(catalog.descriptions());
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..2000 {
        let state = random_state(&mut rng);
        for ruleset in [Ruleset::Standard, Ruleset::ExtremeHeat] {
            for terrain in [Terrain::Open, Terrain::Glass, Terrain::Silt] {
                let effects = calculate_effects(&state, ruleset, terrain);
                assert!(effects.ranged_attack_penalty <= 0);
                assert!(effects.perception_penalty <= 0);
                assert!(effects.direct_damage >= 0);
                assert!(effects.water_consumption_multiplier >= 1.0);
                assert!(!composer.describe(&state, ruleset, terrain).is_empty());
            }
        }
    }
}

#[test]
fn time_of_day_only_moves_temperature() {
    let state = WeatherState::new(5, -3, 6, 7, 2);
    for slot in TimeSlot::ALL {
        let adjusted = with_time_of_day(&state, 1, slot);
        assert_eq!(adjusted.temperature(), apply_time_of_day(1, slot));
        for dimension in [Dimension::Wind, Dimension::Precipitation, Dimension::Humidity, Dimension::Variability] {
            assert_eq!(adjusted.get(dimension), state.get(dimension));
        }
    }
    assert_eq!(apply_time_of_day(-8, TimeSlot::LateNight), -10);
    assert_eq!(apply_time_of_day(9, TimeSlot::Afternoon), 10);
}

//! Game-mechanical effects derived from the weather state
//!
//! Within one threshold ladder only the highest matching band applies.
//! Separate rules stack: penalties and the water multiplier add up, while
//! visibility keeps the most severe level any rule asks for.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::weather::weather_data::{Ruleset, Terrain, WeatherState};

/// How far one can see; ordered from clear to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Normal,
    LightlyObscured,
    HeavilyObscured,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Movement {
    #[default]
    Normal,
    Difficult,
}

/// Survival pressure from temperature alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureHazard {
    #[default]
    None,
    /// Uncomfortable; survival checks get harder but no exhaustion
    Harsh,
    /// Exhaustion risk
    Extreme,
}

/// Mechanical consequences of the current weather
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectRecord {
    pub visibility: Visibility,
    pub movement: Movement,
    /// Always zero or negative
    pub ranged_attack_penalty: i32,
    /// Always zero or negative
    pub perception_penalty: i32,
    pub exhaustion_risk: bool,
    /// At least 1.0
    pub water_consumption_multiplier: f64,
    /// Damage per exposure, never negative
    pub direct_damage: i32,
    pub temperature_hazard: TemperatureHazard,
}

impl Default for EffectRecord {
    fn default() -> Self {
        Self {
            visibility: Visibility::Normal,
            movement: Movement::Normal,
            ranged_attack_penalty: 0,
            perception_penalty: 0,
            exhaustion_risk: false,
            water_consumption_multiplier: 1.0,
            direct_damage: 0,
            temperature_hazard: TemperatureHazard::None,
        }
    }
}

impl EffectRecord {
    fn obscure(&mut self, level: Visibility, perception_penalty: i32) {
        self.visibility = self.visibility.max(level);
        self.perception_penalty += perception_penalty;
    }

    fn hazard(&mut self, level: TemperatureHazard) {
        self.temperature_hazard = self.temperature_hazard.max(level);
        if level == TemperatureHazard::Extreme {
            self.exhaustion_risk = true;
        }
    }

    /// True when nothing differs from calm weather
    pub fn is_clear(&self) -> bool {
        *self == EffectRecord::default()
    }

    /// Human-readable lines for the non-default fields
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.visibility != Visibility::Normal {
            lines.push(format!("Visibility: {}", self.visibility));
        }
        if self.movement == Movement::Difficult {
            lines.push("Movement: difficult terrain".to_string());
        }
        if self.ranged_attack_penalty != 0 {
            lines.push(format!("Ranged attacks: {}", self.ranged_attack_penalty));
        }
        if self.perception_penalty != 0 {
            lines.push(format!("Perception: {}", self.perception_penalty));
        }
        match self.temperature_hazard {
            TemperatureHazard::None => {}
            TemperatureHazard::Harsh => lines.push("Temperature: harsh, survival checks are harder".to_string()),
            TemperatureHazard::Extreme => lines.push("Temperature: extreme".to_string()),
        }
        if self.exhaustion_risk {
            lines.push("Exhaustion risk".to_string());
        }
        if self.water_consumption_multiplier > 1.0 {
            lines.push(format!("Water consumption: x{}", self.water_consumption_multiplier));
        }
        if self.direct_damage > 0 {
            lines.push(format!("Exposure damage: {}", self.direct_damage));
        }
        lines
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Visibility::Normal => "normal",
            Visibility::LightlyObscured => "lightly obscured",
            Visibility::HeavilyObscured => "heavily obscured",
        })
    }
}

/// Derive effects from a state under a ruleset
///
/// Terrain only matters for the extreme-heat hazards.
pub fn calculate_effects(state: &WeatherState, ruleset: Ruleset, terrain: Terrain) -> EffectRecord {
    let mut record = EffectRecord::default();
    match ruleset {
        Ruleset::Standard => apply_standard(state, &mut record),
        Ruleset::ExtremeHeat => {
            apply_extreme_heat(state, &mut record);
            apply_terrain_hazards(state, terrain, &mut record);
        }
    }
    record
}

fn apply_extreme_heat(state: &WeatherState, record: &mut EffectRecord) {
    let temperature = state.temperature();
    if temperature >= 10 {
        record.hazard(TemperatureHazard::Extreme);
        record.water_consumption_multiplier = 3.0;
    } else if temperature >= 8 {
        record.hazard(TemperatureHazard::Extreme);
        record.water_consumption_multiplier = 2.0;
    } else if temperature >= 6 {
        record.hazard(TemperatureHazard::Harsh);
        record.water_consumption_multiplier = 1.5;
    }

    let wind = state.wind();
    if wind >= 9 {
        record.obscure(Visibility::HeavilyObscured, -10);
        record.ranged_attack_penalty += -10;
        record.movement = Movement::Difficult;
    } else if wind >= 7 {
        record.obscure(Visibility::LightlyObscured, -5);
        record.ranged_attack_penalty += -5;
    } else if wind >= 5 {
        record.ranged_attack_penalty += -2;
    }

    if state.humidity() <= -8 {
        record.water_consumption_multiplier += 0.5;
    }
}

fn apply_terrain_hazards(state: &WeatherState, terrain: Terrain, record: &mut EffectRecord) {
    let wind = state.wind();
    match terrain {
        Terrain::Glass if wind >= 6 => {
            record.direct_damage += (wind - 5).div_euclid(2);
        }
        Terrain::Silt if wind >= 5 => {
            record.obscure(Visibility::HeavilyObscured, -8);
        }
        _ => {}
    }
}

fn apply_standard(state: &WeatherState, record: &mut EffectRecord) {
    let precipitation = state.precipitation();
    if precipitation >= 7 {
        record.obscure(Visibility::HeavilyObscured, -5);
    } else if precipitation >= 4 {
        record.obscure(Visibility::LightlyObscured, -2);
    }

    if is_foggy(state) {
        record.obscure(Visibility::HeavilyObscured, -5);
    }

    let wind = state.wind();
    if wind >= 8 {
        record.ranged_attack_penalty += -4;
        record.movement = Movement::Difficult;
    } else if wind >= 6 {
        record.ranged_attack_penalty += -2;
    }

    let temperature = state.temperature();
    if temperature <= -7 || temperature >= 8 {
        record.hazard(TemperatureHazard::Extreme);
    } else if temperature <= -5 || temperature >= 6 {
        record.hazard(TemperatureHazard::Harsh);
    }

    // Snow accumulation
    if temperature < -3 && precipitation > 5 {
        record.movement = Movement::Difficult;
    }
}

/// Humid, still air
pub fn is_foggy(state: &WeatherState) -> bool {
    state.humidity() > 5 && state.wind() < -3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::weather_data::Dimension;

    fn state(temperature: i32, wind: i32, precipitation: i32, humidity: i32) -> WeatherState {
        WeatherState::new(temperature, wind, precipitation, humidity, 5)
    }

    #[test]
    fn test_calm_weather_has_no_effects() {
        let record = calculate_effects(&state(0, 0, 0, 0), Ruleset::Standard, Terrain::Open);
        assert!(record.is_clear());
        assert!(record.summary_lines().is_empty());
    }

    #[test]
    fn test_extreme_heat_top_band() {
        let record = calculate_effects(&state(10, 0, 0, 0), Ruleset::ExtremeHeat, Terrain::Open);
        assert!(record.exhaustion_risk);
        assert_eq!(record.water_consumption_multiplier, 3.0);
    }

    #[test]
    fn test_extreme_heat_bands() {
        let at = |t| calculate_effects(&state(t, 0, 0, 0), Ruleset::ExtremeHeat, Terrain::Open);
        assert_eq!(at(9).water_consumption_multiplier, 2.0);
        assert!(at(8).exhaustion_risk);
        assert_eq!(at(7).water_consumption_multiplier, 1.5);
        assert!(!at(6).exhaustion_risk);
        assert_eq!(at(5).water_consumption_multiplier, 1.0);
    }

    #[test]
    fn test_dry_air_adds_to_multiplier() {
        let record = calculate_effects(&state(10, 0, 0, -8), Ruleset::ExtremeHeat, Terrain::Open);
        assert_eq!(record.water_consumption_multiplier, 3.5);
        let record = calculate_effects(&state(0, 0, 0, -9), Ruleset::ExtremeHeat, Terrain::Open);
        assert_eq!(record.water_consumption_multiplier, 1.5);
    }

    #[test]
    fn test_extreme_heat_wind_bands() {
        let at = |w| calculate_effects(&state(0, w, 0, 0), Ruleset::ExtremeHeat, Terrain::Open);

        let storm = at(9);
        assert_eq!(storm.visibility, Visibility::HeavilyObscured);
        assert_eq!(storm.perception_penalty, -10);
        assert_eq!(storm.ranged_attack_penalty, -10);
        assert_eq!(storm.movement, Movement::Difficult);

        let gale = at(7);
        assert_eq!(gale.visibility, Visibility::LightlyObscured);
        assert_eq!(gale.perception_penalty, -5);
        assert_eq!(gale.ranged_attack_penalty, -5);
        assert_eq!(gale.movement, Movement::Normal);

        let breeze = at(5);
        assert_eq!(breeze.visibility, Visibility::Normal);
        assert_eq!(breeze.ranged_attack_penalty, -2);
    }

    #[test]
    fn test_glass_terrain_damage() {
        let damage = |w| calculate_effects(&state(0, w, 0, 0), Ruleset::ExtremeHeat, Terrain::Glass).direct_damage;
        assert_eq!(damage(5), 0);
        assert_eq!(damage(6), 0);
        assert_eq!(damage(7), 1);
        assert_eq!(damage(8), 1);
        assert_eq!(damage(10), 2);
        // Terrain hazards belong to the extreme-heat ruleset
        let record = calculate_effects(&state(0, 10, 0, 0), Ruleset::Standard, Terrain::Glass);
        assert_eq!(record.direct_damage, 0);
    }

    #[test]
    fn test_silt_terrain_stacks_perception() {
        let record = calculate_effects(&state(0, 5, 0, 0), Ruleset::ExtremeHeat, Terrain::Silt);
        assert_eq!(record.visibility, Visibility::HeavilyObscured);
        assert_eq!(record.perception_penalty, -8);

        let record = calculate_effects(&state(0, 7, 0, 0), Ruleset::ExtremeHeat, Terrain::Silt);
        assert_eq!(record.visibility, Visibility::HeavilyObscured);
        assert_eq!(record.perception_penalty, -13);
    }

    #[test]
    fn test_standard_heavy_precipitation() {
        let record = calculate_effects(&state(0, 5, 7, 4), Ruleset::Standard, Terrain::Open);
        assert_eq!(record.visibility, Visibility::HeavilyObscured);
        assert_eq!(record.perception_penalty, -5);
        assert_eq!(record.ranged_attack_penalty, 0);
    }

    #[test]
    fn test_standard_light_precipitation() {
        let record = calculate_effects(&state(0, 0, 4, 0), Ruleset::Standard, Terrain::Open);
        assert_eq!(record.visibility, Visibility::LightlyObscured);
        assert_eq!(record.perception_penalty, -2);
    }

    #[test]
    fn test_fog_is_stricter_than_light_rain() {
        let record = calculate_effects(&state(0, -5, 5, 8), Ruleset::Standard, Terrain::Open);
        assert_eq!(record.visibility, Visibility::HeavilyObscured);
        assert_eq!(record.perception_penalty, -7);
    }

    #[test]
    fn test_standard_wind() {
        let strong = calculate_effects(&state(0, 8, 0, 0), Ruleset::Standard, Terrain::Open);
        assert_eq!(strong.ranged_attack_penalty, -4);
        assert_eq!(strong.movement, Movement::Difficult);
        let fresh = calculate_effects(&state(0, 6, 0, 0), Ruleset::Standard, Terrain::Open);
        assert_eq!(fresh.ranged_attack_penalty, -2);
        assert_eq!(fresh.movement, Movement::Normal);
    }

    #[test]
    fn test_standard_temperature_hazards() {
        let at = |t| calculate_effects(&state(t, 0, 0, 0), Ruleset::Standard, Terrain::Open);
        assert!(at(-7).exhaustion_risk);
        assert!(at(8).exhaustion_risk);
        assert_eq!(at(-5).temperature_hazard, TemperatureHazard::Harsh);
        assert!(!at(-5).exhaustion_risk);
        assert_eq!(at(6).temperature_hazard, TemperatureHazard::Harsh);
        assert_eq!(at(5).temperature_hazard, TemperatureHazard::None);
        assert_eq!(at(10).water_consumption_multiplier, 1.0);
    }

    #[test]
    fn test_snow_accumulation() {
        let record = calculate_effects(&state(-4, 0, 6, 0), Ruleset::Standard, Terrain::Open);
        assert_eq!(record.movement, Movement::Difficult);
        let record = calculate_effects(&state(-3, 0, 6, 0), Ruleset::Standard, Terrain::Open);
        assert_eq!(record.movement, Movement::Normal);
    }

    #[test]
    fn test_never_panics_and_respects_signs() {
        let rulesets = [Ruleset::Standard, Ruleset::ExtremeHeat];
        let terrains = [Terrain::Open, Terrain::Glass, Terrain::Silt];
        for t in (-10..=10).step_by(2) {
            for w in -10..=10 {
                for p in (-10..=10).step_by(3) {
                    for h in (-10..=10).step_by(3) {
                        let s = state(t, w, p, h).with(Dimension::Variability, 0);
                        for ruleset in rulesets {
                            for terrain in terrains {
                                let record = calculate_effects(&s, ruleset, terrain);
                                assert!(record.ranged_attack_penalty <= 0);
                                assert!(record.perception_penalty <= 0);
                                assert!(record.direct_damage >= 0);
                                assert!(record.water_consumption_multiplier >= 1.0);
                            }
                        }
                    }
                }
            }
        }
    }
}

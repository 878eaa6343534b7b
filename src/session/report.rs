use std::fmt;

use serde::Serialize;

use crate::time::{TimeOfDay, TimeSlot};
use crate::weather::{Catalog, EffectRecord, HexCoord, Ruleset, Terrain, WeatherModel, WeatherState};

/// The hex cell the weather currently sits on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexLocation {
    pub position: HexCoord,
    pub weather_type_id: String,
    /// Display name of the weather type
    pub name: String,
    /// Flavour text of the weather type
    pub description: String,
    /// Mechanical note attached to the weather type
    pub effect: String,
}

impl HexLocation {
    /// Location of `state`, resolved against `catalog`; None off the grid
    pub fn of(state: &WeatherState, catalog: &Catalog) -> Option<Self> {
        let position = state.hex_position()?;
        let weather_type_id = state.weather_type_id()?.to_string();
        let (name, description, effect) = match catalog.weather_type(&weather_type_id) {
            Some(def) => (def.name.clone(), def.description.clone(), def.effect.clone()),
            None => (weather_type_id.clone(), String::new(), String::new()),
        };
        Some(Self {
            position,
            weather_type_id,
            name,
            description,
            effect,
        })
    }
}

/// Everything a game master needs to narrate the current weather
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub time: TimeOfDay,
    pub time_slot: Option<TimeSlot>,
    pub climate: String,
    pub season: String,
    pub model: WeatherModel,
    pub ruleset: Ruleset,
    pub terrain: Terrain,
    pub state: WeatherState,
    pub description: String,
    pub effects: EffectRecord,
    pub hex: Option<HexLocation>,
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} / {} ({} model, {} rules",
            self.time.format(),
            self.climate,
            self.season,
            self.model,
            self.ruleset.name()
        )?;
        if self.terrain != Terrain::Open {
            write!(f, ", {} terrain", self.terrain.name())?;
        }
        write!(f, ")")?;
        if let Some(slot) = self.time_slot {
            write!(f, " {}", slot)?;
        }
        writeln!(f)?;

        if let Some(hex) = &self.hex {
            writeln!(f, "Hex {}: {}. {}", hex.position, hex.name, hex.description)?;
            if !hex.effect.is_empty() {
                writeln!(f, "  {}", hex.effect)?;
            }
        }

        writeln!(f, "{}", self.description)?;
        writeln!(f, "  {}", self.state)?;

        let lines = self.effects.summary_lines();
        if lines.is_empty() {
            write!(f, "  No mechanical effects")
        } else {
            for (i, line) in lines.iter().enumerate() {
                if i > 0 {
                    writeln!(f)?;
                }
                write!(f, "  {}", line)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::HexCoord;

    #[test]
    fn test_hex_location_of_state() {
        let catalog = Catalog::builtin();
        let mut state = WeatherState::default();
        assert_eq!(HexLocation::of(&state, &catalog), None);

        state.set_hex(HexCoord::new(1, 0), "clear_heat");
        let location = HexLocation::of(&state, &catalog).unwrap();
        assert_eq!(location.position, HexCoord::new(1, 0));
        assert_eq!(location.weather_type_id, "clear_heat");
        assert!(!location.name.is_empty());
    }

    #[test]
    fn test_unknown_type_falls_back_to_id() {
        let catalog = Catalog::builtin();
        let mut state = WeatherState::default();
        state.set_hex(HexCoord::new(9, 9), "mystery");
        let location = HexLocation::of(&state, &catalog).unwrap();
        assert_eq!(location.name, "mystery");
        assert!(location.effect.is_empty());
    }
}

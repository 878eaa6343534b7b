//! Commands a host can send to a weather session
//!
//! Commands also parse from short text lines such as `set wind -3`,
//! `move 2` or `time dusk`, which is what the report binary reads.

use std::fmt;
use std::str::FromStr;

use crate::error::{WeatherError, WeatherResult};
use crate::time::TimeSlot;
use crate::weather::{Dimension, Direction, WeatherModel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherCommand {
    /// Run the active model now, regardless of elapsed time
    ForceRefresh,
    /// Set one dimension; out-of-range values are rejected, not clamped
    SetDimension { dimension: Dimension, value: i32 },
    SetClimate(String),
    SetSeason(String),
    /// Move the hex weather one step
    HexMove(Direction),
    SetTimeOfDay(TimeSlot),
    ClearTimeOfDay,
    SetModel(WeatherModel),
}

impl WeatherCommand {
    /// Build a set-dimension command from a dimension name
    pub fn set_dimension(name: &str, value: i32) -> WeatherResult<Self> {
        Ok(WeatherCommand::SetDimension {
            dimension: name.parse()?,
            value,
        })
    }
}

impl FromStr for WeatherCommand {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let command = match words.as_slice() {
            ["refresh"] => WeatherCommand::ForceRefresh,
            ["set", name, value] => {
                let value = value
                    .parse::<i32>()
                    .map_err(|_| WeatherError::InvalidInput(format!("'{}' is not a whole number", value)))?;
                WeatherCommand::set_dimension(name, value)?
            }
            ["climate", id] => WeatherCommand::SetClimate(id.to_string()),
            ["season", id] => WeatherCommand::SetSeason(id.to_string()),
            ["move", direction] => WeatherCommand::HexMove(direction.parse()?),
            ["time", "clear"] => WeatherCommand::ClearTimeOfDay,
            ["time", slot @ ..] if !slot.is_empty() => WeatherCommand::SetTimeOfDay(slot.join(" ").parse()?),
            ["model", model] => WeatherCommand::SetModel(model.parse()?),
            _ => return Err(WeatherError::InvalidInput(format!("unknown command '{}'", s.trim()))),
        };
        Ok(command)
    }
}

impl fmt::Display for WeatherCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherCommand::ForceRefresh => write!(f, "refresh"),
            WeatherCommand::SetDimension { dimension, value } => write!(f, "set {} {}", dimension, value),
            WeatherCommand::SetClimate(id) => write!(f, "climate {}", id),
            WeatherCommand::SetSeason(id) => write!(f, "season {}", id),
            WeatherCommand::HexMove(direction) => write!(f, "move {}", direction.number()),
            WeatherCommand::SetTimeOfDay(slot) => write!(f, "time {}", slot.name()),
            WeatherCommand::ClearTimeOfDay => write!(f, "time clear"),
            WeatherCommand::SetModel(model) => write!(f, "model {}", model),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("refresh".parse::<WeatherCommand>().unwrap(), WeatherCommand::ForceRefresh);
        assert_eq!(
            "set temp -3".parse::<WeatherCommand>().unwrap(),
            WeatherCommand::SetDimension {
                dimension: Dimension::Temperature,
                value: -3
            }
        );
        assert_eq!(
            "move NE".parse::<WeatherCommand>().unwrap(),
            WeatherCommand::HexMove(Direction::NorthEast)
        );
        assert_eq!(
            "time late night".parse::<WeatherCommand>().unwrap(),
            WeatherCommand::SetTimeOfDay(TimeSlot::LateNight)
        );
        assert_eq!(
            "model hex".parse::<WeatherCommand>().unwrap(),
            WeatherCommand::SetModel(WeatherModel::Hex)
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for line in ["", "set mood 3", "set wind lots", "move 7", "time teatime", "dance"] {
            let err = line.parse::<WeatherCommand>().unwrap_err();
            assert!(err.is_invalid_input(), "{}: {}", line, err);
        }
    }

    #[test]
    fn test_display_parses_back() {
        let commands = [
            WeatherCommand::ForceRefresh,
            WeatherCommand::SetDimension {
                dimension: Dimension::Humidity,
                value: 8,
            },
            WeatherCommand::SetClimate("arctic".to_string()),
            WeatherCommand::HexMove(Direction::West),
            WeatherCommand::SetTimeOfDay(TimeSlot::MidMorning),
            WeatherCommand::ClearTimeOfDay,
        ];
        for command in commands {
            assert_eq!(command.to_string().parse::<WeatherCommand>().unwrap(), command);
        }
    }
}

//! Change notifications delivered to session listeners

use serde::Serialize;

use crate::session::report::HexLocation;
use crate::time::TimeSlot;
use crate::weather::{Dimension, Direction, WeatherModel, WeatherState};

/// What triggered a state change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ChangeCause {
    /// Accumulated in-world time reached the update interval
    Scheduled,
    ForcedRefresh,
    DimensionSet { dimension: Dimension, value: i32 },
    ClimateChanged { climate: String },
    SeasonChanged { season: String },
    HexMove { direction: Direction },
    TimeOfDayChanged { slot: Option<TimeSlot> },
    ModelChanged { model: WeatherModel },
}

/// Snapshot sent after every successful mutation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherChanged {
    pub state: WeatherState,
    pub model: WeatherModel,
    pub hex: Option<HexLocation>,
    pub cause: ChangeCause,
}

/// Receiver of weather change notifications
pub trait WeatherListener {
    fn on_weather_changed(&self, event: &WeatherChanged);

    /// Listener name for logging
    fn listener_name(&self) -> &str {
        "unnamed_listener"
    }
}

impl<F> WeatherListener for F
where
    F: Fn(&WeatherChanged),
{
    fn on_weather_changed(&self, event: &WeatherChanged) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recorder {
        seen: RefCell<Vec<ChangeCause>>,
    }

    impl WeatherListener for Recorder {
        fn on_weather_changed(&self, event: &WeatherChanged) {
            self.seen.borrow_mut().push(event.cause.clone());
        }

        fn listener_name(&self) -> &str {
            "Recorder"
        }
    }

    fn event(cause: ChangeCause) -> WeatherChanged {
        WeatherChanged {
            state: WeatherState::default(),
            model: WeatherModel::Dimensional,
            hex: None,
            cause,
        }
    }

    #[test]
    fn test_struct_listener() {
        let recorder = Recorder {
            seen: RefCell::new(Vec::new()),
        };
        recorder.on_weather_changed(&event(ChangeCause::ForcedRefresh));
        assert_eq!(recorder.listener_name(), "Recorder");
        assert_eq!(*recorder.seen.borrow(), vec![ChangeCause::ForcedRefresh]);
    }

    #[test]
    fn test_closure_listener() {
        let count = RefCell::new(0);
        let listener = |_: &WeatherChanged| *count.borrow_mut() += 1;
        listener.on_weather_changed(&event(ChangeCause::Scheduled));
        listener.on_weather_changed(&event(ChangeCause::Scheduled));
        assert_eq!(listener.listener_name(), "unnamed_listener");
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_event_serializes_cause() {
        let json = serde_json::to_value(event(ChangeCause::HexMove {
            direction: Direction::SouthEast,
        }))
        .unwrap();
        assert_eq!(json["cause"]["kind"], "hex_move");
        assert_eq!(json["cause"]["direction"], 3);
        assert_eq!(json["model"], "dimensional");
    }
}

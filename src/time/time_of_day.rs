use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{unrecognised, WeatherError};

const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// In-world clock time in 24-hour format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    /// Hours (0-23)
    pub hours: u8,
    /// Minutes (0-59)
    pub minutes: u8,
}

/// The seven periods that shift baseline temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    EarlyMorning, // 05:00 - 09:00
    MidMorning,   // 09:00 - 12:00
    Noon,         // 12:00 - 14:00
    Afternoon,    // 14:00 - 18:00
    Evening,      // 18:00 - 21:00
    Night,        // 21:00 - 00:00
    LateNight,    // 00:00 - 05:00
}

impl TimeOfDay {
    pub fn new(hours: u8, minutes: u8) -> Self {
        Self {
            hours: hours % 24,
            minutes: minutes % 60,
        }
    }

    /// Create from fractional hours since midnight, wrapping past a day
    pub fn from_hours(total_hours: f64) -> Self {
        let minutes = (total_hours * 60.0).round().rem_euclid(MINUTES_PER_DAY);
        let minutes = minutes as u32;
        Self::new((minutes / 60) as u8, (minutes % 60) as u8)
    }

    /// Fractional hours since midnight
    pub fn to_hours(&self) -> f64 {
        self.hours as f64 + self.minutes as f64 / 60.0
    }

    /// Advance the clock by in-world hours
    pub fn advance(&mut self, hours: f64) {
        *self = Self::from_hours(self.to_hours() + hours);
    }

    pub fn slot(&self) -> TimeSlot {
        TimeSlot::from_hour(self.hours)
    }

    /// Format as HH:MM
    pub fn format(&self) -> String {
        format!("{:02}:{:02}", self.hours, self.minutes)
    }

    /// Format as 12-hour time with AM/PM
    pub fn format_12h(&self) -> String {
        let (hours_12, am_pm) = if self.hours == 0 {
            (12, "AM")
        } else if self.hours < 12 {
            (self.hours, "AM")
        } else if self.hours == 12 {
            (12, "PM")
        } else {
            (self.hours - 12, "PM")
        };

        format!("{:02}:{:02} {}", hours_12, self.minutes, am_pm)
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::new(12, 0) // Noon
    }
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 7] = [
        TimeSlot::EarlyMorning,
        TimeSlot::MidMorning,
        TimeSlot::Noon,
        TimeSlot::Afternoon,
        TimeSlot::Evening,
        TimeSlot::Night,
        TimeSlot::LateNight,
    ];

    pub fn from_hour(hour: u8) -> Self {
        match hour % 24 {
            5..=8 => TimeSlot::EarlyMorning,
            9..=11 => TimeSlot::MidMorning,
            12..=13 => TimeSlot::Noon,
            14..=17 => TimeSlot::Afternoon,
            18..=20 => TimeSlot::Evening,
            21..=23 => TimeSlot::Night,
            _ => TimeSlot::LateNight,
        }
    }

    /// Fixed temperature offset applied to the baseline
    pub fn temperature_offset(&self) -> i32 {
        match self {
            TimeSlot::EarlyMorning => -4,
            TimeSlot::MidMorning => 0,
            TimeSlot::Noon => 2,
            TimeSlot::Afternoon => 3,
            TimeSlot::Evening => -1,
            TimeSlot::Night => -5,
            TimeSlot::LateNight => -7,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TimeSlot::EarlyMorning => "early morning",
            TimeSlot::MidMorning => "mid-morning",
            TimeSlot::Noon => "noon",
            TimeSlot::Afternoon => "afternoon",
            TimeSlot::Evening => "evening",
            TimeSlot::Night => "night",
            TimeSlot::LateNight => "late night",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeSlot {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();
        match normalized.as_str() {
            "earlymorning" | "dawn" => Ok(TimeSlot::EarlyMorning),
            "midmorning" | "morning" => Ok(TimeSlot::MidMorning),
            "noon" | "midday" => Ok(TimeSlot::Noon),
            "afternoon" => Ok(TimeSlot::Afternoon),
            "evening" | "dusk" => Ok(TimeSlot::Evening),
            "night" => Ok(TimeSlot::Night),
            "latenight" | "midnight" => Ok(TimeSlot::LateNight),
            _ => Err(unrecognised("time of day", s)),
        }
    }
}

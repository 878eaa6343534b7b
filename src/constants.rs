// Weather engine constants - SINGLE SOURCE OF TRUTH
//
// Numeric bounds and tuning values shared by the update models, the
// derivation tables and the persistence layer.

/// Dimension bounds
pub mod dimensions {
    /// Lower bound for temperature, wind, precipitation and humidity
    pub const SIGNED_MIN: i32 = -10;
    /// Upper bound for every dimension
    pub const MAX: i32 = 10;
    /// Lower bound for variability
    pub const VARIABILITY_MIN: i32 = 0;

    /// Number of entries in a description table (-10..=10)
    pub const TABLE_LEN: usize = (MAX - SIGNED_MIN + 1) as usize;
}

/// Dimensional drift tuning
pub mod drift {
    /// Climate pull divides the distance to the climate target by this
    pub const CLIMATE_PULL_DIVISOR: f64 = 5.0;
    /// Season pull divides the distance to the season target by this
    pub const SEASON_PULL_DIVISOR: f64 = 8.0;
    /// Effective variability is scaled down by this to get the noise amplitude
    pub const NOISE_DIVISOR: f64 = 5.0;
    /// Humidity strictly below this starves precipitation
    pub const DRY_HUMIDITY_THRESHOLD: i32 = -5;
}

/// Description composer thresholds
pub mod description {
    /// Humidity gets its own sentence when |humidity| exceeds this
    pub const NOTABLE_HUMIDITY: i32 = 5;
    /// Temperatures at or below this fall as snow
    pub const SNOW_MAX_TEMPERATURE: i32 = -4;
    /// Temperatures at or below this (and above the snow line) fall as sleet
    pub const SLEET_MAX_TEMPERATURE: i32 = -1;
}

/// Session scheduling defaults
pub mod session {
    /// In-world hours between automatic refreshes
    pub const DEFAULT_UPDATE_INTERVAL_HOURS: f64 = 4.0;
    /// In-world hour the session clock starts at
    pub const DEFAULT_START_HOUR: u8 = 8;
}

/// Persistence keys
pub mod keys {
    pub const TEMPERATURE: &str = "weather.temperature";
    pub const WIND: &str = "weather.wind";
    pub const PRECIPITATION: &str = "weather.precipitation";
    pub const HUMIDITY: &str = "weather.humidity";
    pub const VARIABILITY: &str = "weather.variability";
    pub const HEX_Q: &str = "weather.hex_q";
    pub const HEX_R: &str = "weather.hex_r";
    pub const WEATHER_TYPE: &str = "weather.weather_type";
}

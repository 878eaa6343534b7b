pub mod temperature;
pub mod time_of_day;

pub use temperature::{apply_time_of_day, baseline_temperature, with_time_of_day};
pub use time_of_day::{TimeOfDay, TimeSlot};

//! Persistence of weather state through a host-provided settings store

pub mod error;
pub mod settings_store;
pub mod weather_save;

pub use error::{corrupted_data, load_error, save_error, PersistenceErrorContext};
pub use settings_store::{atomic_write, JsonFileStore, MemoryStore, SettingsStore};
pub use weather_save::{load_state, save_state};

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Errors that can occur during persistence operations
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Corrupted data: {0}")]
    CorruptedData(String),
}

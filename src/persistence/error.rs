//! Persistence-specific error helpers
//!
//! Keeps I/O failures annotated with the path and the operation that hit them.

use std::path::Path;

use crate::persistence::{PersistenceError, PersistenceResult};

/// Helper trait for persistence-specific error contexts
pub trait PersistenceErrorContext<T> {
    fn persistence_context(self, context: &str) -> PersistenceResult<T>;
}

impl<T> PersistenceErrorContext<T> for std::io::Result<T> {
    fn persistence_context(self, context: &str) -> PersistenceResult<T> {
        self.map_err(|e| {
            PersistenceError::IoError(std::io::Error::new(e.kind(), format!("{}: {}", context, e)))
        })
    }
}

/// Create a save error
pub fn save_error(path: impl AsRef<Path>, error: impl std::fmt::Display) -> PersistenceError {
    PersistenceError::IoError(std::io::Error::new(
        std::io::ErrorKind::Other,
        format!("Save failed for {}: {}", path.as_ref().display(), error),
    ))
}

/// Create a load error
pub fn load_error(path: impl AsRef<Path>, error: impl std::fmt::Display) -> PersistenceError {
    PersistenceError::IoError(std::io::Error::new(
        std::io::ErrorKind::Other,
        format!("Load failed for {}: {}", path.as_ref().display(), error),
    ))
}

/// Create a corrupted data error
pub fn corrupted_data(reason: impl Into<String>) -> PersistenceError {
    PersistenceError::CorruptedData(reason.into())
}

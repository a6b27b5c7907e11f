//! Persistence collaborators: load and save the full tournament list.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::models::Tournament;
use thiserror::Error;

/// Error raised by a store regardless of where it keeps its data.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored tournaments are malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("store lock poisoned")]
    Poisoned,
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Where tournaments live between restarts. The whole list is read and written at once.
pub trait TournamentStore: Send + Sync {
    fn load(&self) -> StoreResult<Vec<Tournament>>;
    fn save(&self, tournaments: &[Tournament]) -> StoreResult<()>;
}

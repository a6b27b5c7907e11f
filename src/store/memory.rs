use super::{StoreError, StoreResult, TournamentStore};
use crate::models::Tournament;
use std::sync::Mutex;

/// Keeps the last saved list in memory. Used by tests and when no data file is wanted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Mutex<Vec<Tournament>>,
    saves: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with tournaments already "on disk".
    pub fn with_tournaments(tournaments: Vec<Tournament>) -> Self {
        Self {
            saved: Mutex::new(tournaments),
            saves: Mutex::new(0),
        }
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves.lock().map(|n| *n).unwrap_or(0)
    }
}

impl TournamentStore for MemoryStore {
    fn load(&self) -> StoreResult<Vec<Tournament>> {
        let saved = self.saved.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(saved.clone())
    }

    fn save(&self, tournaments: &[Tournament]) -> StoreResult<()> {
        let mut saved = self.saved.lock().map_err(|_| StoreError::Poisoned)?;
        *saved = tournaments.to_vec();
        *self.saves.lock().map_err(|_| StoreError::Poisoned)? += 1;
        Ok(())
    }
}

use super::{StoreResult, TournamentStore};
use crate::models::Tournament;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// On-disk layout: `{ "tournaments": [...] }`.
#[derive(Serialize)]
struct DocumentRef<'a> {
    tournaments: &'a [Tournament],
}

#[derive(Deserialize)]
struct Document {
    #[serde(default)]
    tournaments: Vec<Tournament>,
}

/// Stores every tournament in one JSON file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TournamentStore for JsonFileStore {
    /// A missing file means nothing has been saved yet.
    fn load(&self) -> StoreResult<Vec<Tournament>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let document: Document = serde_json::from_str(&raw)?;
        Ok(document.tournaments)
    }

    /// Write to a sibling temp file first so a crash never leaves half a document behind.
    fn save(&self, tournaments: &[Tournament]) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(&DocumentRef { tournaments })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

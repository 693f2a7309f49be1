//! JSON-file persistence for settings and practice history.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};
use swiftread_core::{
    history::{HistoryStore, SessionRecord},
    settings::{SettingsStore, TrainerSettings},
};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(#[from] io::Error),
    #[error("storage encoding: {0}")]
    Json(#[from] serde_json::Error),
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StorageError> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Write-then-rename so a crash mid-write never truncates the stored
/// file.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let staging = path.with_extension("tmp");
    fs::write(&staging, serde_json::to_vec_pretty(value)?)?;
    fs::rename(&staging, path)?;
    Ok(())
}

pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsStore for JsonSettingsStore {
    type Error = StorageError;

    fn load(&mut self) -> Result<Option<TrainerSettings>, Self::Error> {
        read_json(&self.path)
    }

    fn save(&mut self, settings: &TrainerSettings) -> Result<(), Self::Error> {
        write_json(&self.path, settings)
    }
}

/// History as one JSON array, rewritten on append. Session records are
/// small and infrequent enough that this stays cheap.
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HistoryStore for JsonHistoryStore {
    type Error = StorageError;

    fn load(&mut self) -> Result<Vec<SessionRecord>, Self::Error> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }

    fn append(&mut self, record: &SessionRecord) -> Result<(), Self::Error> {
        let mut records = self.load()?;
        records.push(record.clone());
        write_json(&self.path, &records)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests;

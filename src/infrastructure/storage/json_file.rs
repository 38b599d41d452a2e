//! JSON file note storage adapter

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{NoteStorage, StorageError};
use crate::domain::notes::Note;

/// Fixed slot name the collection is stored under
pub const NOTES_KEY: &str = "notes";

/// Single-slot JSON file store.
///
/// The entire collection lives in one file named after the slot key
/// (`notes.json`) and is always read and written whole. There is no
/// schema version in the blob: a file that does not decode as an array
/// of valid note records loads as an empty collection, with a warning
/// logged so the reset is visible.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store under the platform data directory
    pub fn new() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("vox-notes");

        Self::in_dir(data_dir)
    }

    /// Create a store keeping the slot under the given directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(format!("{}.json", NOTES_KEY)),
        }
    }

    /// Get the slot path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode a stored blob, degrading to empty on any shape mismatch
    fn decode(content: &str) -> Vec<Note> {
        match serde_json::from_str(content) {
            Ok(notes) => notes,
            Err(err) => {
                log::warn!("Stored notes are unreadable, starting empty: {}", err);
                Vec::new()
            }
        }
    }

    /// Encode the collection for storage
    fn encode(notes: &[Note]) -> Result<String, StorageError> {
        serde_json::to_string(notes).map_err(|e| StorageError::WriteFailed(e.to_string()))
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoteStorage for JsonFileStore {
    async fn load(&self) -> Result<Vec<Note>, StorageError> {
        if !self.path.exists() {
            // First run: nothing stored yet
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StorageError::ReadFailed(e.to_string()))?;

        Ok(Self::decode(&content))
    }

    async fn save(&self, notes: &[Note]) -> Result<(), StorageError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        }

        let content = Self::encode(notes)?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        Ok(())
    }
}

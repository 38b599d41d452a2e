//! In-memory note storage adapter
//!
//! Backs use case tests that should not touch disk.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{NoteStorage, StorageError};
use crate::domain::notes::Note;

/// In-memory store implementing the full port contract over a Vec
#[derive(Default)]
pub struct InMemoryStore {
    notes: Mutex<Vec<Note>>,
}

impl InMemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with a collection
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: Mutex::new(notes),
        }
    }

    /// Snapshot of the stored collection
    pub fn snapshot(&self) -> Vec<Note> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Note>> {
        self.notes.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl NoteStorage for InMemoryStore {
    async fn load(&self) -> Result<Vec<Note>, StorageError> {
        Ok(self.lock().clone())
    }

    async fn save(&self, notes: &[Note]) -> Result<(), StorageError> {
        *self.lock() = notes.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notes::NoteContent;

    fn note(text: &str) -> Note {
        Note::new(NoteContent::new(text).unwrap())
    }

    #[tokio::test]
    async fn starts_empty() {
        let store = InMemoryStore::new();
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn with_notes_preloads_the_collection() {
        let store = InMemoryStore::with_notes(vec![note("seeded")]);
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].content.as_str(), "seeded");
    }

    #[tokio::test]
    async fn save_replaces_the_whole_collection() {
        let store = InMemoryStore::with_notes(vec![note("a"), note("b")]);

        let replacement = vec![note("only")];
        store.save(&replacement).await.unwrap();

        assert_eq!(store.snapshot(), replacement);
    }
}

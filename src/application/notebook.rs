//! Note store use case

use crate::domain::notes::{Note, NoteContent, NoteId};

use super::ports::{NoteStorage, StorageError};

/// The canonical note collection for one application run.
///
/// Owns the in-memory list and an injected storage port, and keeps the two
/// views from ever diverging: each mutation derives the next collection,
/// persists it, and only then commits it in memory, so a failed write
/// leaves the observable state exactly as it was.
///
/// Ordering is insertion order, newest first: `create` prepends.
pub struct Notebook<S: NoteStorage> {
    storage: S,
    notes: Vec<Note>,
}

impl<S: NoteStorage> Notebook<S> {
    /// Open the notebook, loading whatever the storage holds.
    /// Missing or unusable stored data starts an empty collection; only
    /// genuine read failures propagate.
    pub async fn open(storage: S) -> Result<Self, StorageError> {
        let notes = storage.load().await?;
        Ok(Self { storage, notes })
    }

    /// Get the current collection, newest first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Create a note from content, prepend it, and persist.
    ///
    /// # Returns
    /// The stored note (the new head of the collection)
    pub async fn create(&mut self, content: NoteContent) -> Result<&Note, StorageError> {
        let mut next = vec![Note::new(content)];
        next.extend_from_slice(&self.notes);

        self.storage.save(&next).await?;
        self.notes = next;
        Ok(&self.notes[0])
    }

    /// Delete the note with the given id, if present, and persist.
    ///
    /// Idempotent: an absent id is not an error. The collection is
    /// rewritten either way, so the slot always mirrors the result of
    /// the filter.
    ///
    /// # Returns
    /// Whether a note was actually removed
    pub async fn delete(&mut self, id: &NoteId) -> Result<bool, StorageError> {
        let next: Vec<Note> = self
            .notes
            .iter()
            .filter(|note| &note.id != id)
            .cloned()
            .collect();
        let removed = next.len() != self.notes.len();

        self.storage.save(&next).await?;
        self.notes = next;
        Ok(removed)
    }
}

//! Note persistence port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notes::Note;

/// Storage errors
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Failed to read stored notes: {0}")]
    ReadFailed(String),

    #[error("Failed to persist notes: {0}")]
    WriteFailed(String),
}

/// Port for persisting the note collection.
///
/// The collection lives under a single fixed slot and is always written
/// whole: there are no per-note records, no partial updates, and no
/// versioning. Callers await `save` inline after every mutation, so an
/// `Ok` return means the slot already reflects the given collection.
#[async_trait]
pub trait NoteStorage: Send + Sync {
    /// Load the persisted collection.
    ///
    /// A missing slot yields an empty collection, and so does a malformed
    /// or shape-mismatched blob (implementations log a warning for the
    /// latter). Only genuine read failures are errors.
    async fn load(&self) -> Result<Vec<Note>, StorageError>;

    /// Serialize and write the entire collection to the slot.
    async fn save(&self, notes: &[Note]) -> Result<(), StorageError>;
}

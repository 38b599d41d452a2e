//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod note_storage;
pub mod notifier;
pub mod speech;

// Re-export common types
pub use config::ConfigStore;
pub use note_storage::{NoteStorage, StorageError};
pub use notifier::{NotificationError, NotificationIcon, Notifier};
pub use speech::{SpeechError, SpeechEvent, SpeechRecognizer, SpeechSession};

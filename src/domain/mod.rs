//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod composer;
pub mod config;
pub mod dictation;
pub mod error;
pub mod notes;

// Re-export common types
pub use composer::{Composer, ComposerState};
pub use config::AppConfig;
pub use dictation::{DictationSession, DictationState, Locale, RecognitionSettings};
pub use error::*;
pub use notes::{Note, NoteContent, NoteId};

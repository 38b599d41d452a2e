//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod compose;
pub mod notebook;
pub mod ports;

// Re-export use cases
pub use compose::{
    ComposeError, ComposeNoteUseCase, ComposeOutcome, DictateCallbacks, DictateInput,
};
pub use notebook::Notebook;

//! Note storage infrastructure module
//!
//! Provides the single-slot JSON file store (primary) and an in-memory
//! store for tests.

mod json_file;
mod memory;

pub use json_file::{JsonFileStore, NOTES_KEY};
pub use memory::InMemoryStore;

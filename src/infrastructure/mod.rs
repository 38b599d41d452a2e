//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like speech recognition
//! commands, the filesystem, and desktop notifications.

pub mod config;
pub mod notification;
pub mod speech;
pub mod storage;

// Re-export adapters
pub use config::XdgConfigStore;
pub use notification::NotifyRustNotifier;
pub use speech::CommandRecognizer;
pub use storage::{InMemoryStore, JsonFileStore};

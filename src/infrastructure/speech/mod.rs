//! Speech recognition infrastructure module
//!
//! Bridges dictation onto an external streaming speech-to-text command.

mod command;

pub use command::CommandRecognizer;

//! VoxNotes - voice-first note taking for the terminal
//!
//! This crate provides the core functionality for capturing notes by
//! keyboard or speech dictation and keeping the whole collection in a
//! single JSON document on disk.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core business logic, value objects, entities, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (speech command, JSON file store, etc.)
//! - **CLI**: Command-line interface, argument parsing, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

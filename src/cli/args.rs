//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::dictation::RecognitionSettings;

/// VoxNotes - voice-first note taking for the terminal
#[derive(Parser, Debug)]
#[command(name = "vox-notes")]
#[command(version = "0.1.0")]
#[command(about = "Capture, search and manage notes by keyboard or voice")]
#[command(long_about = None)]
pub struct Cli {
    /// Directory where the note collection is stored
    #[arg(long, value_name = "DIR", env = "VOX_NOTES_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Show desktop notifications
    #[arg(short = 'n', long, global = true)]
    pub notify: bool,

    /// Subcommand (lists all notes when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a note from an argument or stdin
    Add {
        /// Note text (read from stdin when omitted)
        text: Option<String>,
    },
    /// Record a note by voice
    Dictate {
        /// Recognition locale (e.g. pt-BR, en-US)
        #[arg(short = 'l', long, value_name = "LOCALE")]
        locale: Option<String>,

        /// Speech recognition command to spawn
        #[arg(long, value_name = "CMD")]
        speech_command: Option<String>,
    },
    /// Search notes by content
    Search {
        /// Case-insensitive text to look for (empty shows everything)
        query: Option<String>,
    },
    /// Delete a note by id
    Delete {
        /// Note id as shown in the card listing
        id: String,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed dictation options
#[derive(Debug, Clone)]
pub struct DictateOptions {
    pub settings: RecognitionSettings,
    pub speech_command: String,
    pub notify: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["locale", "notify", "data_dir", "speech.command"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

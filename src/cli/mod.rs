//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, signal handling,
//! and the main application runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod dictate_app;
pub mod presenter;
pub mod signals;

// Re-export commonly used types
pub use app::{
    run_add, run_delete, run_list, run_search, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR,
};
pub use args::{Cli, Commands, ConfigAction, DictateOptions};
pub use dictate_app::run_dictate;
pub use presenter::Presenter;

//! Configuration storage adapters

mod xdg;

// Re-export adapters
pub use xdg::XdgConfigStore;

//! Signal handling for dictation sessions

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shutdown signal for a dictation session.
///
/// Ctrl+C during dictation means "stop listening and keep the draft",
/// not "kill the process", so the handler only flips a flag the
/// dictation loop polls.
pub struct ShutdownSignal {
    shutdown: Arc<AtomicBool>,
}

impl ShutdownSignal {
    /// Create a new shutdown signal handler with its own flag
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a handler that flips an externally owned flag
    pub fn with_flag(flag: Arc<AtomicBool>) -> Self {
        Self { shutdown: flag }
    }

    /// Get a clone of the shutdown flag
    pub fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    /// Check if shutdown was requested
    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Setup signal handler
    pub async fn setup(&self) -> Result<(), std::io::Error> {
        let shutdown = Arc::clone(&self.shutdown);

        // Handle Ctrl+C (cross-platform)
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => shutdown.store(true, Ordering::SeqCst),
                Err(err) => log::warn!("Ctrl+C handler unavailable: {}", err),
            }
        });

        Ok(())
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shutdown_signal_default_is_false() {
        let signal = ShutdownSignal::new();
        assert!(!signal.is_shutdown());
    }

    #[test]
    fn shutdown_signal_flag_can_be_set() {
        let signal = ShutdownSignal::new();
        let flag = signal.flag();
        flag.store(true, Ordering::SeqCst);
        assert!(signal.is_shutdown());
    }

    #[test]
    fn with_flag_shares_the_caller_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        let signal = ShutdownSignal::with_flag(Arc::clone(&flag));
        flag.store(true, Ordering::SeqCst);
        assert!(signal.is_shutdown());
    }
}

//! Speech recognition port interfaces

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::dictation::RecognitionSettings;

/// Speech recognition errors
#[derive(Debug, Clone, Error)]
pub enum SpeechError {
    #[error("Speech recognition is not available: {0}")]
    Unavailable(String),

    #[error("Failed to start recognition session: {0}")]
    StartFailed(String),

    #[error("Recognition session failed: {0}")]
    SessionFailed(String),
}

/// Event emitted by a live recognition session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    /// The full transcript accumulated since the session opened.
    /// Consumers replace their draft with it; they never append.
    Transcript(String),

    /// A non-fatal recognition fault. The session may keep running or
    /// end afterwards; already-captured text is unaffected either way.
    Error(String),
}

/// Port for opening speech recognition sessions
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Verify the recognition capability exists in this environment.
    ///
    /// # Returns
    /// Ok(()) when sessions can be opened; `SpeechError::Unavailable`
    /// describing what is missing otherwise
    async fn check_available(&self) -> Result<(), SpeechError>;

    /// Open one continuous recognition session.
    ///
    /// # Arguments
    /// * `settings` - Locale and session shape for the recognizer
    ///
    /// # Returns
    /// A live session streaming `SpeechEvent`s, or an error
    async fn open(
        &self,
        settings: &RecognitionSettings,
    ) -> Result<Box<dyn SpeechSession>, SpeechError>;
}

/// A live recognition session.
/// Owned by exactly one compose operation and torn down when it ends.
#[async_trait]
pub trait SpeechSession: Send {
    /// Wait for the next recognition event.
    ///
    /// Callers may poll the returned future under a timeout, so
    /// implementations must tolerate it being dropped before completion
    /// without losing events.
    ///
    /// # Returns
    /// `None` once the session has ended; after `stop` it always
    /// returns `None`
    async fn next_event(&mut self) -> Option<SpeechEvent>;

    /// Close the session. No further events are delivered afterwards.
    async fn stop(&mut self) -> Result<(), SpeechError>;
}

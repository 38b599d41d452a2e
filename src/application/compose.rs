//! Compose note use case

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::time::timeout;

use crate::domain::composer::Composer;
use crate::domain::dictation::{DictationSession, InvalidStateTransition, RecognitionSettings};
use crate::domain::notes::Note;

use super::notebook::Notebook;
use super::ports::{
    NotificationIcon, Notifier, NoteStorage, SpeechError, SpeechEvent, SpeechRecognizer,
    StorageError,
};

/// How often the dictation loop re-checks the stop flag while waiting
/// for recognition events
const STOP_POLL_INTERVAL_MS: u64 = 100;

/// Title used for desktop notifications
pub const NOTIFICATION_TITLE: &str = "Vox Notes";

/// Errors from the compose use case
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("Speech capture failed: {0}")]
    Speech(#[from] SpeechError),

    #[error("Could not persist notes: {0}")]
    Storage(#[from] StorageError),

    #[error("Dictation session error: {0}")]
    Session(#[from] InvalidStateTransition),
}

/// Input parameters for a dictation session
#[derive(Debug, Clone, Default)]
pub struct DictateInput {
    /// Recognition session settings (locale, continuity, interim results)
    pub settings: RecognitionSettings,
    /// Whether to show desktop notifications for session milestones
    pub enable_notify: bool,
}

/// Result of submitting a draft
#[derive(Debug, Clone)]
pub enum ComposeOutcome {
    /// The draft was non-empty and is now stored
    Saved(Note),
    /// The draft was empty at submit time; nothing was created
    EmptyDraft,
}

/// Callbacks for dictation progress updates
#[derive(Default)]
pub struct DictateCallbacks {
    /// Called once the recognition session is live
    pub on_session_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called with the full draft each time a transcript replaces it
    pub on_transcript: Option<Box<dyn Fn(&str) + Send + Sync>>,
    /// Called after the session has closed, before the draft is submitted
    pub on_session_end: Option<Box<dyn Fn() + Send + Sync>>,
}

/// Use case for composing a note, typed or dictated.
///
/// Both entry paths run the same tail: the draft goes through the
/// composer's empty-rejection rule, and a surviving draft becomes a stored
/// note. Dictation additionally owns a recognition session for its
/// duration and treats every transcript event as a full replacement of
/// the draft.
pub struct ComposeNoteUseCase<R, N>
where
    R: SpeechRecognizer,
    N: Notifier,
{
    recognizer: R,
    notifier: N,
    stop_flag: Arc<AtomicBool>,
}

impl<R, N> ComposeNoteUseCase<R, N>
where
    R: SpeechRecognizer,
    N: Notifier,
{
    /// Create a new use case instance
    pub fn new(recognizer: R, notifier: N) -> Self {
        Self {
            recognizer,
            notifier,
            stop_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the stop flag for external signal handling
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop_flag)
    }

    /// Signal the dictation loop to wrap up
    pub fn stop_early(&self) {
        self.stop_flag.store(true, Ordering::SeqCst);
    }

    /// Typed path: place text in the draft and submit it.
    ///
    /// Empty text is a silent no-op (`ComposeOutcome::EmptyDraft`), the
    /// same rule dictation ends with.
    pub async fn submit_text<S: NoteStorage>(
        &self,
        notebook: &mut Notebook<S>,
        text: &str,
        enable_notify: bool,
    ) -> Result<ComposeOutcome, ComposeError> {
        let mut composer = Composer::new();
        composer.replace_draft(text);
        self.submit_draft(notebook, composer, enable_notify).await
    }

    /// Dictated path: run a recognition session until the stop flag is
    /// set or the event stream ends, then submit the draft.
    pub async fn dictate<S: NoteStorage>(
        &self,
        notebook: &mut Notebook<S>,
        input: DictateInput,
        callbacks: DictateCallbacks,
    ) -> Result<ComposeOutcome, ComposeError> {
        // Reset stop flag
        self.stop_flag.store(false, Ordering::SeqCst);

        // Capability gate: fail visibly, change nothing. The alert is
        // attempted regardless of the notify preference.
        if let Err(err) = self.recognizer.check_available().await {
            let _ = self
                .notifier
                .notify(NOTIFICATION_TITLE, &err.to_string(), NotificationIcon::Error)
                .await;
            return Err(err.into());
        }

        let mut session = self.recognizer.open(&input.settings).await?;

        let mut dictation = DictationSession::new();
        dictation.start()?;

        if input.enable_notify {
            let _ = self
                .notifier
                .notify(
                    NOTIFICATION_TITLE,
                    "Listening...",
                    NotificationIcon::Recording,
                )
                .await;
        }

        if let Some(ref cb) = callbacks.on_session_start {
            cb();
        }

        // The session is the draft's sole writer while recording: each
        // transcript event carries the full text so far and overwrites
        // the buffer.
        let mut composer = Composer::new();
        composer.start_editing();

        loop {
            if self.stop_flag.load(Ordering::SeqCst) {
                break;
            }

            match timeout(
                Duration::from_millis(STOP_POLL_INTERVAL_MS),
                session.next_event(),
            )
            .await
            {
                // Timed out waiting; re-check the stop flag
                Err(_) => continue,
                // Stream ended on its own
                Ok(None) => break,
                Ok(Some(SpeechEvent::Transcript(text))) => {
                    composer.replace_draft(text);
                    if let Some(ref cb) = callbacks.on_transcript {
                        cb(composer.draft());
                    }
                }
                Ok(Some(SpeechEvent::Error(message))) => {
                    // Non-fatal: captured text stays, session may go on
                    log::warn!("Recognition error: {}", message);
                }
            }
        }

        if let Err(err) = session.stop().await {
            log::warn!("Failed to close recognition session: {}", err);
        }
        dictation.stop()?;

        if let Some(ref cb) = callbacks.on_session_end {
            cb();
        }

        self.submit_draft(notebook, composer, input.enable_notify)
            .await
    }

    /// Shared tail: submit the draft under the empty-rejection rule and
    /// store the surviving content.
    async fn submit_draft<S: NoteStorage>(
        &self,
        notebook: &mut Notebook<S>,
        mut composer: Composer,
        enable_notify: bool,
    ) -> Result<ComposeOutcome, ComposeError> {
        let content = match composer.submit() {
            Some(content) => content,
            None => return Ok(ComposeOutcome::EmptyDraft),
        };

        let note = notebook.create(content).await?.clone();

        if enable_notify {
            let _ = self
                .notifier
                .notify(
                    NOTIFICATION_TITLE,
                    "Note created successfully",
                    NotificationIcon::Success,
                )
                .await;
        }

        Ok(ComposeOutcome::Saved(note))
    }
}

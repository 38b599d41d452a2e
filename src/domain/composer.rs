//! Note composer state machine

use std::fmt;

use crate::domain::notes::NoteContent;

/// Composer states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComposerState {
    /// No draft in progress; the onboarding prompt is shown
    #[default]
    Onboarding,
    /// A draft is being written (typed or dictated)
    Editing,
}

impl ComposerState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Onboarding => "onboarding",
            Self::Editing => "editing",
        }
    }
}

impl fmt::Display for ComposerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Draft buffer entity.
/// Owns the in-progress note text and the onboarding/editing state.
///
/// State machine:
///   ONBOARDING -> EDITING (start_editing, or a non-empty replace_draft)
///   EDITING -> ONBOARDING (successful submit, or replace_draft(""))
///
/// Draft updates are full replacements: during dictation the recognition
/// adapter delivers the complete transcript so far and is the buffer's sole
/// writer, so each update overwrites whatever was there before.
#[derive(Debug, Default)]
pub struct Composer {
    state: ComposerState,
    draft: String,
}

impl Composer {
    /// Create a composer showing the onboarding prompt
    pub fn new() -> Self {
        Self {
            state: ComposerState::Onboarding,
            draft: String::new(),
        }
    }

    /// Get the current state
    pub fn state(&self) -> ComposerState {
        self.state
    }

    /// Get the current draft text
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Check if the onboarding prompt is showing
    pub fn is_onboarding(&self) -> bool {
        self.state == ComposerState::Onboarding
    }

    /// Check if a draft is in progress
    pub fn is_editing(&self) -> bool {
        self.state == ComposerState::Editing
    }

    /// Enter EDITING explicitly (the "write a note" action, or the start
    /// of a dictation session before any transcript has arrived)
    pub fn start_editing(&mut self) {
        self.state = ComposerState::Editing;
    }

    /// Replace the entire draft buffer.
    /// An empty replacement returns to ONBOARDING; a non-empty one enters
    /// EDITING. Buffer emptiness is the onboarding signal.
    pub fn replace_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.state = if self.draft.is_empty() {
            ComposerState::Onboarding
        } else {
            ComposerState::Editing
        };
    }

    /// Submit the draft for saving.
    ///
    /// An empty draft is silently rejected: `None` is returned and neither
    /// the draft nor the state changes. A non-empty draft yields its
    /// content, clears the buffer, and returns to ONBOARDING.
    pub fn submit(&mut self) -> Option<NoteContent> {
        let content = NoteContent::new(self.draft.as_str()).ok()?;
        self.draft.clear();
        self.state = ComposerState::Onboarding;
        Some(content)
    }
}

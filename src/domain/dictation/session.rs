//! Dictation session state machine

use std::fmt;
use thiserror::Error;

/// Dictation states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DictationState {
    #[default]
    Idle,
    Recording,
}

impl DictationState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Recording => "recording",
        }
    }
}

impl fmt::Display for DictationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while in {current_state} state")]
pub struct InvalidStateTransition {
    pub current_state: DictationState,
    pub action: String,
}

/// Dictation session entity.
/// Tracks whether speech capture is live for the current compose operation.
/// The session is owned by that operation: constructed when dictation
/// begins and torn down when it ends, never shared module state.
///
/// State machine:
///   IDLE -> RECORDING (start)
///   RECORDING -> IDLE (stop)
///
/// `start` is reached only after the recognition capability check has
/// passed; an unavailable capability aborts before any transition.
#[derive(Debug, Default)]
pub struct DictationSession {
    state: DictationState,
}

impl DictationSession {
    /// Create a new session in idle state
    pub fn new() -> Self {
        Self {
            state: DictationState::Idle,
        }
    }

    /// Get the current state
    pub fn state(&self) -> DictationState {
        self.state
    }

    /// Check if currently idle
    pub fn is_idle(&self) -> bool {
        self.state == DictationState::Idle
    }

    /// Check if currently recording
    pub fn is_recording(&self) -> bool {
        self.state == DictationState::Recording
    }

    /// Transition from IDLE to RECORDING
    pub fn start(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != DictationState::Idle {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "start dictation".to_string(),
            });
        }
        self.state = DictationState::Recording;
        Ok(())
    }

    /// Transition from RECORDING to IDLE
    pub fn stop(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != DictationState::Recording {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "stop dictation".to_string(),
            });
        }
        self.state = DictationState::Idle;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_idle() {
        let session = DictationSession::new();
        assert!(session.is_idle());
        assert!(!session.is_recording());
    }

    #[test]
    fn start_from_idle() {
        let mut session = DictationSession::new();
        assert!(session.start().is_ok());
        assert!(session.is_recording());
    }

    #[test]
    fn start_while_recording_fails() {
        let mut session = DictationSession::new();
        session.start().unwrap();

        let err = session.start().unwrap_err();
        assert_eq!(err.current_state, DictationState::Recording);
        assert!(err.action.contains("start dictation"));
    }

    #[test]
    fn stop_from_recording() {
        let mut session = DictationSession::new();
        session.start().unwrap();

        assert!(session.stop().is_ok());
        assert!(session.is_idle());
    }

    #[test]
    fn stop_from_idle_fails() {
        let mut session = DictationSession::new();

        let err = session.stop().unwrap_err();
        assert_eq!(err.current_state, DictationState::Idle);
    }

    #[test]
    fn full_cycle() {
        let mut session = DictationSession::new();
        assert!(session.is_idle());

        session.start().unwrap();
        assert!(session.is_recording());

        session.stop().unwrap();
        assert!(session.is_idle());

        // Can start another cycle
        session.start().unwrap();
        assert!(session.is_recording());
    }

    #[test]
    fn state_display() {
        assert_eq!(DictationState::Idle.to_string(), "idle");
        assert_eq!(DictationState::Recording.to_string(), "recording");
    }

    #[test]
    fn error_display() {
        let err = InvalidStateTransition {
            current_state: DictationState::Recording,
            action: "start dictation".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("start dictation"));
        assert!(msg.contains("recording"));
    }
}

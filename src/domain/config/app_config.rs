//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::dictation::Locale;

/// Default external speech-to-text command
pub const DEFAULT_SPEECH_COMMAND: &str = "whisper-stream";

/// Speech capture configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeechConfig {
    pub command: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub locale: Option<String>,
    pub notify: Option<bool>,
    pub data_dir: Option<String>,
    pub speech: Option<SpeechConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            locale: Some(Locale::default().as_str().to_string()),
            notify: Some(false),
            data_dir: None,
            speech: Some(SpeechConfig {
                command: Some(DEFAULT_SPEECH_COMMAND.to_string()),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            locale: other.locale.or(self.locale),
            notify: other.notify.or(self.notify),
            data_dir: other.data_dir.or(self.data_dir),
            speech: Self::merge_speech_config(self.speech, other.speech),
        }
    }

    /// Merge speech config sections
    fn merge_speech_config(
        base: Option<SpeechConfig>,
        other: Option<SpeechConfig>,
    ) -> Option<SpeechConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(SpeechConfig {
                command: o.command.or(b.command),
            }),
        }
    }

    /// Get notify setting, or false if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }

    /// Get speech command preference, or the bundled default if not set
    pub fn speech_command_or_default(&self) -> &str {
        self.speech
            .as_ref()
            .and_then(|s| s.command.as_deref())
            .unwrap_or(DEFAULT_SPEECH_COMMAND)
    }
}

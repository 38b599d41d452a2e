//! Dictation domain module

mod locale;
mod session;
mod settings;

pub use locale::{Locale, DEFAULT_LOCALE};
pub use session::{DictationSession, DictationState, InvalidStateTransition};
pub use settings::RecognitionSettings;

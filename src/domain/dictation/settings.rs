//! Recognition session settings

use super::locale::Locale;

/// Settings for one continuous recognition session.
///
/// The defaults describe the only mode the application uses: a continuous
/// session that streams interim results with a single hypothesis per
/// recognized segment. Adapters may reject settings they cannot honor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionSettings {
    /// Locale the recognizer should listen in
    pub locale: Locale,
    /// Keep capturing across pauses instead of stopping at the first one
    pub continuous: bool,
    /// Deliver partial transcripts while recognition is still in progress
    pub interim_results: bool,
    /// Hypotheses per recognized segment
    pub max_alternatives: u8,
}

impl RecognitionSettings {
    /// Continuous interim-results session in the given locale
    pub fn continuous(locale: Locale) -> Self {
        Self {
            locale,
            continuous: true,
            interim_results: true,
            max_alternatives: 1,
        }
    }
}

impl Default for RecognitionSettings {
    fn default() -> Self {
        Self::continuous(Locale::default())
    }
}

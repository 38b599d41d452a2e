//! Note content value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::EmptyContentError;

/// Value object for a note's text body.
/// Guaranteed non-empty: validation runs on construction and on
/// deserialization, so empty content cannot enter the system through
/// either path. Whitespace-only content is accepted; only the empty
/// string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NoteContent(String);

impl NoteContent {
    /// Create content from text, rejecting the empty string
    pub fn new(text: impl Into<String>) -> Result<Self, EmptyContentError> {
        let text = text.into();
        if text.is_empty() {
            return Err(EmptyContentError);
        }
        Ok(Self(text))
    }

    /// Get the text as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NoteContent {
    type Error = EmptyContentError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl From<NoteContent> for String {
    fn from(content: NoteContent) -> Self {
        content.0
    }
}

impl AsRef<str> for NoteContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_text() {
        let content = NoteContent::new("Buy milk").unwrap();
        assert_eq!(content.as_str(), "Buy milk");
    }

    #[test]
    fn rejects_empty_string() {
        assert!(NoteContent::new("").is_err());
    }

    #[test]
    fn accepts_whitespace_only() {
        // Emptiness is exact, not trimmed
        let content = NoteContent::new("   ").unwrap();
        assert_eq!(content.as_str(), "   ");
    }

    #[test]
    fn accepts_multiline_and_unicode() {
        let content = NoteContent::new("Comprar café\nàs 9h").unwrap();
        assert_eq!(content.as_str(), "Comprar café\nàs 9h");
    }

    #[test]
    fn serializes_as_plain_string() {
        let content = NoteContent::new("hello").unwrap();
        let json = serde_json::to_string(&content).unwrap();
        assert_eq!(json, "\"hello\"");
    }

    #[test]
    fn deserialization_rejects_empty() {
        let result: Result<NoteContent, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn display_matches_inner_text() {
        let content = NoteContent::new("note text").unwrap();
        assert_eq!(content.to_string(), "note text");
    }
}

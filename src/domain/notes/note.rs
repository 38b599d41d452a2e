//! Note entity and identifier

use std::fmt;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::content::NoteContent;

/// Opaque unique identifier for a note.
/// Generated from a UUID v4 at creation; immutable afterwards. The id is
/// the stable key for deletion and rendering, and is serialized as a plain
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Generate a fresh unique id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for NoteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for NoteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single user-authored note.
///
/// The creation timestamp is captured as an RFC 3339 string and treated as
/// opaque from then on: it is stored, reloaded, and displayed verbatim but
/// never parsed back into a date type and never used for ordering. Ordering
/// lives in the collection (newest first), not in the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    pub content: NoteContent,
}

impl Note {
    /// Create a note with a generated id and the current timestamp
    pub fn new(content: NoteContent) -> Self {
        Self {
            id: NoteId::generate(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(text: &str) -> NoteContent {
        NoteContent::new(text).unwrap()
    }

    #[test]
    fn new_notes_get_unique_ids() {
        let a = Note::new(content("first"));
        let b = Note::new(content("second"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn generated_id_is_not_empty() {
        let id = NoteId::generate();
        assert!(!id.as_str().is_empty());
    }

    #[test]
    fn id_round_trips_through_display() {
        let id = NoteId::from("abc-123");
        assert_eq!(id.to_string(), "abc-123");
        assert_eq!(NoteId::from(id.to_string()), id);
    }

    #[test]
    fn serializes_with_camel_case_timestamp_key() {
        let note = Note::new(content("hello"));
        let json = serde_json::to_value(&note).unwrap();
        assert!(json.get("id").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json.get("content").unwrap(), "hello");
    }

    #[test]
    fn deserializes_from_stored_shape() {
        let json = r#"{"id":"n-1","createdAt":"2024-05-01T12:00:00.000Z","content":"Buy milk"}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id, NoteId::from("n-1"));
        assert_eq!(note.created_at, "2024-05-01T12:00:00.000Z");
        assert_eq!(note.content.as_str(), "Buy milk");
    }

    #[test]
    fn timestamp_survives_round_trip_verbatim() {
        let note = Note::new(content("x"));
        let json = serde_json::to_string(&note).unwrap();
        let back: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(back, note);
    }
}

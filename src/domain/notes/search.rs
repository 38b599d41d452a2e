//! Case-insensitive note search

use super::note::Note;

/// Filter a collection by case-insensitive substring match on content.
///
/// Pure projection: the result is a subsequence of the input preserving
/// relative order, and the empty query returns the entire collection.
/// Matching lowercases both sides with Unicode-aware `str::to_lowercase`.
/// No caching; callers re-run the filter on every query change.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    if query.is_empty() {
        return notes.iter().collect();
    }

    let needle = query.to_lowercase();
    notes
        .iter()
        .filter(|note| note.content.as_str().to_lowercase().contains(&needle))
        .collect()
}

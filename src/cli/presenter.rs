//! CLI presenter for output formatting

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::Note;

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
    is_spinner_active: Arc<AtomicBool>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self {
            spinner: None,
            is_spinner_active: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
        self.is_spinner_active.store(true, Ordering::SeqCst);
    }

    /// Update spinner message
    pub fn update_spinner(&self, message: &str) {
        if let Some(ref spinner) = self.spinner {
            spinner.set_message(message.to_string());
        }
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✓".green(), message));
        }
        self.is_spinner_active.store(false, Ordering::SeqCst);
    }

    /// Mark spinner as failed and finish
    pub fn spinner_fail(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✗".red(), message));
        }
        self.is_spinner_active.store(false, Ordering::SeqCst);
    }

    /// Stop spinner without status
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
        self.is_spinner_active.store(false, Ordering::SeqCst);
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout (the actual command payload)
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Format a note as a card: header line with id and timestamp,
    /// content indented below
    pub fn format_card(&self, note: &Note) -> String {
        let mut card = format!(
            "{} {}  {}\n",
            "●".cyan(),
            note.id.as_str().dimmed(),
            note.created_at.dimmed()
        );
        for line in note.content.as_str().lines() {
            card.push_str(&format!("  {}\n", line));
        }
        card
    }

    /// Print a note card to stdout
    pub fn note_card(&self, note: &Note) {
        print!("{}", self.format_card(note));
    }

    /// Print the empty-collection hint
    pub fn empty_state(&self) {
        self.info("No notes yet.");
        eprintln!("  Add one with `vox-notes add \"...\"` or record one with `vox-notes dictate`.");
    }

    /// Format a transcript preview for the spinner, keeping the tail
    /// of long drafts visible
    pub fn format_preview(&self, text: &str, max_chars: usize) -> String {
        let count = text.chars().count();
        if count <= max_chars {
            return text.to_string();
        }
        let tail: String = text.chars().skip(count - max_chars).collect();
        format!("…{}", tail)
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteContent;

    fn note(text: &str) -> Note {
        Note::new(NoteContent::new(text).unwrap())
    }

    #[test]
    fn card_shows_id_timestamp_and_content() {
        let presenter = Presenter::new();
        let note = note("Buy milk");
        let card = presenter.format_card(&note);
        assert!(card.contains(note.id.as_str()));
        assert!(card.contains(&note.created_at));
        assert!(card.contains("Buy milk"));
    }

    #[test]
    fn card_indents_every_content_line() {
        let presenter = Presenter::new();
        let card = presenter.format_card(&note("first line\nsecond line"));
        assert!(card.contains("  first line"));
        assert!(card.contains("  second line"));
    }

    #[test]
    fn preview_keeps_short_text() {
        let presenter = Presenter::new();
        assert_eq!(presenter.format_preview("hello", 10), "hello");
    }

    #[test]
    fn preview_truncates_to_tail() {
        let presenter = Presenter::new();
        let preview = presenter.format_preview("one two three four", 5);
        assert_eq!(preview, "… four");
    }

    #[test]
    fn preview_counts_chars_not_bytes() {
        let presenter = Presenter::new();
        let preview = presenter.format_preview("ação café", 4);
        assert_eq!(preview, "…café");
    }
}

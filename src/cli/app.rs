//! Notebook command runners

use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;

use crate::application::compose::NOTIFICATION_TITLE;
use crate::application::ports::{ConfigStore, NotificationIcon, Notifier, StorageError};
use crate::application::{ComposeNoteUseCase, ComposeOutcome, Notebook};
use crate::domain::config::AppConfig;
use crate::domain::notes::search::filter_notes;
use crate::domain::NoteId;
use crate::infrastructure::notification::create_notifier;
use crate::infrastructure::{CommandRecognizer, JsonFileStore, XdgConfigStore};

use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// List every note as a card, newest first
pub async fn run_list(config: &AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let notebook = match open_notebook(config).await {
        Ok(notebook) => notebook,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if notebook.notes().is_empty() {
        presenter.empty_state();
        return ExitCode::from(EXIT_SUCCESS);
    }

    for note in notebook.notes() {
        presenter.note_card(note);
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Create a note from the argument or piped stdin
pub async fn run_add(config: &AppConfig, text: Option<String>) -> ExitCode {
    let presenter = Presenter::new();

    let text = match text {
        Some(text) => text,
        None => match read_stdin_text() {
            Ok(Some(text)) => text,
            Ok(None) => {
                presenter
                    .error("No note text given. Pass it as an argument or pipe it on stdin.");
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
            Err(e) => {
                presenter.error(&format!("Failed to read stdin: {}", e));
                return ExitCode::from(EXIT_ERROR);
            }
        },
    };

    let mut notebook = match open_notebook(config).await {
        Ok(notebook) => notebook,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let recognizer = CommandRecognizer::new(config.speech_command_or_default());
    let use_case = ComposeNoteUseCase::new(recognizer, create_notifier());

    match use_case
        .submit_text(&mut notebook, &text, config.notify_or_default())
        .await
    {
        Ok(ComposeOutcome::Saved(note)) => {
            presenter.success("Note created");
            presenter.note_card(&note);
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(ComposeOutcome::EmptyDraft) => {
            presenter.warn("Nothing to save.");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Show the notes whose content contains the query
pub async fn run_search(config: &AppConfig, query: Option<String>) -> ExitCode {
    let presenter = Presenter::new();
    let query = query.unwrap_or_default();

    let notebook = match open_notebook(config).await {
        Ok(notebook) => notebook,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if notebook.notes().is_empty() {
        presenter.empty_state();
        return ExitCode::from(EXIT_SUCCESS);
    }

    let matches = filter_notes(notebook.notes(), &query);
    if matches.is_empty() {
        presenter.info(&format!("No notes match \"{}\".", query));
        return ExitCode::from(EXIT_SUCCESS);
    }

    for note in matches {
        presenter.note_card(note);
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Delete a note by id
pub async fn run_delete(config: &AppConfig, id: &str) -> ExitCode {
    let presenter = Presenter::new();

    let mut notebook = match open_notebook(config).await {
        Ok(notebook) => notebook,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match notebook.delete(&NoteId::from(id)).await {
        Ok(true) => {
            presenter.success("Note deleted");
            if config.notify_or_default() {
                let _ = create_notifier()
                    .notify(NOTIFICATION_TITLE, "Note deleted", NotificationIcon::Success)
                    .await;
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(false) => {
            presenter.warn(&format!("No note with id {}", id));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Open the notebook backed by the configured data directory
pub async fn open_notebook(config: &AppConfig) -> Result<Notebook<JsonFileStore>, StorageError> {
    Notebook::open(note_store(config)).await
}

/// Build the note store from the configured data directory
pub fn note_store(config: &AppConfig) -> JsonFileStore {
    match config.data_dir.as_deref() {
        Some(dir) => JsonFileStore::in_dir(dir),
        None => JsonFileStore::new(),
    }
}

/// Load and merge configuration from file and CLI.
///
/// Precedence is defaults < file < CLI, where the CLI layer already folds
/// in VOX_NOTES_DATA_DIR via clap's env support (flag wins over env var).
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Read note text from piped stdin.
///
/// Returns `None` when stdin is an interactive terminal; blocking on a
/// silent read prompt would look like a hang.
fn read_stdin_text() -> io::Result<Option<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut text = String::new();
    stdin.lock().read_to_string(&mut text)?;

    // Drop the single trailing newline a pipe usually appends
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }

    Ok(Some(text))
}

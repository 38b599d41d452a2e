//! Dictation app runner

use std::process::ExitCode;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::application::{ComposeNoteUseCase, ComposeOutcome, DictateCallbacks, DictateInput};
use crate::domain::config::AppConfig;
use crate::infrastructure::notification::create_notifier;
use crate::infrastructure::CommandRecognizer;

use super::app::{open_notebook, EXIT_ERROR, EXIT_SUCCESS};
use super::args::DictateOptions;
use super::presenter::Presenter;
use super::signals::ShutdownSignal;

/// Longest transcript tail shown next to the spinner
const PREVIEW_CHARS: usize = 60;

/// Run a dictation session and store the resulting note
pub async fn run_dictate(config: &AppConfig, options: DictateOptions) -> ExitCode {
    // Shared with the progress callbacks, which outlive this stack frame
    let presenter = Arc::new(Mutex::new(Presenter::new()));

    let mut notebook = match open_notebook(config).await {
        Ok(notebook) => notebook,
        Err(e) => {
            lock(&presenter).error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Create adapters
    let recognizer = CommandRecognizer::new(&options.speech_command);
    let notifier = create_notifier();

    // Create use case
    let use_case = ComposeNoteUseCase::new(recognizer, notifier);

    // Ctrl+C flips the stop flag; the session then wraps up and the
    // draft captured so far is submitted
    let shutdown = ShutdownSignal::with_flag(use_case.stop_flag());
    if let Err(e) = shutdown.setup().await {
        lock(&presenter).error(&format!("Failed to setup signal handler: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }

    let input = DictateInput {
        settings: options.settings,
        enable_notify: options.notify,
    };

    let start_presenter = Arc::clone(&presenter);
    let transcript_presenter = Arc::clone(&presenter);
    let end_presenter = Arc::clone(&presenter);
    let callbacks = DictateCallbacks {
        on_session_start: Some(Box::new(move || {
            lock(&start_presenter).start_spinner("Listening... press Ctrl+C to stop and save");
        })),
        on_transcript: Some(Box::new(move |draft: &str| {
            let presenter = lock(&transcript_presenter);
            let preview = presenter.format_preview(draft, PREVIEW_CHARS);
            presenter.update_spinner(&format!("Listening... {}", preview));
        })),
        on_session_end: Some(Box::new(move || {
            lock(&end_presenter).stop_spinner();
        })),
    };

    match use_case.dictate(&mut notebook, input, callbacks).await {
        Ok(ComposeOutcome::Saved(note)) => {
            let presenter = lock(&presenter);
            presenter.success("Note created");
            presenter.note_card(&note);
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(ComposeOutcome::EmptyDraft) => {
            lock(&presenter).warn("Nothing was transcribed; no note created.");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            let mut presenter = lock(&presenter);
            presenter.stop_spinner();
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn lock(presenter: &Arc<Mutex<Presenter>>) -> MutexGuard<'_, Presenter> {
    presenter.lock().unwrap_or_else(|e| e.into_inner())
}

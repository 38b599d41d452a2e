//! VoxNotes CLI entry point

use std::process::ExitCode;

use clap::Parser;
use flexi_logger::Logger;

use vox_notes::cli::{
    app::{load_merged_config, run_add, run_delete, run_list, run_search, EXIT_ERROR,
        EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    dictate_app::run_dictate,
    presenter::Presenter,
    DictateOptions,
};
use vox_notes::domain::config::{AppConfig, SpeechConfig};
use vox_notes::domain::dictation::{Locale, RecognitionSettings};
use vox_notes::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    // RUST_LOG overrides the level; warnings only by default. The handle
    // must stay alive for the duration of the program.
    let _logger = Logger::try_with_env_or_str("warn")
        .and_then(|logger| logger.start())
        .ok();

    let Cli {
        data_dir,
        notify,
        command,
    } = Cli::parse();
    let presenter = Presenter::new();

    // Build CLI config from global args
    let base_overrides = AppConfig {
        data_dir: data_dir.map(|p| p.to_string_lossy().into_owned()),
        notify: if notify { Some(true) } else { None },
        ..Default::default()
    };

    match command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Some(Commands::Add { text }) => {
            let config = load_merged_config(base_overrides).await;
            run_add(&config, text).await
        }
        Some(Commands::Dictate {
            locale,
            speech_command,
        }) => {
            let mut overrides = base_overrides;
            overrides.locale = locale;
            if let Some(command) = speech_command {
                overrides.speech = Some(SpeechConfig {
                    command: Some(command),
                });
            }

            let config = load_merged_config(overrides).await;

            // Parse locale
            let locale = match config.locale.as_ref() {
                Some(s) => match s.parse::<Locale>() {
                    Ok(l) => l,
                    Err(e) => {
                        presenter.error(&e.to_string());
                        return ExitCode::from(EXIT_USAGE_ERROR);
                    }
                },
                None => Locale::default(),
            };

            let options = DictateOptions {
                settings: RecognitionSettings::continuous(locale),
                speech_command: config.speech_command_or_default().to_string(),
                notify: config.notify_or_default(),
            };

            run_dictate(&config, options).await
        }
        Some(Commands::Search { query }) => {
            let config = load_merged_config(base_overrides).await;
            run_search(&config, query).await
        }
        Some(Commands::Delete { id }) => {
            let config = load_merged_config(base_overrides).await;
            run_delete(&config, &id).await
        }
        None => {
            let config = load_merged_config(base_overrides).await;
            run_list(&config).await
        }
    }
}

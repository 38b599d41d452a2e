//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::SpeechConfig;
use crate::domain::dictation::Locale;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    // Validate value based on key type
    validate_config_value(key, value)?;

    // Load existing config
    let mut config = store.load().await?;

    // Update the appropriate field
    match key {
        "locale" => config.locale = Some(value.to_string()),
        "notify" => {
            config.notify = Some(parse_bool(value).map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be 'true' or 'false'".to_string(),
            })?)
        }
        "data_dir" => config.data_dir = Some(value.to_string()),
        "speech.command" => {
            // Initialize speech config if None
            if config.speech.is_none() {
                config.speech = Some(SpeechConfig::default());
            }
            if let Some(ref mut speech) = config.speech {
                speech.command = Some(value.to_string());
            }
        }
        _ => unreachable!(), // Already validated
    }

    // Save config
    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load().await?;

    let value = match key {
        "locale" => config.locale,
        "notify" => config.notify.map(|b| b.to_string()),
        "data_dir" => config.data_dir,
        "speech.command" => config.speech.as_ref().and_then(|s| s.command.clone()),
        _ => unreachable!(),
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value("locale", config.locale.as_deref().unwrap_or("(not set)"));
    presenter.key_value(
        "notify",
        &config
            .notify
            .map(|b| b.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value(
        "data_dir",
        config.data_dir.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value(
        "speech.command",
        config
            .speech
            .as_ref()
            .and_then(|s| s.command.as_deref())
            .unwrap_or("(not set)"),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "locale" => {
            value
                .parse::<Locale>()
                .map_err(|e| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
        }
        "notify" => {
            parse_bool(value).map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be 'true' or 'false'".to_string(),
            })?;
        }
        "data_dir" | "speech.command" => {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must not be empty".to_string(),
                });
            }
        }
        _ => {}
    }
    Ok(())
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("false"), Ok(false));
        assert_eq!(parse_bool("yes"), Ok(true));
        assert_eq!(parse_bool("no"), Ok(false));
        assert_eq!(parse_bool("1"), Ok(true));
        assert_eq!(parse_bool("0"), Ok(false));
        assert!(parse_bool("invalid").is_err());
    }

    #[test]
    fn validate_locale_valid() {
        assert!(validate_config_value("locale", "pt-BR").is_ok());
        assert!(validate_config_value("locale", "en-US").is_ok());
        assert!(validate_config_value("locale", "en").is_ok());
    }

    #[test]
    fn validate_locale_invalid() {
        assert!(validate_config_value("locale", "not a locale").is_err());
        assert!(validate_config_value("locale", "").is_err());
    }

    #[test]
    fn validate_notify_valid() {
        assert!(validate_config_value("notify", "true").is_ok());
        assert!(validate_config_value("notify", "no").is_ok());
    }

    #[test]
    fn validate_notify_invalid() {
        assert!(validate_config_value("notify", "sometimes").is_err());
    }

    #[test]
    fn validate_data_dir_rejects_empty() {
        assert!(validate_config_value("data_dir", "  ").is_err());
        assert!(validate_config_value("data_dir", "/var/notes").is_ok());
    }

    #[test]
    fn validate_speech_command_rejects_empty() {
        assert!(validate_config_value("speech.command", "").is_err());
        assert!(validate_config_value("speech.command", "vosk-cli -m tiny").is_ok());
    }
}

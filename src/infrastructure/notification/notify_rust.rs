//! Desktop notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux.

use async_trait::async_trait;

use crate::application::ports::{NotificationError, NotificationIcon, Notifier};

/// Application name the desktop environment attributes notifications to
const APP_NAME: &str = "Vox Notes";

/// How long transient notifications stay on screen
const DISMISS_AFTER_MS: u32 = 4000;

/// Cross-platform notifier using notify-rust.
///
/// Milestone notifications auto-dismiss after a few seconds; error alerts
/// stay up until the user closes them.
pub struct NotifyRustNotifier {
    app_name: String,
}

impl NotifyRustNotifier {
    /// Create a new notify-rust notifier
    pub fn new() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
        }
    }

    /// Dismissal policy per icon kind
    fn dismissal(icon: NotificationIcon) -> notify_rust::Timeout {
        match icon {
            NotificationIcon::Error => notify_rust::Timeout::Never,
            _ => notify_rust::Timeout::Milliseconds(DISMISS_AFTER_MS),
        }
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        let title = title.to_owned();
        let message = message.to_owned();
        let app_name = self.app_name.clone();
        let icon_name = icon.icon_name().to_string();
        let timeout = Self::dismissal(icon);

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(&app_name)
                .summary(&title)
                .body(&message)
                .icon(&icon_name)
                .timeout(timeout)
                .show()
                .map_err(|e| NotificationError::SendFailed(e.to_string()))?;

            Ok(())
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
    }
}

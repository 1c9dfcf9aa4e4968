//! Desktop notification sink.
//!
//! Presents requests through the platform notification service and falls
//! back to a log line whenever that is not possible.

use notify_core::{APP_NAME, Notifier, NotifyRequest};

/// Sink backed by the platform notification service.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, request: NotifyRequest) {
        let title = request.full_title();
        let body = body_text(&request);

        let mut notification = notify_rust::Notification::new();
        notification
            .appname(app_name(&request))
            .summary(&title)
            .body(&body);
        if let Some(subtitle) = request.subtitle.as_deref() {
            notification.subtitle(subtitle);
        }

        match notification.show() {
            Ok(_handle) => {
                tracing::debug!(%title, group = %request.group, "desktop notification shown");
            }
            Err(error) => {
                tracing::debug!(%error, "desktop notification unavailable, logging instead");
                LogNotifier.notify(request);
            }
        }
    }
}

/// Sink that only writes a log line per request.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, request: NotifyRequest) {
        tracing::info!(
            title = %request.full_title(),
            subtitle = request.subtitle.as_deref().unwrap_or_default(),
            message = %request.message,
            group = %request.group,
            "need to notify"
        );
    }
}

/// Application name to present the notification as.
///
/// The sender bundle identifier only means something to macOS.
fn app_name(request: &NotifyRequest) -> &str {
    match request.sender.as_deref() {
        Some(sender) if cfg!(target_os = "macos") => sender,
        _ => APP_NAME,
    }
}

/// Body text for the platform.
///
/// Only macOS shows a subtitle line, elsewhere it leads the body.
fn body_text(request: &NotifyRequest) -> String {
    match request.subtitle.as_deref() {
        Some(subtitle) if !cfg!(target_os = "macos") && !subtitle.is_empty() => {
            format!("{subtitle}\n{}", request.message)
        }
        _ => request.message.clone(),
    }
}

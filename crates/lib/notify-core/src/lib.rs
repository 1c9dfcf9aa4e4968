//! Notification requests and the sink they are handed to.

/// Application name used as the title of service notices.
pub const APP_NAME: &str = "mail-biff";

/// Sender tag attached to new-mail notifications.
pub const MAIL_SENDER: &str = "com.apple.Mail";

/// A single notification to present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyRequest {
    /// Main line.
    pub title: String,

    /// Secondary line.
    pub subtitle: Option<String>,

    /// Body text.
    pub message: String,

    /// Grouping key, `username@hostname` for account notices.
    pub group: String,

    /// Application the notification claims to come from.
    pub sender: Option<String>,

    /// Prefix prepended to the title.
    pub label: Option<String>,
}

impl NotifyRequest {
    /// A request with only title, message and group set.
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            message: message.into(),
            group: group.into(),
            sender: None,
            label: None,
        }
    }

    /// The title with the label prefix applied.
    pub fn full_title(&self) -> String {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => format!("{label}{}", self.title),
            _ => self.title.clone(),
        }
    }
}

/// A sink presenting notifications.
///
/// Shared by every account thread; implementations must not fail back
/// into the caller.
pub trait Notifier: Send + Sync {
    /// Present a notification.
    fn notify(&self, request: NotifyRequest);
}

impl<F> Notifier for F
where
    F: Fn(NotifyRequest) + Send + Sync,
{
    fn notify(&self, request: NotifyRequest) {
        (self)(request)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn label_prefixes_title() {
        let request = NotifyRequest {
            label: Some("[work] ".to_string()),
            ..NotifyRequest::new("Hi", "body", "u@h")
        };

        assert_eq!(request.full_title(), "[work] Hi");
    }

    #[test]
    fn missing_or_empty_label_keeps_title() {
        let mut request = NotifyRequest::new("Hi", "body", "u@h");
        assert_eq!(request.full_title(), "Hi");

        request.label = Some(String::new());
        assert_eq!(request.full_title(), "Hi");
    }

    #[test]
    fn closures_are_notifiers() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = {
            let seen = Arc::clone(&seen);
            move |request: NotifyRequest| seen.lock().unwrap().push(request.title)
        };
        let shared: Arc<dyn Notifier> = Arc::new(sink);

        shared.notify(NotifyRequest::new("one", "", "g"));
        shared.notify(NotifyRequest::new("two", "", "g"));

        assert_eq!(*seen.lock().unwrap(), ["one", "two"]);
    }
}

//! Account identity a watcher is bound to.

use std::time::Duration;

/// What a watcher knows about its account, minus the credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Hostname of the IMAP server.
    pub hostname: String,

    /// Username on that server.
    pub username: String,

    /// Mailbox to watch.
    pub mailbox: String,

    /// Prefix for notification titles.
    pub label: Option<String>,

    /// Upper bound of a single IDLE wait before it is re-issued.
    pub idle_timeout: Duration,
}

impl Identity {
    /// The `username@hostname` pair, used as the notification group.
    pub fn address(&self) -> String {
        format!("{}@{}", self.username, self.hostname)
    }

    /// A notification request grouped and labelled for this account.
    pub fn notice(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> notify_core::NotifyRequest {
        notify_core::NotifyRequest {
            label: self.label.clone(),
            ..notify_core::NotifyRequest::new(title, message, self.address())
        }
    }
}

//! Resolved account data.

/// Fully resolved account a watcher is bound to.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Hostname of the IMAP server.
    pub hostname: String,

    /// IMAP port.
    pub port: u16,

    /// Username for IMAP authentication.
    pub username: String,

    /// Password for IMAP authentication. Never empty.
    pub password: Password,

    /// Mailbox to watch.
    pub mailbox: String,

    /// Prefix for notification titles.
    pub label: Option<String>,

    /// IDLE keepalive. Use less than 29 minutes to avoid server timeouts.
    pub idle_timeout: std::time::Duration,
}

impl Account {
    /// The `username@hostname` pair, used as the notification group.
    pub fn address(&self) -> String {
        format!("{}@{}", self.username, self.hostname)
    }
}

/// Wrapper for sensitive passwords.
#[derive(Clone, Eq, PartialEq)]
pub struct Password(String);

impl Password {
    /// Create a new password wrapper.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the inner password value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***redacted***)")
    }
}

//! Shared configuration types for mail-biff.

/// Mailbox watched when an account does not name one.
pub const DEFAULT_MAILBOX: &str = "inbox";

/// Root configuration.
///
/// Every key also accepts the `:key` spelling of `~/.imapbiffrc` files.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", deny_unknown_fields))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Accounts to watch, in the order they were listed.
    #[cfg_attr(feature = "serde", serde(alias = ":accounts"))]
    pub accounts: Vec<AccountConfig>,
}

/// A watched mail account.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", deny_unknown_fields))]
#[derive(Debug, Clone, PartialEq)]
pub struct AccountConfig {
    /// Hostname of the IMAP server.
    #[cfg_attr(feature = "serde", serde(alias = ":hostname"))]
    pub hostname: String,

    /// Username for IMAP authentication.
    #[cfg_attr(feature = "serde", serde(alias = ":username"))]
    pub username: String,

    /// Password for IMAP authentication.
    ///
    /// When absent, the password is looked up in the OS secret store.
    #[cfg_attr(feature = "serde", serde(default, alias = ":password"))]
    pub password: Option<String>,

    /// Text prefixed to every notification title of this account.
    #[cfg_attr(feature = "serde", serde(default, alias = ":label"))]
    pub label: Option<String>,

    /// Mailbox to watch. Defaults to [`DEFAULT_MAILBOX`].
    #[cfg_attr(feature = "serde", serde(default = "default_mailbox", alias = ":mailbox"))]
    pub mailbox: String,

    /// Optional port override. Defaults to the implicit TLS IMAP port.
    #[cfg_attr(feature = "serde", serde(default, alias = ":port"))]
    pub port: Option<u16>,

    /// IDLE keepalive override (seconds).
    #[cfg_attr(feature = "serde", serde(default, alias = ":idle_timeout_secs"))]
    pub idle_timeout_secs: Option<u64>,
}

impl AccountConfig {
    /// An account with only the required fields set.
    pub fn new(hostname: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            username: username.into(),
            password: None,
            label: None,
            mailbox: default_mailbox(),
            port: None,
            idle_timeout_secs: None,
        }
    }

    /// The `username@hostname` pair identifying this account.
    pub fn address(&self) -> String {
        format!("{}@{}", self.username, self.hostname)
    }
}

/// The default mailbox name as an owned value.
fn default_mailbox() -> String {
    DEFAULT_MAILBOX.to_owned()
}

//! Lift raw config into fully resolved watcher accounts.

pub mod data;
mod error;

pub use data::{Account, Password};
pub use error::ConfigError;

/// Default IMAP port for implicit TLS.
pub const DEFAULT_PORT: u16 = 993;

/// Default IDLE keepalive (seconds) when not specified in config.
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 300;

/// Resolve every configured account, in order.
///
/// `lookup` is consulted once, with `(hostname, username)` as the
/// keyring service/account pair, for each account that has no password in
/// the config. The first account that stays without a password aborts the
/// bringup; accounts after it are not looked at.
pub fn bringup_accounts<Lookup>(
    config: &config_core::Config,
    mut lookup: Lookup,
) -> Result<Vec<Account>, ConfigError>
where
    Lookup: FnMut(&str, &str) -> Option<String>,
{
    config
        .accounts
        .iter()
        .map(|account| bringup_account(account, &mut lookup))
        .collect()
}

/// Resolve a single account.
pub fn bringup_account<Lookup>(
    account: &config_core::AccountConfig,
    lookup: &mut Lookup,
) -> Result<Account, ConfigError>
where
    Lookup: FnMut(&str, &str) -> Option<String>,
{
    let password = match account.password.as_deref() {
        Some(password) if !password.is_empty() => Some(password.to_owned()),
        _ => {
            tracing::debug!(
                imap_host = %account.hostname,
                imap_user = %account.username,
                "looking up password in the keyring"
            );
            (lookup)(&account.hostname, &account.username)
        }
    };

    let password = password
        .filter(|password| !password.is_empty())
        .ok_or_else(|| ConfigError::MissingPassword {
            username: account.username.clone(),
            hostname: account.hostname.clone(),
        })?;

    Ok(Account {
        hostname: account.hostname.clone(),
        port: account.port.unwrap_or(DEFAULT_PORT),
        username: account.username.clone(),
        password: Password::new(password),
        mailbox: account.mailbox.clone(),
        label: account.label.clone().filter(|label| !label.is_empty()),
        idle_timeout: std::time::Duration::from_secs(
            account
                .idle_timeout_secs
                .unwrap_or(DEFAULT_IDLE_TIMEOUT_SECS),
        ),
    })
}

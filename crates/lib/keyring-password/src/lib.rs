//! Keyring password resolution helpers.
//!
//! Entries are keyed by the IMAP hostname as the service and the IMAP
//! username as the account.

/// Errors returned while resolving passwords from a keyring.
#[derive(Debug, thiserror::Error)]
pub enum GetError {
    /// Failed to resolve the keyring entry.
    #[error(
        "failed to resolve keyring entry for service '{service}' and account '{account}': {source}"
    )]
    Resolve {
        /// Keyring service name.
        service: String,

        /// Keyring account name.
        account: String,

        /// Underlying keyring error.
        source: keyring::Error,
    },
}

/// Errors returned while storing passwords in a keyring.
#[derive(Debug, thiserror::Error)]
pub enum SetError {
    /// Failed to store the keyring entry.
    #[error(
        "failed to store keyring entry for service '{service}' and account '{account}': {source}"
    )]
    Store {
        /// Keyring service name.
        service: String,

        /// Keyring account name.
        account: String,

        /// Underlying keyring error.
        source: keyring::Error,
    },
}

/// Get a password from the keyring for the given service/account pair.
///
/// A missing entry is reported as `Ok(None)`.
pub fn get(service: &str, account: &str) -> Result<Option<String>, GetError> {
    let resolve_error = |source| GetError::Resolve {
        service: service.to_string(),
        account: account.to_string(),
        source,
    };

    let entry = keyring::Entry::new(service, account).map_err(resolve_error)?;
    match entry.get_password() {
        Ok(password) => Ok(Some(password)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(source) => Err(resolve_error(source)),
    }
}

/// Look a password up, treating store failures the same as a missing entry.
///
/// Failures are logged so they stay diagnosable.
pub fn lookup(service: &str, account: &str) -> Option<String> {
    match get(service, account) {
        Ok(password) => password.filter(|password| !password.is_empty()),
        Err(error) => {
            tracing::warn!(%service, %account, %error, "keyring lookup failed");
            None
        }
    }
}

/// Store a password in the keyring for the given service/account pair.
pub fn set(service: &str, account: &str, password: &str) -> Result<(), SetError> {
    let store_error = |source| SetError::Store {
        service: service.to_string(),
        account: account.to_string(),
        source,
    };

    let entry = keyring::Entry::new(service, account).map_err(store_error)?;
    entry.set_password(password).map_err(store_error)
}

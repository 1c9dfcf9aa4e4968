//! Error types.

/// Config bringup error.
///
/// Fatal for the whole process: no watcher starts when bringup fails.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The account has no password in the config and none in the keyring.
    #[error("failed to initialize {username}@{hostname}: no password found")]
    MissingPassword {
        /// Username of the account.
        username: String,

        /// Hostname of the account.
        hostname: String,
    },
}

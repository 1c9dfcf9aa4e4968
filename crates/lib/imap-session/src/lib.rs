//! High-level IMAP session utilities.

/// An authenticated IMAP session over implicit TLS.
pub type Session = async_imap::Session<imap_connect::Stream>;

/// IMAP session params.
#[derive(Debug, Clone, PartialEq)]
pub struct Params<'a> {
    /// Connect params.
    pub connect: imap_connect::Params<'a>,

    /// Username for `LOGIN`.
    ///
    /// Typically an email address.
    pub username: &'a str,

    /// Password for `LOGIN`.
    pub password: &'a str,
}

/// Errors returned while establishing a session.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IMAP connection error.
    #[error("connect: {0}")]
    Connect(#[source] imap_connect::Error),

    /// The server rejected or failed the `LOGIN`.
    #[error("login: {0}")]
    Login(#[source] async_imap::error::Error),
}

/// Connect and login to establish an IMAP session.
pub async fn establish(params: Params<'_>) -> Result<Session, Error> {
    let Params {
        connect,
        username,
        password,
    } = params;

    let client = imap_connect::connect(connect)
        .await
        .map_err(Error::Connect)?;

    let session = client
        .login(username, password)
        .await
        .map_err(|(err, _client)| Error::Login(err))?;

    tracing::debug!(imap_user = %username, "logged in");

    Ok(session)
}

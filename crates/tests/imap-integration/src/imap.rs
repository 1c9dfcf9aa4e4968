//! IMAP connectivity helpers.

use std::time::Duration;

use tokio::net::TcpStream;

/// Attempts before giving up on a server that does not come up.
const LOGIN_ATTEMPTS: u8 = 60;

/// Pause between login attempts.
const LOGIN_RETRY_DELAY: Duration = Duration::from_millis(250);

/// Log into a plain-text IMAP server.
pub async fn login(
    host: &str,
    port: u16,
    user: &str,
    password: &str,
) -> Result<async_imap::Session<TcpStream>, std::io::Error> {
    let stream = TcpStream::connect((host, port)).await?;
    let mut client = async_imap::Client::new(stream);

    client
        .read_response()
        .await
        .ok_or_else(|| std::io::Error::other("missing IMAP greeting"))??;

    client
        .login(user, password)
        .await
        .map_err(|(err, _client)| std::io::Error::other(err))
}

/// [`login`], retried until the server is ready.
pub async fn login_with_retry(
    host: &str,
    port: u16,
    user: &str,
    password: &str,
) -> Result<async_imap::Session<TcpStream>, std::io::Error> {
    let mut attempts_left = LOGIN_ATTEMPTS;
    loop {
        let err = match login(host, port, user, password).await {
            Ok(session) => return Ok(session),
            Err(err) => err,
        };

        attempts_left = match attempts_left.checked_sub(1) {
            Some(0) | None => return Err(err),
            Some(left) => left,
        };
        tokio::time::sleep(LOGIN_RETRY_DELAY).await;
    }
}

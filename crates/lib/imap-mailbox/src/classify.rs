//! Sorting `async-imap` failures into transport and protocol errors.

use mail_watcher::SessionError;

/// Classify an IMAP command failure.
pub fn classify(error: async_imap::error::Error) -> SessionError {
    use async_imap::error::Error;

    match error {
        Error::Io(_) | Error::ConnectionLost => SessionError::transport(error),
        Error::Bad(_) => SessionError::protocol("bad response", error),
        Error::No(_) => SessionError::protocol("command refused", error),
        Error::Parse(_) => SessionError::protocol("parse error", error),
        _ => SessionError::protocol("imap error", error),
    }
}

/// Classify a failure to establish a session.
///
/// Connecting and logging in are retried by the watcher like any other
/// dropped connection, so every failure here is transport.
pub fn classify_establish(error: imap_session::Error) -> SessionError {
    SessionError::transport(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_failures_are_transport() {
        let error = classify(async_imap::error::Error::Io(std::io::Error::from(
            std::io::ErrorKind::BrokenPipe,
        )));
        assert!(error.is_transport());
        assert!(classify(async_imap::error::Error::ConnectionLost).is_transport());
    }

    #[test]
    fn server_answers_are_protocol() {
        let error = classify(async_imap::error::Error::No("mailbox missing".to_owned()));
        assert_eq!(error.kind(), "command refused");

        let error = classify(async_imap::error::Error::Bad("syntax".to_owned()));
        assert_eq!(error.kind(), "bad response");
    }

    #[test]
    fn failed_establish_is_transport() {
        let error = classify_establish(imap_session::Error::Login(
            async_imap::error::Error::No("invalid credentials".to_owned()),
        ));
        assert!(error.is_transport());

        let error = classify_establish(imap_session::Error::Connect(
            imap_connect::Error::MissingGreeting,
        ));
        assert!(error.is_transport());
    }
}

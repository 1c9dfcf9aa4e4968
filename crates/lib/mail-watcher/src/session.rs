//! Lazily established, replaceable session.

use std::sync::Arc;

use notify_core::{APP_NAME, Notifier};

use crate::{Connector, Identity, SessionError};

/// Owns the connector and at most one live session produced by it.
///
/// The session is created on first use and kept until
/// [`Session::invalidate`] drops it; the next use then reconnects.
pub struct Session<C: Connector> {
    /// Session factory.
    connector: C,

    /// The live session, if any.
    current: Option<C::Mailbox>,

    /// Account the sessions belong to.
    identity: Arc<Identity>,

    /// Where the connect notice goes.
    notifier: Arc<dyn Notifier>,
}

impl<C: Connector> Session<C> {
    /// Create a disconnected session.
    pub fn new(connector: C, identity: Arc<Identity>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            connector,
            current: None,
            identity,
            notifier,
        }
    }

    /// Whether a live session is held.
    pub fn is_connected(&self) -> bool {
        self.current.is_some()
    }

    /// Return the live session, connecting and authenticating first if
    /// there is none.
    ///
    /// Every successful connect is announced with a notification.
    pub async fn ensure_connected(&mut self) -> Result<&mut C::Mailbox, SessionError> {
        let mailbox = match self.current.take() {
            Some(mailbox) => mailbox,
            None => {
                let identity = &self.identity;
                tracing::debug!(
                    imap_host = %identity.hostname,
                    imap_user = %identity.username,
                    "connecting"
                );

                let mailbox = self.connector.connect().await?;

                tracing::info!(
                    imap_host = %identity.hostname,
                    imap_user = %identity.username,
                    "connected"
                );
                self.notifier.notify(identity.notice(
                    APP_NAME,
                    format!(
                        "Connected to {} as {}",
                        identity.hostname, identity.username
                    ),
                ));

                mailbox
            }
        };

        Ok(self.current.insert(mailbox))
    }

    /// Drop the live session, if any.
    pub fn invalidate(&mut self) {
        if self.current.take().is_some() {
            tracing::debug!(imap_host = %self.identity.hostname, "session dropped");
        }
    }
}

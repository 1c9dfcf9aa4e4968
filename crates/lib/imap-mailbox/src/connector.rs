//! [`mail_watcher::Connector`] establishing implicit-TLS sessions.

use config_bringup::Account;
use mail_watcher::{Connector, SessionError};

use crate::{ImapMailbox, classify, classify_establish};

/// The server does not support what we need.
#[derive(Debug, thiserror::Error)]
#[error("server does not advertise the IDLE capability")]
pub struct IdleUnsupported;

/// Connects to the account's server and logs in.
#[derive(Debug, Clone)]
pub struct ImapConnector {
    /// The account to log into.
    account: Account,
}

impl ImapConnector {
    /// Create a connector for an account.
    pub fn new(account: Account) -> Self {
        Self { account }
    }
}

impl Connector for ImapConnector {
    type Mailbox = ImapMailbox<imap_connect::Stream>;

    async fn connect(&mut self) -> Result<Self::Mailbox, SessionError> {
        let account = &self.account;

        let mut session = imap_session::establish(imap_session::Params {
            connect: imap_connect::Params {
                host: &account.hostname,
                port: account.port,
            },
            username: &account.username,
            password: account.password.as_str(),
        })
        .await
        .map_err(classify_establish)?;

        let capabilities = session.capabilities().await.map_err(classify)?;
        if !capabilities.has_str("IDLE") {
            return Err(SessionError::protocol("idle unsupported", IdleUnsupported));
        }

        Ok(ImapMailbox::new(session))
    }
}

//! [`mail_watcher::Mailbox`] over an `async-imap` session.

use std::time::Duration;

use async_imap::extensions::idle::IdleResponse;
use async_imap::types::{Fetch, Flag, UnsolicitedResponse};
use futures::TryStreamExt as _;
use imap_proto::types::{MailboxDatum, Response, SectionPath};
use mail_preview::{BodyStructure, PartPath};
use mail_watcher::{Flags, IdleEvent, Mailbox, SessionError};

use crate::classify;

/// Errors raised by the adapter itself rather than the server.
#[derive(Debug, thiserror::Error)]
pub enum MailboxError {
    /// An earlier failure consumed the session.
    #[error("session lost")]
    SessionLost,

    /// The server answered a FETCH without the requested item.
    #[error("message {seq}: server returned no {item}")]
    MissingItem {
        /// Sequence number fetched.
        seq: u32,

        /// What was asked for.
        item: &'static str,
    },
}

/// An authenticated `async-imap` session.
///
/// IDLE consumes the underlying session; if it fails midway the session is
/// gone and every later call reports a transport error.
#[derive(Debug)]
pub struct ImapMailbox<T>
where
    T: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin + Send + std::fmt::Debug,
{
    /// The session, absent after a failed IDLE.
    session: Option<async_imap::Session<T>>,
}

impl<T> ImapMailbox<T>
where
    T: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin + Send + std::fmt::Debug,
{
    /// Wrap an authenticated session.
    pub fn new(session: async_imap::Session<T>) -> Self {
        Self {
            session: Some(session),
        }
    }

    /// The live session.
    fn session(&mut self) -> Result<&mut async_imap::Session<T>, SessionError> {
        self.session
            .as_mut()
            .ok_or_else(|| SessionError::transport(MailboxError::SessionLost))
    }

    /// Fetch a single message and return its response.
    async fn fetch_one(
        &mut self,
        seq: u32,
        query: &str,
        item: &'static str,
    ) -> Result<Fetch, SessionError> {
        let session = self.session()?;
        let fetches: Vec<Fetch> = session
            .fetch(seq.to_string(), query)
            .await
            .map_err(classify)?
            .try_collect()
            .await
            .map_err(classify)?;

        fetches
            .into_iter()
            .find(|fetch| fetch.message == seq)
            .ok_or_else(|| {
                SessionError::protocol("bad response", MailboxError::MissingItem { seq, item })
            })
    }

    /// Drop queued unsolicited responses, returning the highest `EXISTS`
    /// among them.
    fn drain_unsolicited(&mut self) -> Option<u32> {
        let session = self.session.as_mut()?;
        let mut exists = None;
        while let Ok(response) = session.unsolicited_responses.try_recv() {
            if let UnsolicitedResponse::Exists(count) = response {
                exists = exists.max(Some(count));
            }
        }
        exists
    }
}

impl<T> Mailbox for ImapMailbox<T>
where
    T: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin + Send + std::fmt::Debug,
{
    async fn examine(&mut self, mailbox: &str) -> Result<(), SessionError> {
        let status = self
            .session()?
            .examine(mailbox)
            .await
            .map_err(classify)?;
        tracing::debug!(imap_mailbox = %mailbox, exists = status.exists, "examined");
        self.drain_unsolicited();
        Ok(())
    }

    async fn idle(&mut self, timeout: Duration) -> Result<IdleEvent, SessionError> {
        let session = self
            .session
            .take()
            .ok_or_else(|| SessionError::transport(MailboxError::SessionLost))?;

        let mut idle_handle = session.idle();
        idle_handle.init().await.map_err(classify)?;
        let (idle_wait, _stop) = idle_handle.wait_with_timeout(timeout);
        let idle_response = idle_wait.await.map_err(classify)?;
        self.session = Some(idle_handle.done().await.map_err(classify)?);

        let event = match idle_response {
            IdleResponse::NewData(data) => match data.parsed() {
                Response::MailboxData(MailboxDatum::Exists(count)) => {
                    IdleEvent::NewMessages(*count)
                }
                _ => IdleEvent::Other,
            },
            IdleResponse::Timeout => IdleEvent::Timeout,
            IdleResponse::ManualInterrupt => IdleEvent::Other,
        };

        Ok(match (event, self.drain_unsolicited()) {
            (IdleEvent::NewMessages(count), Some(later)) => {
                IdleEvent::NewMessages(count.max(later))
            }
            (IdleEvent::NewMessages(count), None) => IdleEvent::NewMessages(count),
            (_, Some(later)) => IdleEvent::NewMessages(later),
            (event, None) => event,
        })
    }

    async fn fetch_flags(&mut self, seq: u32) -> Result<Flags, SessionError> {
        let fetch = self.fetch_one(seq, "FLAGS", "flags").await?;
        Ok(Flags(fetch.flags().map(|flag| flag_name(&flag)).collect()))
    }

    async fn fetch_header_field(&mut self, seq: u32, field: &str) -> Result<Vec<u8>, SessionError> {
        let query = format!("BODY.PEEK[HEADER.FIELDS ({field})]");
        let fetch = self.fetch_one(seq, &query, "header").await?;
        Ok(fetch.header().map(<[u8]>::to_vec).unwrap_or_default())
    }

    async fn fetch_body_structure(&mut self, seq: u32) -> Result<BodyStructure, SessionError> {
        let fetch = self
            .fetch_one(seq, "BODYSTRUCTURE", "body structure")
            .await?;
        fetch
            .bodystructure()
            .map(crate::body_structure)
            .ok_or_else(|| {
                SessionError::protocol(
                    "bad response",
                    MailboxError::MissingItem {
                        seq,
                        item: "body structure",
                    },
                )
            })
    }

    async fn fetch_part_prefix(
        &mut self,
        seq: u32,
        part: &PartPath,
        len: u32,
    ) -> Result<Vec<u8>, SessionError> {
        let query = format!("BODY.PEEK[{part}]<0.{len}>");
        let fetch = self.fetch_one(seq, &query, "body part").await?;
        let section = SectionPath::Part(part.0.clone(), None);
        Ok(fetch.section(&section).map(<[u8]>::to_vec).unwrap_or_default())
    }
}

/// Wire name of a flag.
fn flag_name(flag: &Flag<'_>) -> String {
    match flag {
        Flag::Seen => "\\Seen".to_owned(),
        Flag::Answered => "\\Answered".to_owned(),
        Flag::Flagged => "\\Flagged".to_owned(),
        Flag::Deleted => "\\Deleted".to_owned(),
        Flag::Draft => "\\Draft".to_owned(),
        Flag::Recent => "\\Recent".to_owned(),
        Flag::Custom(name) => name.to_string(),
        other => format!("{other:?}"),
    }
}

//! The IMAP operations a watcher needs.

use std::time::Duration;

use mail_preview::{BodyStructure, PartPath};

use crate::SessionError;

/// Outcome of one IDLE wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleEvent {
    /// The server reported `EXISTS`; carries the new message count, which
    /// is the sequence number of the newest message.
    NewMessages(u32),

    /// The wait hit its keepalive bound without news.
    Timeout,

    /// The server reported something else, e.g. `EXPUNGE` or `FETCH`.
    Other,
}

/// Flags of a single message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags(pub Vec<String>);

impl Flags {
    /// Whether the message carries `\Seen`.
    pub fn is_seen(&self) -> bool {
        self.0.iter().any(|flag| flag.eq_ignore_ascii_case("\\Seen"))
    }
}

/// An authenticated session, seen through the operations a watcher uses.
///
/// None of the operations may alter message flags.
pub trait Mailbox: Send {
    /// Open a mailbox read-only (`EXAMINE`).
    fn examine(
        &mut self,
        mailbox: &str,
    ) -> impl Future<Output = Result<(), SessionError>> + Send;

    /// Block in IDLE until the server reports a change or `timeout` elapses.
    fn idle(
        &mut self,
        timeout: Duration,
    ) -> impl Future<Output = Result<IdleEvent, SessionError>> + Send;

    /// Fetch the flags of a message.
    fn fetch_flags(&mut self, seq: u32) -> impl Future<Output = Result<Flags, SessionError>> + Send;

    /// Peek a single header field, returned raw (`Name: value\r\n`).
    fn fetch_header_field(
        &mut self,
        seq: u32,
        field: &str,
    ) -> impl Future<Output = Result<Vec<u8>, SessionError>> + Send;

    /// Fetch the MIME structure of a message.
    fn fetch_body_structure(
        &mut self,
        seq: u32,
    ) -> impl Future<Output = Result<BodyStructure, SessionError>> + Send;

    /// Peek the first `len` bytes of one body part.
    fn fetch_part_prefix(
        &mut self,
        seq: u32,
        part: &PartPath,
        len: u32,
    ) -> impl Future<Output = Result<Vec<u8>, SessionError>> + Send;
}

/// Produces authenticated sessions for one account.
pub trait Connector: Send {
    /// The session type produced.
    type Mailbox: Mailbox;

    /// Connect and authenticate.
    fn connect(&mut self) -> impl Future<Output = Result<Self::Mailbox, SessionError>> + Send;
}

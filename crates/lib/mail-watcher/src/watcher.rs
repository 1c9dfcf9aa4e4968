//! The per-account watch loop.

use std::{convert::Infallible, sync::Arc, time::Duration};

use notify_core::{MAIL_SENDER, Notifier, NotifyRequest};

use crate::{Connector, IdleEvent, Identity, Mailbox, Session, SessionError, summarize};

/// Pause after any failure before the next attempt.
pub const BACKOFF: Duration = Duration::from_secs(5);

/// What happened to a message the server announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The message was already read elsewhere; nothing was shown.
    AlreadySeen,

    /// A notification was sent.
    Notified,
}

/// Watches one mailbox of one account.
pub struct Watcher<C: Connector> {
    /// Account being watched.
    identity: Arc<Identity>,

    /// Current session.
    session: Session<C>,

    /// Notification sink.
    notifier: Arc<dyn Notifier>,

    /// Pause after a failure.
    backoff: Duration,
}

impl<C: Connector> Watcher<C> {
    /// Create a watcher; nothing connects until it runs.
    pub fn new(identity: Identity, connector: C, notifier: Arc<dyn Notifier>) -> Self {
        let identity = Arc::new(identity);
        let session = Session::new(connector, Arc::clone(&identity), Arc::clone(&notifier));
        Self {
            identity,
            session,
            notifier,
            backoff: BACKOFF,
        }
    }

    /// Override the pause after failures.
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Account being watched.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Current session.
    pub fn session(&self) -> &Session<C> {
        &self.session
    }

    /// Watch forever, recovering from every failure.
    pub async fn run(mut self) -> Infallible {
        loop {
            let Err(error) = self.watch().await;
            self.recover(error).await;
        }
    }

    /// Connect if needed, open the mailbox and serve IDLE events until
    /// something fails.
    pub async fn watch(&mut self) -> Result<Infallible, SessionError> {
        let Self {
            identity,
            session,
            notifier,
            ..
        } = self;

        let mailbox = session.ensure_connected().await?;
        mailbox.examine(&identity.mailbox).await?;

        tracing::info!(
            imap_host = %identity.hostname,
            imap_user = %identity.username,
            imap_mailbox = %identity.mailbox,
            "watching"
        );

        loop {
            match mailbox.idle(identity.idle_timeout).await? {
                IdleEvent::NewMessages(seq) => {
                    let delivery = deliver(mailbox, identity, &**notifier, seq).await?;
                    tracing::debug!(seq, ?delivery, "new message handled");
                }
                IdleEvent::Timeout => {
                    tracing::debug!(imap_host = %identity.hostname, "idle keepalive");
                }
                IdleEvent::Other => {
                    tracing::trace!(imap_host = %identity.hostname, "ignoring idle update");
                }
            }
        }
    }

    /// React to a failed [`Watcher::watch`], then wait out the backoff.
    ///
    /// Transport failures drop the session silently; any other failure is
    /// reported and the session is kept.
    pub async fn recover(&mut self, error: SessionError) {
        let identity = &self.identity;

        if error.is_transport() {
            tracing::warn!(
                imap_host = %identity.hostname,
                imap_user = %identity.username,
                %error,
                "connection lost, reconnecting"
            );
            self.session.invalidate();
        } else {
            tracing::warn!(
                imap_host = %identity.hostname,
                imap_user = %identity.username,
                %error,
                "watch failed"
            );
            self.notifier.notify(identity.notice(
                format!("[{}] error: {}", identity.hostname, error.kind()),
                error.detail(),
            ));
        }

        tokio::time::sleep(self.backoff).await;
    }
}

/// Handle one `EXISTS` announcement.
///
/// The mailbox is re-examined first so the new message is addressable.
pub async fn deliver<M: Mailbox>(
    mailbox: &mut M,
    identity: &Identity,
    notifier: &dyn Notifier,
    seq: u32,
) -> Result<Delivery, SessionError> {
    mailbox.examine(&identity.mailbox).await?;

    if mailbox.fetch_flags(seq).await?.is_seen() {
        return Ok(Delivery::AlreadySeen);
    }

    let summary = summarize(mailbox, seq).await;

    notifier.notify(NotifyRequest {
        subtitle: Some(summary.subject),
        sender: Some(MAIL_SENDER.to_owned()),
        ..identity.notice(summary.from, summary.body)
    });

    Ok(Delivery::Notified)
}

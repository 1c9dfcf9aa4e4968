//! Per-account mailbox watcher.
//!
//! A [`Watcher`] keeps one lazily established [`Session`] to one IMAP
//! account, waits for new mail with IDLE and turns every new unread message
//! into a notification. Failures never end the watcher: it drops or keeps
//! the session depending on the failure, backs off and starts over.

mod error;
mod identity;
mod mailbox;
mod session;
mod summary;
mod watcher;

pub use error::*;
pub use identity::*;
pub use mailbox::*;
pub use session::*;
pub use summary::*;
pub use watcher::*;

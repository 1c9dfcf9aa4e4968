//! [`mail_watcher`] mailbox and connector over `async-imap`.

mod classify;
mod connector;
mod mailbox;
mod structure;

pub use classify::*;
pub use connector::*;
pub use mailbox::*;
pub use structure::*;

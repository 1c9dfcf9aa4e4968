//! Notification-ready message summary.

/// Body text used when a message has no plain-text part.
pub const HTML_MESSAGE: &str = "HTML message";

/// Body text used when decoding the message failed.
pub const UNREADABLE_MESSAGE: &str = "Unable to read message";

/// What a notification shows about one message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageSummary {
    /// Decoded `From` header value.
    pub from: String,

    /// Decoded `Subject` header value.
    pub subject: String,

    /// Bounded plain-text preview, or one of the sentinel texts.
    pub body: String,
}

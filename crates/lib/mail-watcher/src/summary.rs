//! Turning a message into notification text.

use mail_preview::{
    DecodeError, HTML_MESSAGE, MessageSummary, PREVIEW_BYTES, UNREADABLE_MESSAGE,
    find_plain_text, header_value, preview_text,
};

use crate::{Mailbox, SessionError};

/// An error while summarizing a message.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    /// A fetch failed.
    #[error("fetch: {0}")]
    Fetch(#[from] SessionError),

    /// The text part could not be decoded.
    #[error("decode: {0}")]
    Decode(#[from] DecodeError),
}

/// Summarize a message for display.
///
/// Never fails: whatever goes wrong after the headers were read leaves them
/// in place and replaces the body with [`UNREADABLE_MESSAGE`].
pub async fn summarize<M: Mailbox>(mailbox: &mut M, seq: u32) -> MessageSummary {
    let mut summary = MessageSummary::default();

    if let Err(error) = read_summary(mailbox, seq, &mut summary).await {
        tracing::warn!(seq, %error, "unable to read message");
        summary.body = UNREADABLE_MESSAGE.to_owned();
    }

    summary
}

/// Fill `summary` field by field so that a later failure keeps what was
/// already read.
async fn read_summary<M: Mailbox>(
    mailbox: &mut M,
    seq: u32,
    summary: &mut MessageSummary,
) -> Result<(), SummaryError> {
    summary.from = header_value(&mailbox.fetch_header_field(seq, "FROM").await?);
    summary.subject = header_value(&mailbox.fetch_header_field(seq, "SUBJECT").await?);

    let structure = mailbox.fetch_body_structure(seq).await?;
    summary.body = match find_plain_text(&structure) {
        None => HTML_MESSAGE.to_owned(),
        Some(part) => {
            let data = mailbox
                .fetch_part_prefix(seq, &part.path, PREVIEW_BYTES)
                .await?;
            preview_text(&data, &part.encoding)?
        }
    };

    Ok(())
}

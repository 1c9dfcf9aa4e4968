//! Bounded plain-text previews.

use crate::{DecodeError, TransferEncoding};

/// Maximum preview size, in bytes. Also the size of the partial fetch.
pub const PREVIEW_BYTES: u32 = 200;

/// Decode a part prefix into preview text of at most [`PREVIEW_BYTES`] bytes.
pub fn preview_text(data: &[u8], encoding: &TransferEncoding) -> Result<String, DecodeError> {
    let decoded = crate::decode_transfer(data, encoding)?;
    let limit = PREVIEW_BYTES as usize;
    let bounded = &decoded[..decoded.len().min(limit)];

    // A multi-byte sequence cut by the partial fetch is dropped, not replaced.
    let complete = match std::str::from_utf8(bounded) {
        Err(error) if error.error_len().is_none() => &bounded[..error.valid_up_to()],
        _ => bounded,
    };
    let mut text = String::from_utf8_lossy(complete).into_owned();
    truncate_on_char_boundary(&mut text, limit);

    Ok(text.trim().to_owned())
}

/// Shorten `text` to at most `max` bytes without splitting a character.
fn truncate_on_char_boundary(text: &mut String, max: usize) {
    if text.len() <= max {
        return;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}

//! Content-transfer-encoding decoding.

use base64::Engine as _;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

/// Base64 engine accepting missing padding and stray trailing bits.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &base64::alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Content-transfer-encoding of a body part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferEncoding {
    /// `7bit`.
    SevenBit,

    /// `8bit`.
    EightBit,

    /// `binary`.
    Binary,

    /// `base64`.
    Base64,

    /// `quoted-printable`.
    QuotedPrintable,

    /// Anything else, kept verbatim.
    Other(String),
}

impl TransferEncoding {
    /// Parse an encoding name, case-insensitively.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "7bit" => Self::SevenBit,
            "8bit" => Self::EightBit,
            "binary" => Self::Binary,
            "base64" => Self::Base64,
            "quoted-printable" => Self::QuotedPrintable,
            _ => Self::Other(name.to_owned()),
        }
    }
}

/// Errors returned while undoing a transfer encoding.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The base64 payload is malformed.
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Undo the transfer encoding of a possibly truncated part prefix.
///
/// Encodings other than quoted-printable and base64 are returned as-is.
pub fn decode_transfer(data: &[u8], encoding: &TransferEncoding) -> Result<Vec<u8>, DecodeError> {
    match encoding {
        TransferEncoding::QuotedPrintable => Ok(decode_quoted_printable(data)),
        TransferEncoding::Base64 => decode_base64_prefix(data),
        _ => Ok(data.to_vec()),
    }
}

/// Decode quoted-printable data.
///
/// Soft line breaks are removed and malformed escapes are kept literally.
/// An escape cut short at the end of the input is dropped.
pub fn decode_quoted_printable(data: &[u8]) -> Vec<u8> {
    let complete = trim_cut_escape(data);
    quoted_printable::decode(complete, quoted_printable::ParseMode::Robust)
        .unwrap_or_else(|_| complete.to_vec())
}

/// Drop a trailing `=` or `=X` left behind by a cut prefix.
fn trim_cut_escape(data: &[u8]) -> &[u8] {
    match data {
        [rest @ .., b'='] => rest,
        [rest @ .., b'=', digit] if digit.is_ascii_hexdigit() => rest,
        _ => data,
    }
}

/// Decode base64 data that may have been cut at an arbitrary byte.
///
/// Whitespace is ignored and an incomplete trailing quantum is discarded.
pub fn decode_base64_prefix(data: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut compact: Vec<u8> = data
        .iter()
        .copied()
        .filter(|byte| !byte.is_ascii_whitespace())
        .collect();
    compact.truncate(compact.len() - compact.len() % 4);
    Ok(LENIENT_BASE64.decode(compact)?)
}

//! Conversion of `BODYSTRUCTURE` responses.

use imap_proto::types::{BodyStructure as WireStructure, ContentEncoding};
use mail_preview::{BodyStructure, TransferEncoding};

/// Convert a parsed `BODYSTRUCTURE` into the decoder's part tree.
///
/// Encapsulated `message/rfc822` parts are kept as leaves.
pub fn body_structure(wire: &WireStructure<'_>) -> BodyStructure {
    match wire {
        WireStructure::Basic { common, other, .. }
        | WireStructure::Text { common, other, .. }
        | WireStructure::Message { common, other, .. } => BodyStructure::single(
            &common.ty.ty,
            &common.ty.subtype,
            transfer_encoding(&other.transfer_encoding),
        ),
        WireStructure::Multipart { common, bodies, .. } => BodyStructure::multipart(
            &common.ty.subtype,
            bodies.iter().map(body_structure).collect(),
        ),
    }
}

/// Convert a content-transfer-encoding.
pub fn transfer_encoding(encoding: &ContentEncoding<'_>) -> TransferEncoding {
    match encoding {
        ContentEncoding::SevenBit => TransferEncoding::SevenBit,
        ContentEncoding::EightBit => TransferEncoding::EightBit,
        ContentEncoding::Binary => TransferEncoding::Binary,
        ContentEncoding::Base64 => TransferEncoding::Base64,
        ContentEncoding::QuotedPrintable => TransferEncoding::QuotedPrintable,
        ContentEncoding::Other(name) => TransferEncoding::from_name(name),
    }
}

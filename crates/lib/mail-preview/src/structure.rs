//! Locating the plain-text part of a message.

use crate::TransferEncoding;

/// The MIME part tree of a message, as described by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyStructure {
    /// A leaf part.
    Single {
        /// Media type, e.g. `text`.
        media_type: String,

        /// Media subtype, e.g. `plain`.
        subtype: String,

        /// Content-transfer-encoding of the part.
        encoding: TransferEncoding,
    },

    /// A multipart container.
    Multipart {
        /// Multipart subtype, e.g. `alternative`.
        subtype: String,

        /// Child parts, in order.
        parts: Vec<BodyStructure>,
    },
}

impl BodyStructure {
    /// Shorthand for a leaf part.
    pub fn single(media_type: &str, subtype: &str, encoding: TransferEncoding) -> Self {
        Self::Single {
            media_type: media_type.to_owned(),
            subtype: subtype.to_owned(),
            encoding,
        }
    }

    /// Shorthand for a multipart container.
    pub fn multipart(subtype: &str, parts: Vec<BodyStructure>) -> Self {
        Self::Multipart {
            subtype: subtype.to_owned(),
            parts,
        }
    }
}

/// IMAP section path of a part, e.g. `1.2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartPath(pub Vec<u32>);

impl std::fmt::Display for PartPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for index in &self.0 {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{index}")?;
            first = false;
        }
        Ok(())
    }
}

/// A plain-text part worth previewing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPart {
    /// Where the part lives in the message.
    pub path: PartPath,

    /// How the part content is encoded.
    pub encoding: TransferEncoding,
}

/// Find the first `text/plain` part, depth-first in part order.
///
/// A non-multipart message is its own part `1`.
pub fn find_plain_text(structure: &BodyStructure) -> Option<TextPart> {
    match structure {
        BodyStructure::Single { .. } => {
            plain_text_encoding(structure).map(|encoding| TextPart {
                path: PartPath(vec![1]),
                encoding,
            })
        }
        BodyStructure::Multipart { parts, .. } => {
            let mut path = Vec::new();
            search_parts(parts, &mut path)
        }
    }
}

/// Depth-first search through the children of a multipart.
fn search_parts(parts: &[BodyStructure], path: &mut Vec<u32>) -> Option<TextPart> {
    for (index, part) in (1..).zip(parts) {
        path.push(index);
        let found = match part {
            BodyStructure::Single { .. } => plain_text_encoding(part).map(|encoding| TextPart {
                path: PartPath(path.clone()),
                encoding,
            }),
            BodyStructure::Multipart { parts, .. } => search_parts(parts, path),
        };
        path.pop();

        if found.is_some() {
            return found;
        }
    }
    None
}

/// The encoding of a leaf part if it is `text/plain`.
fn plain_text_encoding(part: &BodyStructure) -> Option<TransferEncoding> {
    match part {
        BodyStructure::Single {
            media_type,
            subtype,
            encoding,
        } if media_type.eq_ignore_ascii_case("text") && subtype.eq_ignore_ascii_case("plain") => {
            Some(encoding.clone())
        }
        _ => None,
    }
}

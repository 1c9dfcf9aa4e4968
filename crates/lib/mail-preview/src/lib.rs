//! Just enough MIME decoding to preview a message in a notification.
//!
//! Everything here operates on data already fetched from the server: raw
//! header field bytes, a body structure description and a bounded prefix of
//! one body part.

mod encoded_word;
mod header;
mod preview;
mod structure;
mod summary;
mod transfer;

pub use encoded_word::*;
pub use header::*;
pub use preview::*;
pub use structure::*;
pub use summary::*;
pub use transfer::*;

//! RFC 2047 encoded-word decoding for header values.

/// Replace every encoded-word in a header value by its decoded text.
///
/// Whitespace separating two adjacent encoded-words is dropped and the
/// declared charset is converted to UTF-8. A value that cannot be parsed
/// is returned unchanged.
pub fn decode_encoded_words(value: &str) -> String {
    if !value.contains("=?") {
        return value.to_owned();
    }

    let synthetic = format!("X: {value}");
    match mailparse::parse_header(synthetic.as_bytes()) {
        Ok((header, _)) => header.get_value(),
        Err(_) => value.to_owned(),
    }
}

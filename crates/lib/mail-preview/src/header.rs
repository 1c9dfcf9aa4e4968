//! Header field values as fetched with `BODY.PEEK[HEADER.FIELDS (...)]`.

/// Turn a fetched header field into its display value.
///
/// Folded lines are unfolded, the `Name:` prefix is stripped and any
/// encoded-words are decoded.
pub fn header_value(raw: &[u8]) -> String {
    let raw = raw.trim_ascii_start();
    if raw.is_empty() {
        return String::new();
    }

    match mailparse::parse_header(raw) {
        Ok((header, _)) => header.get_value().trim().to_owned(),
        Err(_) => String::from_utf8_lossy(raw).trim().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_field_name() {
        assert_eq!(
            header_value(b"From: A Sender <a@x.com>\r\n\r\n"),
            "A Sender <a@x.com>"
        );
        assert_eq!(header_value(b"Subject: Hi\r\n\r\n"), "Hi");
    }

    #[test]
    fn field_name_is_case_insensitive_and_space_optional() {
        assert_eq!(header_value(b"SUBJECT:Hi"), "Hi");
    }

    #[test]
    fn keeps_colons_inside_value() {
        assert_eq!(header_value(b"Subject: Re: lunch"), "Re: lunch");
    }

    #[test]
    fn unfolds_continuation_lines() {
        assert_eq!(
            header_value(b"Subject: a very\r\n long subject\r\n\r\n"),
            "a very long subject"
        );
    }

    #[test]
    fn decodes_encoded_words() {
        assert_eq!(header_value(b"Subject: =?UTF-8?B?SGk=?=\r\n"), "Hi");
    }

    #[test]
    fn decodes_latin1_encoded_words() {
        assert_eq!(
            header_value(b"From: =?ISO-8859-1?Q?Andr=E9?= <andre@example.com>\r\n"),
            "Andr\u{e9} <andre@example.com>"
        );
    }

    #[test]
    fn missing_header_is_empty() {
        assert_eq!(header_value(b"\r\n"), "");
    }
}

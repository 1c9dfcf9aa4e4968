//! Tests for message structure search and preview decoding.

use mail_preview::*;

fn text_plain(encoding: TransferEncoding) -> BodyStructure {
    BodyStructure::single("TEXT", "PLAIN", encoding)
}

fn text_html() -> BodyStructure {
    BodyStructure::single("text", "html", TransferEncoding::QuotedPrintable)
}

#[test]
fn single_plain_body_is_part_one() {
    let found = find_plain_text(&text_plain(TransferEncoding::SevenBit));

    assert_eq!(
        found,
        Some(TextPart {
            path: PartPath(vec![1]),
            encoding: TransferEncoding::SevenBit,
        })
    );
}

#[test]
fn single_html_body_has_no_text_part() {
    assert_eq!(find_plain_text(&text_html()), None);
}

#[test]
fn first_plain_part_of_multipart_wins() {
    let structure = BodyStructure::multipart(
        "mixed",
        vec![
            text_html(),
            text_plain(TransferEncoding::Base64),
            text_plain(TransferEncoding::SevenBit),
        ],
    );

    let found = find_plain_text(&structure).expect("plain part");

    assert_eq!(found.path, PartPath(vec![2]));
    assert_eq!(found.encoding, TransferEncoding::Base64);
}

#[test]
fn nested_alternative_is_searched() {
    let structure = BodyStructure::multipart(
        "mixed",
        vec![
            BodyStructure::multipart(
                "alternative",
                vec![text_html(), text_plain(TransferEncoding::QuotedPrintable)],
            ),
            BodyStructure::single("application", "pdf", TransferEncoding::Base64),
        ],
    );

    let found = find_plain_text(&structure).expect("plain part");

    assert_eq!(found.path.to_string(), "1.2");
}

#[test]
fn multipart_without_plain_text() {
    let structure = BodyStructure::multipart(
        "related",
        vec![
            text_html(),
            BodyStructure::single("image", "png", TransferEncoding::Base64),
        ],
    );

    assert_eq!(find_plain_text(&structure), None);
}

#[test]
fn quoted_printable_preview() {
    let text = preview_text(b"Hello=20world", &TransferEncoding::QuotedPrintable).unwrap();

    assert_eq!(text, "Hello world");
}

#[test]
fn base64_preview() {
    let text = preview_text(b"SGVsbG8gd29ybGQ=\r\n", &TransferEncoding::Base64).unwrap();

    assert_eq!(text, "Hello world");
}

#[test]
fn seven_bit_preview_is_verbatim() {
    let text = preview_text(b"Hi =20 there\r\n", &TransferEncoding::SevenBit).unwrap();

    assert_eq!(text, "Hi =20 there");
}

#[test]
fn preview_is_bounded() {
    let data = "é".repeat(150);

    let text = preview_text(data.as_bytes(), &TransferEncoding::EightBit).unwrap();

    assert!(text.len() <= PREVIEW_BYTES as usize);
    assert_eq!(text, "é".repeat(100));
}

#[test]
fn cut_multibyte_character_is_dropped() {
    let mut data = "a".repeat(10).into_bytes();
    data.extend_from_slice(&"é".as_bytes()[..1]);

    let text = preview_text(&data, &TransferEncoding::EightBit).unwrap();

    assert_eq!(text, "a".repeat(10));
}

#[test]
fn malformed_base64_is_an_error() {
    assert!(preview_text(b"!!!!", &TransferEncoding::Base64).is_err());
}

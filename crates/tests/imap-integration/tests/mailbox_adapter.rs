//! Docker-backed tests of the IMAP mailbox adapter.

use std::{error::Error, time::Duration};

use imap_integration::MailServer;
use imap_mailbox::ImapMailbox;
use mail_preview::{PREVIEW_BYTES, TransferEncoding, find_plain_text, header_value, preview_text};
use mail_watcher::{IdleEvent, Mailbox as _, summarize};

type TestResult = Result<(), Box<dyn Error + Send + Sync>>;

const IMAP_USER: &str = "test";
const IMAP_PASSWORD: &str = "secret";

const MULTIPART: &[u8] = b"From: =?UTF-8?Q?J=C3=BCrgen?= <j@example.com>\r\n\
Subject: Quarterly numbers\r\n\
MIME-Version: 1.0\r\n\
Content-Type: multipart/alternative; boundary=\"b1\"\r\n\
\r\n\
--b1\r\n\
Content-Type: text/plain; charset=utf-8\r\n\
Content-Transfer-Encoding: quoted-printable\r\n\
\r\n\
Hello=20there, numbers are attached.\r\n\
--b1\r\n\
Content-Type: text/html; charset=utf-8\r\n\
\r\n\
<p>Hello there</p>\r\n\
--b1--\r\n";

const HTML_ONLY: &[u8] = b"From: news@example.com\r\n\
Subject: Newsletter\r\n\
MIME-Version: 1.0\r\n\
Content-Type: text/html; charset=utf-8\r\n\
\r\n\
<p>News</p>\r\n";

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn reads_message_without_marking_it_seen() -> TestResult {
    if !imap_integration::integration_tests_enabled() {
        return Ok(());
    }

    let server = MailServer::start(IMAP_USER, IMAP_PASSWORD).await?;
    let mut session = server.login().await?;
    session.append("INBOX", None, None, MULTIPART).await?;

    let mut mailbox = ImapMailbox::new(session);
    mailbox.examine("INBOX").await?;

    assert!(!mailbox.fetch_flags(1).await?.is_seen());

    let from = header_value(&mailbox.fetch_header_field(1, "FROM").await?);
    assert_eq!(from, "J\u{fc}rgen <j@example.com>");

    let structure = mailbox.fetch_body_structure(1).await?;
    let part = find_plain_text(&structure).ok_or("no text/plain part")?;
    assert_eq!(part.path.to_string(), "1");
    assert_eq!(part.encoding, TransferEncoding::QuotedPrintable);

    let data = mailbox
        .fetch_part_prefix(1, &part.path, PREVIEW_BYTES)
        .await?;
    let preview = preview_text(&data, &part.encoding)?;
    assert!(preview.starts_with("Hello there"));

    assert!(!mailbox.fetch_flags(1).await?.is_seen());

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn summarizes_messages() -> TestResult {
    if !imap_integration::integration_tests_enabled() {
        return Ok(());
    }

    let server = MailServer::start(IMAP_USER, IMAP_PASSWORD).await?;
    let mut session = server.login().await?;
    session.append("INBOX", None, None, MULTIPART).await?;
    session.append("INBOX", None, None, HTML_ONLY).await?;
    session
        .append("INBOX", Some("(\\Seen)"), None, HTML_ONLY)
        .await?;

    let mut mailbox = ImapMailbox::new(session);
    mailbox.examine("INBOX").await?;

    let summary = summarize(&mut mailbox, 1).await;
    assert_eq!(summary.subject, "Quarterly numbers");
    assert!(summary.body.starts_with("Hello there"));

    let summary = summarize(&mut mailbox, 2).await;
    assert_eq!(summary.from, "news@example.com");
    assert_eq!(summary.body, "HTML message");

    assert!(mailbox.fetch_flags(3).await?.is_seen());

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn idle_reports_new_message() -> TestResult {
    if !imap_integration::integration_tests_enabled() {
        return Ok(());
    }

    let server = MailServer::start(IMAP_USER, IMAP_PASSWORD).await?;

    let mut mailbox = ImapMailbox::new(server.login().await?);
    mailbox.examine("INBOX").await?;

    let mut sender = server.login().await?;
    let deliver = async {
        tokio::time::sleep(Duration::from_millis(500)).await;
        sender.append("INBOX", None, None, HTML_ONLY).await
    };

    let (event, delivered) = tokio::join!(mailbox.idle(Duration::from_secs(30)), deliver);
    delivered?;

    assert_eq!(event?, IdleEvent::NewMessages(1));

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn idle_times_out_quietly() -> TestResult {
    if !imap_integration::integration_tests_enabled() {
        return Ok(());
    }

    let server = MailServer::start(IMAP_USER, IMAP_PASSWORD).await?;
    let mut mailbox = ImapMailbox::new(server.login().await?);
    mailbox.examine("INBOX").await?;

    let event = mailbox.idle(Duration::from_secs(1)).await?;
    assert_eq!(event, IdleEvent::Timeout);

    mailbox.examine("INBOX").await?;

    Ok(())
}

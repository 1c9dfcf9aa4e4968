//! Tests for config discovery and loading.

use std::path::PathBuf;

use config_load::{LoadError, LocateError, read_first};

#[tokio::test]
async fn test_read_first_existing_file() {
    let paths = vec![
        "tests/fixtures/nonexistent.yaml",
        "tests/fixtures/config.yaml",
    ];
    let located = read_first(&paths).await.unwrap();
    assert!(located.payload.starts_with("accounts:"));
    assert_eq!(located.path, PathBuf::from("tests/fixtures/config.yaml"));
}

#[tokio::test]
async fn test_read_no_files_found() {
    let paths = vec![
        "tests/fixtures/nonexistent1.yaml",
        "tests/fixtures/nonexistent2.yaml",
    ];
    match read_first(&paths).await.unwrap_err() {
        LocateError::NotFound { paths } => {
            assert_eq!(
                paths,
                vec![
                    PathBuf::from("tests/fixtures/nonexistent1.yaml"),
                    PathBuf::from("tests/fixtures/nonexistent2.yaml"),
                ]
            );
        }
        other => panic!("Expected NotFound error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_with_override_path() {
    let located = config_load::with(Some(PathBuf::from("tests/fixtures/config.yaml")))
        .await
        .unwrap();

    assert_eq!(located.payload.accounts.len(), 1);
    assert_eq!(located.payload.accounts[0].hostname, "mail.example.com");
}

#[tokio::test]
async fn test_with_broken_file() {
    let error = config_load::with(Some(PathBuf::from("tests/fixtures/broken.yaml")))
        .await
        .unwrap_err();

    assert!(matches!(error, LoadError::Parse { ref path, .. } if path.ends_with("broken.yaml")));
}

#[tokio::test]
async fn test_with_imapbiffrc_file() {
    let located = config_load::with(Some(PathBuf::from("tests/fixtures/imapbiffrc")))
        .await
        .unwrap();

    let accounts = &located.payload.accounts;
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[1].username, "user2@example.com");
    assert_eq!(accounts[1].label.as_deref(), Some("[user2 mail] "));
}

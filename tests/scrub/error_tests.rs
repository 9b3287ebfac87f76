// Tests for the error module

use emoji_scrub::scrub::ScrubError;
use std::error::Error;
use std::io;
use std::path::PathBuf;

#[test]
fn test_file_not_found_display() {
    let error = ScrubError::FileNotFound {
        path: PathBuf::from("./docs/development/DEVLOG.xml"),
    };
    let message = format!("{}", error);
    assert!(message.contains("file not found"));
    assert!(message.contains("./docs/development/DEVLOG.xml"));
}

#[test]
fn test_from_io_error_not_found() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
    let error = ScrubError::from_io_error(io_err, "reading", PathBuf::from("test.xml"));

    match error {
        ScrubError::FileNotFound { path } => assert_eq!(path, PathBuf::from("test.xml")),
        other => panic!("Expected FileNotFound error, got {:?}", other),
    }
}

#[test]
fn test_from_io_error_permission_denied() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
    let error = ScrubError::from_io_error(io_err, "writing", PathBuf::from("protected.xml"));

    match &error {
        ScrubError::PermissionDenied { path, operation } => {
            assert_eq!(path, &PathBuf::from("protected.xml"));
            assert_eq!(operation, "writing");
        }
        other => panic!("Expected PermissionDenied error, got {:?}", other),
    }
    assert_eq!(
        error.to_string(),
        "permission denied while writing protected.xml"
    );
}

#[test]
fn test_from_io_error_other_keeps_source() {
    let io_err = io::Error::new(io::ErrorKind::Other, "disk full");
    let error = ScrubError::from_io_error(io_err, "writing", PathBuf::from("out.xml"));

    let message = error.to_string();
    assert!(message.contains("I/O error while writing out.xml"));
    assert!(message.contains("disk full"));
    assert!(error.source().is_some());
}

#[test]
fn test_invalid_encoding_display() {
    let source = String::from_utf8(vec![b'a', 0xFF]).unwrap_err();
    let error = ScrubError::InvalidEncoding {
        path: PathBuf::from("latin1.xml"),
        source,
    };

    assert!(error.to_string().starts_with("latin1.xml is not valid UTF-8"));
    assert!(error.source().is_some());
}

#[test]
fn test_invalid_pattern_has_no_path() {
    let error = ScrubError::InvalidPattern {
        reason: "empty".to_string(),
    };

    assert_eq!(error.path(), None);
    assert!(error.source().is_none());
    assert_eq!(error.to_string(), "invalid emoji pattern: empty");
}

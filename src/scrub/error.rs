// Centralized error handling for the scrub pass
// Every per-file failure carries the path it happened on

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

/// Error raised while cleaning a single target file or building the pattern
#[derive(Debug)]
pub enum ScrubError {
    /// File system errors with context
    FileNotFound { path: PathBuf },
    PermissionDenied { path: PathBuf, operation: String },
    Io { path: PathBuf, operation: String, source: io::Error },

    /// Content was not valid UTF-8
    InvalidEncoding { path: PathBuf, source: FromUtf8Error },

    /// Pattern parameters that cannot be compiled
    InvalidPattern { reason: String },
}

impl fmt::Display for ScrubError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScrubError::FileNotFound { path } => {
                write!(f, "file not found: {}", path.display())
            }
            ScrubError::PermissionDenied { path, operation } => {
                write!(f, "permission denied while {} {}", operation, path.display())
            }
            ScrubError::Io { path, operation, source } => {
                write!(f, "I/O error while {} {}: {}", operation, path.display(), source)
            }
            ScrubError::InvalidEncoding { path, source } => {
                write!(f, "{} is not valid UTF-8: {}", path.display(), source.utf8_error())
            }
            ScrubError::InvalidPattern { reason } => {
                write!(f, "invalid emoji pattern: {}", reason)
            }
        }
    }
}

impl std::error::Error for ScrubError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScrubError::Io { source, .. } => Some(source),
            ScrubError::InvalidEncoding { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl ScrubError {
    /// Classify an io::Error raised by `operation` on `path`
    pub fn from_io_error(err: io::Error, operation: &str, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => ScrubError::FileNotFound { path },
            io::ErrorKind::PermissionDenied => ScrubError::PermissionDenied {
                path,
                operation: operation.to_string(),
            },
            _ => ScrubError::Io {
                path,
                operation: operation.to_string(),
                source: err,
            },
        }
    }

    /// Path the failure happened on, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ScrubError::FileNotFound { path }
            | ScrubError::PermissionDenied { path, .. }
            | ScrubError::Io { path, .. }
            | ScrubError::InvalidEncoding { path, .. } => Some(path),
            ScrubError::InvalidPattern { .. } => None,
        }
    }
}

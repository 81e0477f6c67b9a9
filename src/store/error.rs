//! Store error types

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure reading or writing persisted state
#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Corrupt { path: PathBuf, source: serde_json::Error },
    Encode(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Corrupt { path, source } => {
                write!(f, "{} is not a valid store: {source}", path.display())
            }
            Self::Encode(source) => write!(f, "Failed to encode store: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Corrupt { source, .. } | Self::Encode(source) => Some(source),
        }
    }
}

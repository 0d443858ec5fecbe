use std::fmt;
use std::path::PathBuf;

use crate::persist::PersistError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "HTTP {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Failure of a single document; never aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("{0}")]
    Fetch(#[from] FetchError),
    #[error("{0}")]
    Persist(#[from] PersistError),
}

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("failed to fetch documentation index")]
    IndexFetch(#[source] FetchError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkFailure {
    pub title: String,
    pub message: String,
}

/// What a completed run wrote and what it skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub saved: Vec<PathBuf>,
    pub failed: Vec<LinkFailure>,
}

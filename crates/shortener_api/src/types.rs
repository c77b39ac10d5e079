use std::fmt;

use thiserror::Error;

/// One short-URL-to-original-URL mapping, with the short URL already
/// qualified by the page origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrlRecord {
    pub short_url: String,
    pub original_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("shorten failed: {0}")]
    Shorten(FailureKind),
    #[error("history fetch failed: {0}")]
    History(FailureKind),
    #[error("recover failed: {0}")]
    Recover(FailureKind),
}

impl ApiError {
    pub fn kind(&self) -> &FailureKind {
        match self {
            ApiError::Shorten(kind) | ApiError::History(kind) | ApiError::Recover(kind) => kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    HttpStatus(u16),
    Network,
    Decode,
    /// A history entry that is not a single-key object.
    MalformedRecord,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "invalid response body"),
            FailureKind::MalformedRecord => write!(f, "malformed history record"),
        }
    }
}

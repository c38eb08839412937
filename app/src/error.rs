use std::fmt;

/// Failure while loading the directory dataset.
///
/// The variants only exist for logging; every one of them is presented to
/// the user as the same "failed, please refresh" message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    Network(String),
    Status(u16),
    Malformed(String),
    Location(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "Network error: {e}"),
            Self::Status(code) => write!(f, "Unexpected HTTP status: {code}"),
            Self::Malformed(e) => write!(f, "Malformed dataset: {e}"),
            Self::Location(e) => write!(f, "Cannot resolve dataset URL: {e}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<reqwest::Error> for LoadError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Malformed(e.to_string())
        } else if let Some(status) = e.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Malformed(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;

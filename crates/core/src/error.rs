//! Error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Faults raised inside the chat subsystem.
///
/// Only [`Error::InvalidInput`] ever reaches a caller; the others are
/// absorbed at the pipeline boundary (logged, then mapped to the default
/// intent, empty search results, or an untrained classifier).
#[derive(Debug, Error)]
pub enum Error {
    /// The request carried no message. The payload is the complete,
    /// localized sentence shown to the caller.
    #[error("{0}")]
    InvalidInput(String),

    /// Fault during intent resolution.
    #[error("classification failed: {0}")]
    Classification(String),

    /// Fault raised by the search gateway.
    #[error("listing search failed: {0}")]
    Search(String),

    /// Fault during classifier training or model persistence.
    #[error("classifier training failed: {0}")]
    Training(String),

    /// Fault while loading configuration data.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Training(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Training(err.to_string())
    }
}

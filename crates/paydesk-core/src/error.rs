//! Error types for paydesk-core

use thiserror::Error;

/// Result type alias using paydesk-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in paydesk-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Backend answered with a non-2xx status
    #[error("Request failed with HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Network or client-side transport failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status of the failed response, if the backend answered at all.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

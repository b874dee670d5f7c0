//! Error types for the catalog client
//!
//! These errors never reach the rendered view. The coordinator logs them and
//! replaces them with a single user-facing banner message.

use thiserror::Error;

/// Errors raised while talking to the catalog backend or loading config
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CatalogError {
    /// Whether a later attempt could plausibly succeed.
    ///
    /// Only used to enrich diagnostics; nothing retries automatically.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status { status, .. } => *status >= 500,
            Self::Decode(_) | Self::Config(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

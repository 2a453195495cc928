//! Client-specific error type wrapping reqwest errors.

use metahive_domain::error::MetaHiveError;
use reqwest::StatusCode;

/// Errors raised while talking to a remote metahive server.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent or the body could not be read.
    #[error("request to metahive server failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status. `body` carries the
    /// server's message, which for store failures is the store's own text.
    #[error("metahive server returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The `get_tags` body was not a JSON array of tags.
    #[error("invalid tag list")]
    Decode(#[from] serde_json::Error),
}

impl From<ClientError> for MetaHiveError {
    fn from(err: ClientError) -> Self {
        Self::Storage(Box::new(err))
    }
}

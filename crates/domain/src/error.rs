//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`MetaHiveError`]
//! via `From`. Storage failures are boxed so that the domain never depends on a
//! concrete driver, while their `Display` output stays the store's own message.

/// Top-level error returned by application services and ports.
#[derive(Debug, thiserror::Error)]
pub enum MetaHiveError {
    /// The request was rejected before touching the store.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store (or a remote metahive) reported a failure.
    #[error(transparent)]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Errors raised while turning request input into domain values.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A recognised action was called without one of its parameters.
    #[error("missing query parameter `{parameter}` for action `{action}`")]
    MissingParameter {
        action: &'static str,
        parameter: &'static str,
    },
}

//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use metahive_domain::error::MetaHiveError;

/// Maps [`MetaHiveError`] to a plain-text HTTP response.
///
/// The body is the error's message as-is; for storage failures that is the
/// store's own text (e.g. `UNIQUE constraint failed: entries.id`).
#[derive(Debug)]
pub struct ApiError(MetaHiveError);

impl From<MetaHiveError> for ApiError {
    fn from(err: MetaHiveError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            MetaHiveError::Validation(_) => StatusCode::BAD_REQUEST,
            MetaHiveError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.0.to_string()).into_response()
    }
}

//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use metahive_app::ports::{EntryRepository, TagRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the action endpoint at `/api` and a liveness check at `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<TR, ER>(state: AppState<TR, ER>) -> Router
where
    TR: TagRepository + Send + Sync + 'static,
    ER: EntryRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api", get(crate::api::dispatch::<TR, ER>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

//! # metahive-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve `GET /api?action=...`, turning the query string into a domain
//!   [`Action`](metahive_domain::action::Action) and dispatching it to the
//!   application services (driving adapter)
//! - Map results into plain-text or JSON bodies, and failures into plain-text
//!   bodies carrying the underlying message
//! - Serve `GET /health` for liveness checks
//!
//! ## Dependency rule
//! Depends on `metahive-app` (for port traits and services) and `metahive-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

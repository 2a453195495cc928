//! # metahive-adapter-http-client-reqwest
//!
//! Remote persistence adapter using [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `metahive-app::ports::storage`
//!   by calling the `/api` endpoint of a running metahive server
//! - Encode inputs as query parameters and decode the plain-text or JSON bodies
//! - Treat an empty lookup body as "not found"
//!
//! ## Dependency rule
//! Depends on `metahive-app` (for port traits) and `metahive-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod client;
pub mod error;

pub use client::HttpMetaHiveClient;
pub use error::ClientError;

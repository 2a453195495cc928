//! # metahive-adapter-storage-sqlx
//!
//! Relational persistence adapter using [sqlx](https://docs.rs/sqlx), for
//! `SQLite` and `MySQL`.
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `metahive-app::ports::storage`
//! - Open one connection per repository call and release it when the call ends
//!   (no pool)
//! - Bind every value as a statement parameter
//! - Surface the store's native error message unchanged
//!
//! ## Dependency rule
//! Depends on `metahive-app` (for port traits) and `metahive-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod connector;
pub mod error;
pub mod mysql;
mod rows;
pub mod sqlite;

pub use connector::Connector;
pub use error::StorageError;
pub use mysql::{MySqlConfig, MySqlConnector, MySqlEntryRepository, MySqlTagRepository};
pub use sqlite::{SqliteConfig, SqliteConnector, SqliteEntryRepository, SqliteTagRepository};

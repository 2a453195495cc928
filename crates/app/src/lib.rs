//! # metahive-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `TagRepository` — list, look up and upsert tags
//!   - `EntryRepository` — look up and insert entries
//! - Define **driving/inbound ports** as use-case structs:
//!   - `TagService` — list tags, find a tag by name, update a tag
//!   - `EntryService` — find an entry's base, add an entry
//!
//! ## Dependency rule
//! Depends on `metahive-domain` only (plus `tracing` for spans).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

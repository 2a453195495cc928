//! # metahive-domain
//!
//! Pure domain model for the metahive tag/entry store.
//!
//! ## Responsibilities
//! - Define **Tags** (a human-readable name mapped to an opaque identifier)
//! - Define **Entries** (an identifier mapped to the base entry it derives from)
//! - Define **Actions**, the closed set of operations a request can ask for
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod action;
pub mod entry;
pub mod error;
pub mod tag;

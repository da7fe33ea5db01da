//! # domolite-app
//!
//! Application layer — use-cases over the domain model.
//!
//! ## Responsibilities
//! - Provide the **walkthrough** use-case: the full demonstration run
//!   (listing, sorted views, introspection reports) written to any
//!   `std::io::Write` sink
//! - Orchestrate domain objects without knowing *where* the output goes
//!
//! ## Dependency rule
//! Depends on `domolite-domain` only (plus `tracing` for spans).
//! The binary depends on *this* crate, not the reverse.

pub mod walkthrough;

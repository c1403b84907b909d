//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the durable key-value access contract the stores depend on.
//! - Isolate SQLite query details from store orchestration.
//!
//! # Invariants
//! - Repository construction validates the backing schema before use.
//! - Repository APIs return semantic errors in addition to DB transport
//!   errors.

pub mod kv_repo;

//! Domain models for the content and identity stores.
//!
//! # Responsibility
//! - Define the canonical records matching the durable JSON layout.
//! - Keep validation rules next to the data they protect.
//!
//! # Invariants
//! - Record identifiers are stable and never reused.
//! - serde shapes must round-trip the stored JSON byte-for-byte in meaning
//!   (field names and value formats).

pub mod article;
pub mod comment;
pub mod user;

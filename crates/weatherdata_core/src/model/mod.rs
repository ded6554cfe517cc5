//! Domain model for weather station readings.
//!
//! # Responsibility
//! - Define the canonical reading record persisted by the repository.
//!
//! # Invariants
//! - Every reading is identified by its unique `timestamp` natural key.
//! - Rows are append-only; there is no update or delete lifecycle.

pub mod reading;

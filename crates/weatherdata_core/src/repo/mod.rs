//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data-access contract for weather reading storage.
//! - Isolate SQLite query details behind one execution primitive.
//!
//! # Invariants
//! - Repository operations never panic and never return a transport
//!   error; failures surface as `QueryOutcome::Failure` after logging.
//! - Write paths must call `WeatherReading::validate()` before SQL
//!   mutations.

pub mod weather_repo;

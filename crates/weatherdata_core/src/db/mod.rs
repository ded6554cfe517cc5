//! SQLite storage bootstrap for weather reading persistence.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the repository layer.
//! - Define the transport error type shared by all persistence code.
//!
//! # Invariants
//! - Connections are short-lived: one per logical operation, closed by
//!   scope exit on every path.
//! - Schema creation is an explicit repository operation, not an open-time
//!   side effect.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Transport-level storage error.
///
/// Exactly one kind matters at this layer: the underlying engine rejected
/// an operation. Connection failures, malformed statements, constraint
/// violations and I/O errors all land here.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

//! Data-access layer for periodic weather station readings.
//! This crate is the single source of truth for the storage contract.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::reading::{ReadingValidationError, WeatherReading};
pub use repo::weather_repo::{
    LabeledRow, ParamSet, PositionalRow, QueryOutcome, SqlValue, SqliteWeatherRepository,
    WeatherRepository,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

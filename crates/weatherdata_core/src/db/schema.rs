//! Weather table schema and fixed statement text.
//!
//! # Responsibility
//! - Own the persisted-state contract: the `weather` table DDL and the
//!   declared column order.
//! - Keep every fixed SQL string used by the repository in one place.
//!
//! # Invariants
//! - Column names and types must not change; the database file is shared
//!   with external consumers that rely on this exact layout.
//! - `COLUMNS` lists columns in declared order, which is also the order
//!   `SELECT *` produces rows in.

/// Name of the single table owned by this crate.
pub const TABLE_NAME: &str = "weather";

/// Idempotent DDL for the weather table.
pub const WEATHER_TABLE_SQL: &str = include_str!("schema/weather.sql");

/// Declared column order of the `weather` table.
pub const COLUMNS: [&str; 16] = [
    "id",
    "timestamp",
    "outdoortemperature",
    "outdoorhumidity",
    "dewpoint",
    "heatindex",
    "windchill",
    "barometricpressure",
    "rain",
    "windspeed",
    "windaverage",
    "peakwind",
    "winddirection",
    "indoortemperature",
    "indoorhumidity",
    "timestampdateonly",
];

/// Fixed 15-column insert; `id` is assigned by the engine.
pub const INSERT_READING_SQL: &str = "INSERT INTO weather (
    timestamp,
    outdoortemperature,
    outdoorhumidity,
    dewpoint,
    heatindex,
    windchill,
    barometricpressure,
    rain,
    windspeed,
    windaverage,
    peakwind,
    winddirection,
    indoortemperature,
    indoorhumidity,
    timestampdateonly
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15);";

/// Full-table read in natural (id ascending) scan order.
pub const SELECT_ALL_SQL: &str = "SELECT * FROM weather;";

/// Most recent reading by assigned id.
pub const SELECT_CURRENT_SQL: &str = "SELECT * FROM weather ORDER BY id DESC LIMIT 1;";

//! Weather repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the append/read API over the `weather` table.
//! - Translate every storage failure into a logged `QueryOutcome::Failure`.
//!
//! # Invariants
//! - One connection per operation, released on every exit path.
//! - Every statement runs inside a transaction committed after a
//!   successful execute; a failed batch commits nothing.
//! - No error crosses the public boundary; callers observe outcomes only.

use crate::db::{open_db, schema, DbResult};
use crate::model::reading::WeatherReading;
use log::{error, info};
use rusqlite::{params_from_iter, Row};
use std::path::PathBuf;
use std::time::Instant;

/// Raw SQLite value as stored in a result cell.
pub type SqlValue = rusqlite::types::Value;

/// One ordered group of bound values for a single statement execution.
pub type ParamSet = Vec<SqlValue>;

/// One result row as raw column values in statement column order.
pub type PositionalRow = Vec<SqlValue>;

/// One result row as an order-preserving column-name-to-value mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledRow {
    entries: Vec<(String, SqlValue)>,
}

impl LabeledRow {
    /// Returns the value stored under `column`, if the statement produced
    /// that column.
    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Column names in statement order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// `(column, value)` pairs in statement order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcome of one storage operation.
///
/// This is the errors-as-values boundary: `Failure` means the underlying
/// engine rejected the operation and the detail has already been logged.
/// `Success` carries the fetched rows, which may legitimately be empty.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome<R> {
    Success(Vec<R>),
    Failure,
}

impl<R> QueryOutcome<R> {
    /// Whether the statement executed and committed.
    ///
    /// Success concerns execution only; an empty result set is still a
    /// success. Callers needing a "no data" distinction must check the
    /// row count.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Fetched rows, or `None` on failure.
    pub fn rows(&self) -> Option<&[R]> {
        match self {
            Self::Success(rows) => Some(rows),
            Self::Failure => None,
        }
    }

    /// Consumes the outcome, yielding rows on success.
    pub fn into_rows(self) -> Option<Vec<R>> {
        match self {
            Self::Success(rows) => Some(rows),
            Self::Failure => None,
        }
    }
}

/// Data-access contract for weather reading storage.
///
/// Keeps orchestration layers storage-agnostic; `SqliteWeatherRepository`
/// is the canonical implementation.
pub trait WeatherRepository {
    /// Creates the `weather` table when absent.
    fn create_weather_table(&self) -> QueryOutcome<PositionalRow>;
    /// Appends one reading.
    fn insert_reading(&self, reading: &WeatherReading) -> QueryOutcome<PositionalRow>;
    /// Appends several readings as one all-or-nothing batch.
    fn insert_readings(&self, readings: &[WeatherReading]) -> QueryOutcome<PositionalRow>;
    /// Returns every stored reading in id order.
    fn all_readings(&self) -> QueryOutcome<PositionalRow>;
    /// Returns the most recently inserted reading as a labeled row.
    fn current_weather(&self) -> QueryOutcome<LabeledRow>;
}

/// SQLite-backed weather repository.
///
/// Owns the database file path only. Every operation opens its own
/// short-lived connection, so instances are cheap and hold no engine
/// resources between calls.
pub struct SqliteWeatherRepository {
    db_path: PathBuf,
    connection_status: bool,
}

impl SqliteWeatherRepository {
    /// Creates a repository for the database file at `path`.
    ///
    /// Construction never fails: a connectivity self-check runs
    /// immediately and its outcome is recorded as
    /// [`connection_status`](Self::connection_status). Each subsequent
    /// operation opens its own connection and can fail independently.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let mut repo = Self {
            db_path: path.into(),
            connection_status: false,
        };
        repo.connection_status = repo.create_connection();
        repo
    }

    /// Outcome of the construction-time connectivity self-check.
    pub fn connection_status(&self) -> bool {
        self.connection_status
    }

    /// Opens a connection to the configured path and drops it immediately.
    ///
    /// Creates the database file when it does not exist. Returns `false`
    /// when the engine rejects the open; the failure is advisory and is
    /// reported to the log sink, not to the caller as an error.
    pub fn create_connection(&self) -> bool {
        match open_db(&self.db_path) {
            Ok(_conn) => {
                info!("event=connection_check module=repo status=ok");
                true
            }
            Err(err) => {
                error!("event=connection_check module=repo status=error error={err}");
                false
            }
        }
    }

    /// Executes `sql` with positional result shaping.
    ///
    /// # Contract
    /// - Zero parameter sets: execute once, unbound.
    /// - One set: bind and execute once.
    /// - Two or more sets: execute once per set inside one transaction,
    ///   all-or-nothing; batch executions fetch no rows.
    /// - The transaction is committed after every successful execute,
    ///   reads included.
    pub fn execute_query(&self, sql: &str, params: &[ParamSet]) -> QueryOutcome<PositionalRow> {
        self.run_query(sql, params, positional_row)
    }

    /// Executes `sql` returning rows as column-name-keyed mappings.
    ///
    /// Same contract as [`execute_query`](Self::execute_query); column
    /// names are read from the statement and each row preserves the
    /// statement's column order.
    pub fn execute_query_labeled(&self, sql: &str, params: &[ParamSet]) -> QueryOutcome<LabeledRow> {
        self.run_query(sql, params, labeled_row)
    }

    /// Single execution primitive behind both public query surfaces and
    /// every domain operation.
    fn run_query<R>(
        &self,
        sql: &str,
        params: &[ParamSet],
        shape: fn(&Row<'_>, &[String]) -> DbResult<R>,
    ) -> QueryOutcome<R> {
        let started_at = Instant::now();
        match self.run_query_inner(sql, params, shape) {
            Ok(rows) => {
                info!(
                    "event=query_execute module=repo status=ok param_sets={} rows={} duration_ms={}",
                    params.len(),
                    rows.len(),
                    started_at.elapsed().as_millis()
                );
                QueryOutcome::Success(rows)
            }
            Err(err) => {
                error!(
                    "event=query_execute module=repo status=error param_sets={} duration_ms={} error={}",
                    params.len(),
                    started_at.elapsed().as_millis(),
                    err
                );
                QueryOutcome::Failure
            }
        }
    }

    fn run_query_inner<R>(
        &self,
        sql: &str,
        params: &[ParamSet],
        shape: fn(&Row<'_>, &[String]) -> DbResult<R>,
    ) -> DbResult<Vec<R>> {
        let mut conn = open_db(&self.db_path)?;
        let tx = conn.transaction()?;

        let rows = {
            let mut stmt = tx.prepare(sql)?;
            let columns: Vec<String> = stmt
                .column_names()
                .into_iter()
                .map(str::to_owned)
                .collect();

            if params.len() > 1 {
                // Batch mode runs each set for its side effects only,
                // within the surrounding transaction.
                for set in params {
                    stmt.execute(params_from_iter(set.iter().cloned()))?;
                }
                Vec::new()
            } else {
                let mut raw_rows = match params.first() {
                    Some(set) => stmt.query(params_from_iter(set.iter().cloned()))?,
                    None => stmt.query([])?,
                };

                let mut shaped = Vec::new();
                while let Some(row) = raw_rows.next()? {
                    shaped.push(shape(row, &columns)?);
                }
                shaped
            }
        };

        tx.commit()?;
        Ok(rows)
    }
}

impl WeatherRepository for SqliteWeatherRepository {
    fn create_weather_table(&self) -> QueryOutcome<PositionalRow> {
        self.execute_query(schema::WEATHER_TABLE_SQL, &[])
    }

    fn insert_reading(&self, reading: &WeatherReading) -> QueryOutcome<PositionalRow> {
        self.insert_readings(std::slice::from_ref(reading))
    }

    fn insert_readings(&self, readings: &[WeatherReading]) -> QueryOutcome<PositionalRow> {
        for reading in readings {
            if let Err(err) = reading.validate() {
                error!(
                    "event=reading_insert module=repo status=error error_code=invalid_reading error={err}"
                );
                return QueryOutcome::Failure;
            }
        }

        let params: Vec<ParamSet> = readings.iter().map(reading_params).collect();
        self.execute_query(schema::INSERT_READING_SQL, &params)
    }

    fn all_readings(&self) -> QueryOutcome<PositionalRow> {
        self.execute_query(schema::SELECT_ALL_SQL, &[])
    }

    fn current_weather(&self) -> QueryOutcome<LabeledRow> {
        self.execute_query_labeled(schema::SELECT_CURRENT_SQL, &[])
    }
}

fn positional_row(row: &Row<'_>, columns: &[String]) -> DbResult<PositionalRow> {
    let mut values = Vec::with_capacity(columns.len());
    for index in 0..columns.len() {
        values.push(row.get::<_, SqlValue>(index)?);
    }
    Ok(values)
}

fn labeled_row(row: &Row<'_>, columns: &[String]) -> DbResult<LabeledRow> {
    let mut entries = Vec::with_capacity(columns.len());
    for (index, name) in columns.iter().enumerate() {
        entries.push((name.clone(), row.get::<_, SqlValue>(index)?));
    }
    Ok(LabeledRow { entries })
}

/// Bound values for the fixed 15-column insert, in declared column order.
fn reading_params(reading: &WeatherReading) -> ParamSet {
    vec![
        SqlValue::Text(reading.timestamp.clone()),
        real_param(reading.outdoor_temperature),
        real_param(reading.outdoor_humidity),
        real_param(reading.dew_point),
        real_param(reading.heat_index),
        real_param(reading.wind_chill),
        real_param(reading.barometric_pressure),
        real_param(reading.rain),
        real_param(reading.wind_speed),
        real_param(reading.wind_average),
        real_param(reading.peak_wind),
        real_param(reading.wind_direction),
        real_param(reading.indoor_temperature),
        real_param(reading.indoor_humidity),
        real_param(reading.timestamp_date_only),
    ]
}

fn real_param(value: Option<f64>) -> SqlValue {
    match value {
        Some(real) => SqlValue::Real(real),
        None => SqlValue::Null,
    }
}

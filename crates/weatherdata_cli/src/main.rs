//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `weatherdata_core` linkage
//!   against a real database file.
//! - Keep output deterministic for quick local sanity checks.

use weatherdata_core::{QueryOutcome, SqlValue, SqliteWeatherRepository, WeatherRepository};

const DEFAULT_DB_PATH: &str = "weather_data.sqlite3";

fn main() {
    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

    println!("weatherdata_core version={}", weatherdata_core::core_version());

    let repo = SqliteWeatherRepository::new(db_path.as_str());
    println!("db={} connected={}", db_path, repo.connection_status());
    println!("table_ready={}", repo.create_weather_table().is_success());

    match repo.current_weather() {
        QueryOutcome::Success(rows) => match rows.first() {
            Some(row) => {
                for (column, value) in row.iter() {
                    println!("{column}={}", render_value(value));
                }
            }
            None => println!("current_weather=none"),
        },
        QueryOutcome::Failure => println!("current_weather=error"),
    }
}

fn render_value(value: &SqlValue) -> String {
    match value {
        SqlValue::Null => "null".to_string(),
        SqlValue::Integer(n) => n.to_string(),
        SqlValue::Real(r) => r.to_string(),
        SqlValue::Text(text) => text.clone(),
        SqlValue::Blob(bytes) => format!("<{} bytes>", bytes.len()),
    }
}

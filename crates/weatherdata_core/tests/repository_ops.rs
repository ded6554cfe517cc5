use tempfile::TempDir;
use weatherdata_core::db::schema;
use weatherdata_core::{
    QueryOutcome, SqlValue, SqliteWeatherRepository, WeatherReading, WeatherRepository,
};

#[test]
fn construction_never_fails_and_records_status() {
    let dir = TempDir::new().unwrap();

    let reachable = SqliteWeatherRepository::new(dir.path().join("weather_data.sqlite3"));
    assert!(reachable.connection_status());
    assert!(reachable.create_connection());

    // SQLite cannot create a file inside a directory that does not exist.
    let unreachable =
        SqliteWeatherRepository::new(dir.path().join("missing").join("weather_data.sqlite3"));
    assert!(!unreachable.connection_status());
    assert!(!unreachable.create_connection());
}

#[test]
fn insert_and_current_weather_round_trip() {
    let dir = TempDir::new().unwrap();
    let repo = repo_with_table(&dir);

    let reading = zeroed_reading("2024-01-01T00:00:00");
    assert!(repo.insert_reading(&reading).is_success());

    let rows = repo.current_weather().into_rows().unwrap();
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row.len(), schema::COLUMNS.len());
    assert_eq!(row.columns().collect::<Vec<_>>(), schema::COLUMNS);
    assert_eq!(row.get("id"), Some(&SqlValue::Integer(1)));
    assert_eq!(
        row.get("timestamp"),
        Some(&SqlValue::Text("2024-01-01T00:00:00".to_string()))
    );
    for column in &schema::COLUMNS[2..] {
        assert_eq!(
            row.get(column),
            Some(&SqlValue::Real(0.0)),
            "column {column} should round-trip",
        );
    }
}

#[test]
fn current_weather_on_empty_table_is_successful_and_empty() {
    let dir = TempDir::new().unwrap();
    let repo = repo_with_table(&dir);

    let outcome = repo.current_weather();
    assert!(outcome.is_success());
    assert_eq!(outcome.rows().unwrap().len(), 0);
}

#[test]
fn current_weather_returns_latest_inserted_row() {
    let dir = TempDir::new().unwrap();
    let repo = repo_with_table(&dir);

    assert!(repo.insert_reading(&zeroed_reading("2024-01-01T00:00:00")).is_success());
    assert!(repo.insert_reading(&zeroed_reading("2024-01-01T00:05:00")).is_success());

    let rows = repo.current_weather().into_rows().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("id"), Some(&SqlValue::Integer(2)));
    assert_eq!(
        rows[0].get("timestamp"),
        Some(&SqlValue::Text("2024-01-01T00:05:00".to_string()))
    );
}

#[test]
fn duplicate_timestamp_insert_fails_without_side_effects() {
    let dir = TempDir::new().unwrap();
    let repo = repo_with_table(&dir);

    assert!(repo.insert_reading(&zeroed_reading("2024-01-01T00:00:00")).is_success());

    let duplicate = repo.insert_reading(&zeroed_reading("2024-01-01T00:00:00"));
    assert_eq!(duplicate, QueryOutcome::Failure);

    assert_eq!(repo.all_readings().into_rows().unwrap().len(), 1);
}

#[test]
fn all_readings_returns_rows_in_insertion_order() {
    let dir = TempDir::new().unwrap();
    let repo = repo_with_table(&dir);

    for timestamp in [
        "2024-01-01T00:00:00",
        "2024-01-01T00:05:00",
        "2024-01-01T00:10:00",
    ] {
        assert!(repo.insert_reading(&zeroed_reading(timestamp)).is_success());
    }

    let rows = repo.all_readings().into_rows().unwrap();
    assert_eq!(rows.len(), 3);
    for (index, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), schema::COLUMNS.len());
        assert_eq!(row[0], SqlValue::Integer(index as i64 + 1));
    }
    assert_eq!(rows[1][1], SqlValue::Text("2024-01-01T00:05:00".to_string()));
}

#[test]
fn batch_insert_commits_all_rows() {
    let dir = TempDir::new().unwrap();
    let repo = repo_with_table(&dir);

    let batch = [
        zeroed_reading("2024-01-01T00:00:00"),
        zeroed_reading("2024-01-01T00:05:00"),
        zeroed_reading("2024-01-01T00:10:00"),
    ];
    assert!(repo.insert_readings(&batch).is_success());

    assert_eq!(repo.all_readings().into_rows().unwrap().len(), 3);
}

#[test]
fn failed_batch_insert_commits_nothing() {
    let dir = TempDir::new().unwrap();
    let repo = repo_with_table(&dir);

    assert!(repo.insert_reading(&zeroed_reading("2024-01-01T00:05:00")).is_success());

    // Third entry collides with the pre-existing timestamp, so the whole
    // batch must roll back.
    let batch = [
        zeroed_reading("2024-01-01T00:10:00"),
        zeroed_reading("2024-01-01T00:15:00"),
        zeroed_reading("2024-01-01T00:05:00"),
    ];
    assert_eq!(repo.insert_readings(&batch), QueryOutcome::Failure);

    let rows = repo.all_readings().into_rows().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][1], SqlValue::Text("2024-01-01T00:05:00".to_string()));
}

#[test]
fn invalid_reading_is_rejected_before_touching_storage() {
    let dir = TempDir::new().unwrap();
    let repo = repo_with_table(&dir);

    let invalid = zeroed_reading("   ");
    assert_eq!(repo.insert_reading(&invalid), QueryOutcome::Failure);
    assert_eq!(repo.all_readings().into_rows().unwrap().len(), 0);
}

#[test]
fn execute_query_binds_a_single_parameter_set() {
    let dir = TempDir::new().unwrap();
    let repo = repo_with_table(&dir);

    let mut reading = zeroed_reading("2024-01-01T00:00:00");
    reading.rain = Some(2.5);
    assert!(repo.insert_reading(&reading).is_success());
    assert!(repo.insert_reading(&zeroed_reading("2024-01-01T00:05:00")).is_success());

    let rows = repo
        .execute_query(
            "SELECT rain FROM weather WHERE timestamp = ?1;",
            &[vec![SqlValue::Text("2024-01-01T00:00:00".to_string())]],
        )
        .into_rows()
        .unwrap();

    assert_eq!(rows, vec![vec![SqlValue::Real(2.5)]]);
}

#[test]
fn execute_query_labeled_exposes_statement_column_names() {
    let dir = TempDir::new().unwrap();
    let repo = repo_with_table(&dir);

    assert!(repo.insert_reading(&zeroed_reading("2024-01-01T00:00:00")).is_success());

    let rows = repo
        .execute_query_labeled("SELECT timestamp, rain FROM weather;", &[])
        .into_rows()
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].columns().collect::<Vec<_>>(), ["timestamp", "rain"]);
    assert_eq!(rows[0].len(), 2);
}

#[test]
fn malformed_sql_yields_failure_not_panic() {
    let dir = TempDir::new().unwrap();
    let repo = repo_with_table(&dir);

    let outcome = repo.execute_query("SELECT FROM nowhere;", &[]);
    assert_eq!(outcome, QueryOutcome::Failure);
    assert_eq!(outcome.rows(), None);
}

#[test]
fn insert_against_missing_table_surfaces_failure() {
    let dir = TempDir::new().unwrap();
    let repo = SqliteWeatherRepository::new(dir.path().join("weather_data.sqlite3"));

    let outcome = repo.insert_reading(&zeroed_reading("2024-01-01T00:00:00"));
    assert_eq!(outcome, QueryOutcome::Failure);
}

fn repo_with_table(dir: &TempDir) -> SqliteWeatherRepository {
    let repo = SqliteWeatherRepository::new(dir.path().join("weather_data.sqlite3"));
    assert!(repo.connection_status());
    assert!(repo.create_weather_table().is_success());
    repo
}

fn zeroed_reading(timestamp: &str) -> WeatherReading {
    WeatherReading {
        outdoor_temperature: Some(0.0),
        outdoor_humidity: Some(0.0),
        dew_point: Some(0.0),
        heat_index: Some(0.0),
        wind_chill: Some(0.0),
        barometric_pressure: Some(0.0),
        rain: Some(0.0),
        wind_speed: Some(0.0),
        wind_average: Some(0.0),
        peak_wind: Some(0.0),
        wind_direction: Some(0.0),
        indoor_temperature: Some(0.0),
        indoor_humidity: Some(0.0),
        timestamp_date_only: Some(0.0),
        ..WeatherReading::new(timestamp)
    }
}

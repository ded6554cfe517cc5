use weatherdata_core::{ReadingValidationError, WeatherReading};

#[test]
fn new_reading_has_no_measurements() {
    let reading = WeatherReading::new("2024-01-01T00:00:00");

    assert_eq!(reading.timestamp, "2024-01-01T00:00:00");
    assert_eq!(reading.outdoor_temperature, None);
    assert_eq!(reading.outdoor_humidity, None);
    assert_eq!(reading.dew_point, None);
    assert_eq!(reading.heat_index, None);
    assert_eq!(reading.wind_chill, None);
    assert_eq!(reading.barometric_pressure, None);
    assert_eq!(reading.rain, None);
    assert_eq!(reading.wind_speed, None);
    assert_eq!(reading.wind_average, None);
    assert_eq!(reading.peak_wind, None);
    assert_eq!(reading.wind_direction, None);
    assert_eq!(reading.indoor_temperature, None);
    assert_eq!(reading.indoor_humidity, None);
    assert_eq!(reading.timestamp_date_only, None);
}

#[test]
fn validate_rejects_blank_timestamp() {
    let empty = WeatherReading::new("");
    assert_eq!(
        empty.validate().unwrap_err(),
        ReadingValidationError::EmptyTimestamp
    );

    let whitespace = WeatherReading::new("   ");
    assert_eq!(
        whitespace.validate().unwrap_err(),
        ReadingValidationError::EmptyTimestamp
    );

    let valid = WeatherReading::new("2024-01-01T00:00:00");
    assert!(valid.validate().is_ok());
}

#[test]
fn serialization_uses_persisted_column_names() {
    let mut reading = WeatherReading::new("2024-01-01T00:00:00");
    reading.outdoor_temperature = Some(21.5);
    reading.wind_speed = Some(3.2);
    reading.timestamp_date_only = Some(20240101.0);

    let json = serde_json::to_value(&reading).unwrap();
    assert_eq!(json["timestamp"], "2024-01-01T00:00:00");
    assert_eq!(json["outdoortemperature"], 21.5);
    assert_eq!(json["windspeed"], 3.2);
    assert_eq!(json["timestampdateonly"], 20240101.0);
    assert_eq!(json["dewpoint"], serde_json::Value::Null);

    let decoded: WeatherReading = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, reading);
}

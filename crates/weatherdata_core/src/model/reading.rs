//! Weather reading domain model.
//!
//! # Responsibility
//! - Define the canonical record for one periodic station observation.
//! - Guard the natural-key invariant before persistence.
//!
//! # Invariants
//! - `timestamp` is the unique natural key and must be non-empty.
//! - Every measurement may be absent; a sensor that reported nothing for a
//!   field stores NULL, never a sentinel value.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One timestamped row of weather measurements.
///
/// Field renames match the persisted column names exactly; the serialized
/// form of this record is part of the contract with downstream API
/// consumers reading the same database file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Unique observation timestamp, e.g. `2024-01-01T00:00:00`.
    pub timestamp: String,
    #[serde(rename = "outdoortemperature")]
    pub outdoor_temperature: Option<f64>,
    #[serde(rename = "outdoorhumidity")]
    pub outdoor_humidity: Option<f64>,
    #[serde(rename = "dewpoint")]
    pub dew_point: Option<f64>,
    #[serde(rename = "heatindex")]
    pub heat_index: Option<f64>,
    #[serde(rename = "windchill")]
    pub wind_chill: Option<f64>,
    #[serde(rename = "barometricpressure")]
    pub barometric_pressure: Option<f64>,
    pub rain: Option<f64>,
    #[serde(rename = "windspeed")]
    pub wind_speed: Option<f64>,
    #[serde(rename = "windaverage")]
    pub wind_average: Option<f64>,
    #[serde(rename = "peakwind")]
    pub peak_wind: Option<f64>,
    #[serde(rename = "winddirection")]
    pub wind_direction: Option<f64>,
    #[serde(rename = "indoortemperature")]
    pub indoor_temperature: Option<f64>,
    #[serde(rename = "indoorhumidity")]
    pub indoor_humidity: Option<f64>,
    /// Date-only variant of `timestamp`, stored as a REAL like the
    /// measurement columns.
    #[serde(rename = "timestampdateonly")]
    pub timestamp_date_only: Option<f64>,
}

impl WeatherReading {
    /// Creates a reading with the given timestamp and no measurements.
    ///
    /// # Invariants
    /// - All measurement fields start as `None`.
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            outdoor_temperature: None,
            outdoor_humidity: None,
            dew_point: None,
            heat_index: None,
            wind_chill: None,
            barometric_pressure: None,
            rain: None,
            wind_speed: None,
            wind_average: None,
            peak_wind: None,
            wind_direction: None,
            indoor_temperature: None,
            indoor_humidity: None,
            timestamp_date_only: None,
        }
    }

    /// Checks the natural-key invariant.
    ///
    /// # Errors
    /// - Returns `EmptyTimestamp` when `timestamp` is empty or whitespace.
    pub fn validate(&self) -> Result<(), ReadingValidationError> {
        if self.timestamp.trim().is_empty() {
            return Err(ReadingValidationError::EmptyTimestamp);
        }
        Ok(())
    }
}

/// Validation failure for a reading about to be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingValidationError {
    EmptyTimestamp,
}

impl Display for ReadingValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTimestamp => write!(f, "reading timestamp must not be empty"),
        }
    }
}

impl Error for ReadingValidationError {}

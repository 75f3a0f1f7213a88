// Measurement domain models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The `currentMeasurements` object of a sensor reading. Every field is
/// optional; sensors report whatever subset they have and the values are
/// passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentMeasurements {
    #[serde(default)]
    pub air_quality_index: Option<f64>,
    #[serde(default)]
    pub pm1: Option<f64>,
    #[serde(default)]
    pub pm25: Option<f64>,
    #[serde(default)]
    pub pm10: Option<f64>,
    #[serde(default)]
    pub pressure: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub pollution_level: Option<i32>,
}

/// An accepted reading together with the moment it was accepted. Held as a
/// whole so the measurements and the timestamp can only be set or cleared
/// together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementSnapshot {
    pub measurements: CurrentMeasurements,
    pub last_update_date: DateTime<Utc>,
}

impl MeasurementSnapshot {
    /// Accept a reading, stamping it with the current time.
    pub fn accept(measurements: CurrentMeasurements) -> Self {
        Self {
            measurements,
            last_update_date: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurements_deserialize_partial_payload() {
        let json = r#"{
            "airQualityIndex": 31.0,
            "pm25": 10.0,
            "pm10": 14.5,
            "pollutionLevel": 2
        }"#;
        let measurements: CurrentMeasurements = serde_json::from_str(json).unwrap();
        assert_eq!(measurements.air_quality_index, Some(31.0));
        assert_eq!(measurements.pm25, Some(10.0));
        assert_eq!(measurements.pollution_level, Some(2));
        assert!(measurements.temperature.is_none());
        assert!(measurements.pm1.is_none());
    }

    #[test]
    fn test_snapshot_accept_stamps_current_time() {
        let before = Utc::now();
        let snapshot = MeasurementSnapshot::accept(CurrentMeasurements {
            pm25: Some(10.0),
            ..Default::default()
        });
        assert!(snapshot.last_update_date >= before);
        assert!(snapshot.last_update_date <= Utc::now());
    }

    #[test]
    fn test_snapshot_serializes_camel_case_timestamp_field() {
        let snapshot = MeasurementSnapshot::accept(CurrentMeasurements::default());
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains(r#""lastUpdateDate""#));
        assert!(json.contains(r#""measurements""#));
    }
}

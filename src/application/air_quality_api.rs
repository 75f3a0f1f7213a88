// Client trait for the air quality API
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::coordinates::Coordinates;
use crate::domain::measurement::CurrentMeasurements;
use crate::domain::station::{SensorId, Station};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("air quality api returned status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("air quality api request failed")]
    Transport(#[source] reqwest::Error),

    #[error("air quality api returned a malformed payload")]
    Decode(#[source] reqwest::Error),
}

#[async_trait]
pub trait AirQualityApi: Send + Sync {
    /// Resolve the sensor closest to the given position.
    async fn nearest_station(&self, position: Coordinates) -> Result<Station, ApiError>;

    /// Fetch the current reading of a sensor.
    async fn current_measurements(
        &self,
        sensor_id: SensorId,
    ) -> Result<CurrentMeasurements, ApiError>;
}

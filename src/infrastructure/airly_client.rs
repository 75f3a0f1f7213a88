// Airly HTTP client implementation
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::application::air_quality_api::{AirQualityApi, ApiError};
use crate::domain::coordinates::Coordinates;
use crate::domain::measurement::CurrentMeasurements;
use crate::domain::station::{SensorId, Station};

#[derive(Debug, Clone)]
pub struct AirlyClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

/// Envelope around a sensor reading.
#[derive(Debug, Deserialize)]
struct SensorMeasurementsResponse {
    #[serde(rename = "currentMeasurements")]
    current_measurements: CurrentMeasurements,
}

impl AirlyClient {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            // Outgoing calls carry no timeout; a hung request stalls only
            // its own refresh cycle.
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn request_url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        for (i, (key, value)) in query.iter().enumerate() {
            let separator = if i == 0 { '?' } else { '&' };
            url.push(separator);
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.request_url(path, query);
        tracing::debug!("requesting {}", url);

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(ApiError::Decode)
    }
}

#[async_trait]
impl AirQualityApi for AirlyClient {
    async fn nearest_station(&self, position: Coordinates) -> Result<Station, ApiError> {
        self.get_json(
            "/v1/nearestSensor/measurements",
            &[
                ("latitude", position.latitude.to_string()),
                ("longitude", position.longitude.to_string()),
            ],
        )
        .await
    }

    async fn current_measurements(
        &self,
        sensor_id: SensorId,
    ) -> Result<CurrentMeasurements, ApiError> {
        let response: SensorMeasurementsResponse = self
            .get_json(
                "/v1/sensor/measurements",
                &[("sensorId", sensor_id.to_string())],
            )
            .await?;
        Ok(response.current_measurements)
    }
}

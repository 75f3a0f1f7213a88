// IP-based geolocation - the headless stand-in for a device location service
use async_trait::async_trait;
use serde::Deserialize;

use crate::application::location_provider::{LocationError, LocationProvider};
use crate::domain::coordinates::Coordinates;

#[derive(Debug, Clone)]
pub struct IpGeolocator {
    http: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct GeoIpResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

impl IpGeolocator {
    pub fn new(endpoint: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }
}

fn position_from_response(response: GeoIpResponse) -> Result<Coordinates, LocationError> {
    if response.status != "success" {
        return Err(LocationError::Unavailable {
            reason: response
                .message
                .unwrap_or_else(|| format!("service answered with status {}", response.status)),
        });
    }
    match (response.lat, response.lon) {
        (Some(latitude), Some(longitude)) => Ok(Coordinates::new(latitude, longitude)),
        _ => Err(LocationError::Unavailable {
            reason: "service answered without coordinates".to_string(),
        }),
    }
}

#[async_trait]
impl LocationProvider for IpGeolocator {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        tracing::debug!("resolving device position via {}", self.endpoint);

        let response = self
            .http
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(LocationError::Transport)?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(LocationError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let payload = response
            .json::<GeoIpResponse>()
            .await
            .map_err(LocationError::Decode)?;
        position_from_response(payload)
    }
}

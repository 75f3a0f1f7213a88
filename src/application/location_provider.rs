// Geolocation seam - one-shot position read
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::coordinates::Coordinates;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("location service request failed")]
    Transport(#[source] reqwest::Error),

    #[error("location service returned status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("location service returned a malformed payload")]
    Decode(#[source] reqwest::Error),

    #[error("device position could not be determined: {reason}")]
    Unavailable { reason: String },
}

#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Read the device position. Called exactly once per session.
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

// Host bridge over stdout - one JSON message per line
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::application::host_bridge::HostBridge;
use crate::domain::measurement::MeasurementSnapshot;
use crate::presentation::messages::HostMessage;

pub struct StdioBridge {
    out: Mutex<tokio::io::Stdout>,
}

impl StdioBridge {
    pub fn new() -> Self {
        Self {
            out: Mutex::new(tokio::io::stdout()),
        }
    }

    /// Notifications are fire-and-forget: delivery failures are logged and
    /// dropped.
    async fn emit(&self, message: &HostMessage) {
        let line = match serde_json::to_string(message) {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!("host message serialization failed: {err}");
                return;
            }
        };

        let mut out = self.out.lock().await;
        let written = async {
            out.write_all(line.as_bytes()).await?;
            out.write_all(b"\n").await?;
            out.flush().await
        }
        .await;
        if let Err(err) = written {
            tracing::warn!("host message delivery failed: {err}");
        }
    }
}

impl Default for StdioBridge {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostBridge for StdioBridge {
    async fn notify_data_update(&self, snapshot: &MeasurementSnapshot) {
        self.emit(&HostMessage::DataUpdate {
            payload: snapshot.clone(),
        })
        .await;
    }

    async fn request_close(&self) {
        self.emit(&HostMessage::CloseWindow).await;
    }
}

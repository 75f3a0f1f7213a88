// Notification seam to the hosting shell process
use async_trait::async_trait;

use crate::domain::measurement::MeasurementSnapshot;

/// One-way channel to the host shell. Both operations are fire-and-forget:
/// implementations swallow and log their own delivery failures.
#[async_trait]
pub trait HostBridge: Send + Sync {
    /// Push the latest accepted snapshot to the host.
    async fn notify_data_update(&self, snapshot: &MeasurementSnapshot);

    /// Ask the host to close the tray window.
    async fn request_close(&self);
}

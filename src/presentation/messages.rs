// Outbound wire messages to the hosting shell
use serde::{Deserialize, Serialize};

use crate::domain::measurement::MeasurementSnapshot;

/// One JSON object per line on stdout, tagged by `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostMessage {
    /// A refresh succeeded; carries the accepted snapshot.
    #[serde(rename = "airq-data-update")]
    DataUpdate { payload: MeasurementSnapshot },

    /// The user asked to quit; the host owns the actual teardown.
    #[serde(rename = "close-window")]
    CloseWindow,
}

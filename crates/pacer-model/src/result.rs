use serde::{Deserialize, Serialize};

use crate::Backlog;

/// Parameters derived for one backlog measurement.
///
/// Produced fresh by every controller call and never shared between calls.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerResult {
    /// Backlog the parameters were derived from, echoed for logging.
    pub backlog: Backlog,
    /// Delay between backlog measurements, rounded to 2 decimals.
    pub monitoring_interval: f64,
    /// Retry budget per failed work item.
    pub max_retries: u32,
    /// Work items to pull per cycle.
    pub batch_size: u32,
}

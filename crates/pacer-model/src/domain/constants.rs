//! Default controller bounds.
//!
//! These are the values the worker was originally tuned with and are used
//! whenever a configuration omits a field.

/// Lower bound of the monitoring interval.
pub const DEFAULT_MIN_INTERVAL: f64 = 1.0;
/// Upper bound of the monitoring interval (idle polling).
pub const DEFAULT_MAX_INTERVAL: f64 = 8.0;

/// Retry budget under heavy backlog.
pub const DEFAULT_MIN_RETRIES: u32 = 1;
/// Retry budget when the queue is empty.
pub const DEFAULT_MAX_RETRIES: u32 = 10;

/// Batch size when the queue is empty.
pub const DEFAULT_MIN_BATCH: u32 = 10;
/// Batch size under heavy backlog.
pub const DEFAULT_MAX_BATCH: u32 = 60;

/// Shared curve steepness.
pub const DEFAULT_SCALE_FACTOR: f64 = 1000.0;

/// Reference backlog sweep used to print a tuning table.
pub const SAMPLE_BACKLOGS: [u64; 9] = [10, 50, 100, 200, 500, 1000, 2000, 5000, 100_000];

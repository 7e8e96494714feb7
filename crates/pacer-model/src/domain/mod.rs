mod backlog;
pub use backlog::Backlog;

mod constants;
pub use constants::{
    DEFAULT_MAX_BATCH, DEFAULT_MAX_INTERVAL, DEFAULT_MAX_RETRIES, DEFAULT_MIN_BATCH,
    DEFAULT_MIN_INTERVAL, DEFAULT_MIN_RETRIES, DEFAULT_SCALE_FACTOR, SAMPLE_BACKLOGS,
};

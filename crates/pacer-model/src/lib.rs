mod domain;
pub use domain::{
    Backlog, DEFAULT_MAX_BATCH, DEFAULT_MAX_INTERVAL, DEFAULT_MAX_RETRIES, DEFAULT_MIN_BATCH,
    DEFAULT_MIN_INTERVAL, DEFAULT_MIN_RETRIES, DEFAULT_SCALE_FACTOR, SAMPLE_BACKLOGS,
};

mod error;
pub use error::{ControllerError, ModelResult};

mod bounds;
pub use bounds::{BoundsConfig, ControllerBounds, CurveScales, ScaleFactor};

mod result;
pub use result::ControllerResult;

mod strategy;
pub use strategy::RoundingPolicy;

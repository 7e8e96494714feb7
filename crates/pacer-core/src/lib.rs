//! Backlog-driven parameter controller.
//!
//! Derives a worker's monitoring interval, retry budget and batch size from
//! the number of pending work items. Every function here is pure: no I/O, no
//! locks, no state retained between calls.
pub mod controller;
pub mod curve;
pub mod map;

pub use controller::{ParameterController, compute, compute_with};

pub mod prelude {
    pub use crate::controller::{ParameterController, compute};
    pub use crate::map::{ScheduleParams, to_schedule};
    pub use pacer_model::{
        Backlog, BoundsConfig, ControllerBounds, ControllerError, ControllerResult,
        RoundingPolicy, ScaleFactor,
    };
}

//! Conversions from a [`pacer_model::ControllerResult`] into the values a
//! work scheduler plugs into its polling loop.
mod schedule;

pub use schedule::{ScheduleParams, to_fetch_limit, to_poll_delay, to_retry_budget, to_schedule};

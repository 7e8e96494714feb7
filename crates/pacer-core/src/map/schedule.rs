use std::time::Duration;

use pacer_model::ControllerResult;

/// Scheduler-facing view of one controller decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleParams {
    /// Wait before the next backlog measurement.
    pub poll_delay: Duration,
    /// Work items to fetch this cycle.
    pub fetch_limit: usize,
    /// Retry attempts allowed per failed item.
    pub retry_budget: u32,
}

/// Monitoring interval expressed in `unit`s, as a [`Duration`].
///
/// Saturates at [`Duration::MAX`] instead of panicking on overflow.
pub fn to_poll_delay(r: &ControllerResult, unit: Duration) -> Duration {
    Duration::try_from_secs_f64(unit.as_secs_f64() * r.monitoring_interval)
        .unwrap_or(Duration::MAX)
}

pub fn to_fetch_limit(r: &ControllerResult) -> usize {
    usize::try_from(r.batch_size).unwrap_or(usize::MAX)
}

pub fn to_retry_budget(r: &ControllerResult) -> u32 {
    r.max_retries
}

pub fn to_schedule(r: &ControllerResult, unit: Duration) -> ScheduleParams {
    ScheduleParams {
        poll_delay: to_poll_delay(r, unit),
        fetch_limit: to_fetch_limit(r),
        retry_budget: to_retry_budget(r),
    }
}

use super::saturation;

/// Retry budget curve.
///
/// `max - (max - min) * backlog / (backlog + scale)`
///
/// Equals `max` for an empty queue and decays toward `min` as backlog grows,
/// never reaching it for a finite backlog. Under load the worker gives up on
/// failed items sooner so it can keep draining the queue.
pub fn retry_curve(backlog: f64, min: f64, max: f64, scale: f64) -> f64 {
    debug_assert!(backlog >= 0.0 && scale > 0.0 && min <= max);
    max - (max - min) * saturation(backlog, scale)
}

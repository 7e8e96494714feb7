/// Monitoring interval curve.
///
/// `max(min, max / (1 + sqrt(backlog / scale)))`
///
/// Poll rarely when idle and more often under load. The square-root term is
/// unbounded, so the result is floored at `min`.
pub fn interval_curve(backlog: f64, min: f64, max: f64, scale: f64) -> f64 {
    debug_assert!(backlog >= 0.0 && scale > 0.0 && min <= max);
    let shaped = max / (1.0 + (backlog / scale).sqrt());
    shaped.max(min)
}

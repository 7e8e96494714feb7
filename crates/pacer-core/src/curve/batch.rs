use super::saturation;

/// Batch size curve.
///
/// `min + (max - min) * backlog² / (backlog² + scale)`
///
/// The squared term keeps batches small for a handful of pending items and
/// saturates toward `max` quickly once the backlog is moderate.
pub fn batch_curve(backlog: f64, min: f64, max: f64, scale: f64) -> f64 {
    debug_assert!(backlog >= 0.0 && scale > 0.0 && min <= max);
    // backlog² overflows to +inf near f64::MAX; saturation maps that to 1.
    min + (max - min) * saturation(backlog * backlog, scale)
}

#[cfg(test)]
mod tests {
    use super::batch_curve;

    #[test]
    fn starts_at_min() {
        assert_eq!(batch_curve(0.0, 10.0, 60.0, 1000.0), 10.0);
    }

    #[test]
    fn small_backlog_gets_small_batches() {
        let v = batch_curve(10.0, 10.0, 60.0, 1000.0);
        assert!((v - 14.545_454).abs() < 1e-5, "{v}");
    }

    #[test]
    fn huge_backlog_does_not_produce_nan() {
        let v = batch_curve(f64::MAX, 10.0, 60.0, 1000.0);
        assert_eq!(v, 60.0);
    }
}

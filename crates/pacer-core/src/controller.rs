use tracing::debug;

use pacer_model::{
    Backlog, BoundsConfig, ControllerBounds, ControllerResult, ModelResult, RoundingPolicy,
};

use crate::curve::{batch_curve, interval_curve, retry_curve};

/// Decimal places kept on the monitoring interval.
const INTERVAL_DECIMALS: i32 = 2;

/// Derive parameters for `backlog` using half-to-even rounding.
///
/// Fails with [`pacer_model::ControllerError::InvalidInput`] if `backlog` is
/// negative or not finite. Bounds are validated when they are constructed, so
/// no curve is ever evaluated on an invalid configuration.
///
/// # Examples
/// ```
/// use pacer_core::compute;
/// use pacer_model::ControllerBounds;
///
/// let bounds = ControllerBounds::default();
/// let r = compute(1000.0, &bounds).unwrap();
/// assert_eq!(r.monitoring_interval, 4.0);
/// assert_eq!(r.max_retries, 6);
/// assert_eq!(r.batch_size, 60);
///
/// assert!(compute(-5.0, &bounds).is_err());
/// ```
pub fn compute(backlog: f64, bounds: &ControllerBounds) -> ModelResult<ControllerResult> {
    let backlog = Backlog::new(backlog)?;
    Ok(compute_with(backlog, bounds, RoundingPolicy::default()))
}

/// Derive parameters for an already validated backlog with an explicit rounding rule.
///
/// Curves are evaluated at full precision; rounding and clamping happen once, here.
pub fn compute_with(
    backlog: Backlog,
    bounds: &ControllerBounds,
    rounding: RoundingPolicy,
) -> ControllerResult {
    let b = backlog.value();
    let scale = bounds.scale();

    let retries = retry_curve(
        b,
        f64::from(bounds.min_retries()),
        f64::from(bounds.max_retries()),
        scale.retry(),
    );
    let batch = batch_curve(
        b,
        f64::from(bounds.min_batch()),
        f64::from(bounds.max_batch()),
        scale.batch(),
    );
    let interval = interval_curve(
        b,
        bounds.min_interval(),
        bounds.max_interval(),
        scale.interval(),
    );

    ControllerResult {
        backlog,
        monitoring_interval: quantize_interval(interval, bounds, rounding),
        max_retries: quantize_count(
            retries,
            bounds.min_retries(),
            bounds.max_retries(),
            rounding,
        ),
        batch_size: quantize_count(batch, bounds.min_batch(), bounds.max_batch(), rounding),
    }
}

/// Round to an integer and pull the result back into `[min, max]`.
fn quantize_count(raw: f64, min: u32, max: u32, rounding: RoundingPolicy) -> u32 {
    let rounded = rounding
        .round(raw)
        .clamp(f64::from(min), f64::from(max));
    // In range of u32 after the clamp.
    rounded as u32
}

/// Round to [`INTERVAL_DECIMALS`] and pull the result back into the interval bounds.
///
/// Bounds win over quantization: a floor of `1.234` stays `1.234`.
fn quantize_interval(raw: f64, bounds: &ControllerBounds, rounding: RoundingPolicy) -> f64 {
    rounding
        .round_to(raw, INTERVAL_DECIMALS)
        .clamp(bounds.min_interval(), bounds.max_interval())
}

/// Parameter controller bound to one configuration.
///
/// Built once at startup and shared freely: it holds no mutable state, so
/// concurrent callers need no coordination.
#[derive(Clone, Debug, Default)]
pub struct ParameterController {
    bounds: ControllerBounds,
    rounding: RoundingPolicy,
}

impl ParameterController {
    /// Create a controller with half-to-even rounding.
    pub fn new(bounds: ControllerBounds) -> Self {
        debug!(
            retries = ?(bounds.min_retries(), bounds.max_retries()),
            batch = ?(bounds.min_batch(), bounds.max_batch()),
            interval = ?(bounds.min_interval(), bounds.max_interval()),
            scale = ?bounds.scale(),
            "parameter controller configured"
        );
        Self {
            bounds,
            rounding: RoundingPolicy::default(),
        }
    }

    /// Validate `cfg` and build a controller from it.
    pub fn from_config(cfg: &BoundsConfig) -> ModelResult<Self> {
        Ok(Self::new(cfg.validate()?))
    }

    /// Replace the tie-breaking rule.
    pub fn with_rounding(mut self, rounding: RoundingPolicy) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn bounds(&self) -> &ControllerBounds {
        &self.bounds
    }

    pub fn rounding(&self) -> RoundingPolicy {
        self.rounding
    }

    /// Derive parameters for a raw backlog value.
    pub fn compute(&self, backlog: f64) -> ModelResult<ControllerResult> {
        Ok(self.compute_backlog(Backlog::new(backlog)?))
    }

    /// Derive parameters for a validated backlog. Infallible.
    pub fn compute_backlog(&self, backlog: Backlog) -> ControllerResult {
        compute_with(backlog, &self.bounds, self.rounding)
    }

    /// Derive parameters for an item count. Infallible.
    pub fn compute_count(&self, pending: u64) -> ControllerResult {
        self.compute_backlog(Backlog::from(pending))
    }

    /// Derive parameters for a sweep of backlogs, stopping at the first invalid one.
    pub fn compute_many<I>(&self, backlogs: I) -> ModelResult<Vec<ControllerResult>>
    where
        I: IntoIterator<Item = f64>,
    {
        backlogs.into_iter().map(|b| self.compute(b)).collect()
    }

    /// Parameters for an empty queue: longest interval, smallest batch, full retry budget.
    ///
    /// This is the conservative default a scheduler falls back to before its
    /// first good measurement.
    pub fn idle(&self) -> ControllerResult {
        self.compute_backlog(Backlog::ZERO)
    }

    /// Derive parameters, or return `fallback` if the measurement is rejected.
    ///
    /// Rejected measurements are recoverable: the scheduler keeps its last
    /// known-good parameters for this cycle.
    pub fn compute_or(&self, backlog: f64, fallback: ControllerResult) -> ControllerResult {
        match self.compute(backlog) {
            Ok(r) => r,
            Err(e) => {
                debug!(backlog, error = %e, "backlog rejected, keeping previous parameters");
                fallback
            }
        }
    }
}

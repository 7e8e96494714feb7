//! Smoothing curves mapping a backlog to a raw (unrounded) parameter value.
//!
//! All three are total over `backlog >= 0` and `scale > 0`, monotonic in
//! backlog, and stay inside `[min, max]`. Inputs are not validated here:
//! callers go through [`crate::controller`], which only accepts a validated
//! [`pacer_model::Backlog`] and [`pacer_model::ControllerBounds`].
mod batch;
mod interval;
mod retry;

pub use batch::batch_curve;
pub use interval::interval_curve;
pub use retry::retry_curve;

/// `x / (x + scale)` for `x >= 0`, staying finite when the sum overflows.
#[inline]
fn saturation(x: f64, scale: f64) -> f64 {
    let denom = x + scale;
    if denom.is_finite() {
        x / denom
    } else {
        1.0 / (1.0 + scale / x)
    }
}

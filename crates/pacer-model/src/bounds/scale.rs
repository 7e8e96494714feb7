use serde::{Deserialize, Serialize};

use crate::error::{ControllerError, ModelResult};

/// Curve steepness, either one knob for all three curves or one per curve.
///
/// A larger factor means more backlog is needed before a curve leaves its
/// idle regime. In JSON a bare number is `Shared`, an object is `PerCurve`:
///
/// ```
/// use pacer_model::ScaleFactor;
///
/// let shared: ScaleFactor = serde_json::from_str("1000").unwrap();
/// assert_eq!(shared.retry(), 1000.0);
///
/// let split: ScaleFactor =
///     serde_json::from_str(r#"{"retry": 500, "batch": 2000, "interval": 1000}"#).unwrap();
/// assert_eq!(split.batch(), 2000.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaleFactor {
    /// One factor shared by the retry, batch and interval curves.
    Shared(f64),
    /// Independent factor per curve.
    PerCurve(CurveScales),
}

/// Per-curve scale factors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveScales {
    pub retry: f64,
    pub batch: f64,
    pub interval: f64,
}

impl ScaleFactor {
    /// Factor used by the retry curve.
    #[inline]
    pub fn retry(&self) -> f64 {
        match self {
            ScaleFactor::Shared(f) => *f,
            ScaleFactor::PerCurve(c) => c.retry,
        }
    }

    /// Factor used by the batch curve.
    #[inline]
    pub fn batch(&self) -> f64 {
        match self {
            ScaleFactor::Shared(f) => *f,
            ScaleFactor::PerCurve(c) => c.batch,
        }
    }

    /// Factor used by the interval curve.
    #[inline]
    pub fn interval(&self) -> f64 {
        match self {
            ScaleFactor::Shared(f) => *f,
            ScaleFactor::PerCurve(c) => c.interval,
        }
    }

    /// Every factor must be finite and strictly positive.
    pub(crate) fn validate(&self) -> ModelResult<()> {
        match self {
            ScaleFactor::Shared(f) => check_factor("scaleFactor", *f),
            ScaleFactor::PerCurve(c) => {
                check_factor("scaleFactor.retry", c.retry)?;
                check_factor("scaleFactor.batch", c.batch)?;
                check_factor("scaleFactor.interval", c.interval)
            }
        }
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        ScaleFactor::Shared(crate::DEFAULT_SCALE_FACTOR)
    }
}

impl From<f64> for ScaleFactor {
    fn from(f: f64) -> Self {
        ScaleFactor::Shared(f)
    }
}

impl From<CurveScales> for ScaleFactor {
    fn from(c: CurveScales) -> Self {
        ScaleFactor::PerCurve(c)
    }
}

fn check_factor(name: &str, value: f64) -> ModelResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ControllerError::InvalidConfiguration(format!(
            "{name} must be a finite number > 0, got {value}"
        )))
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ControllerError, ModelResult};

/// Number of pending work items, validated to be finite and non-negative.
///
/// Counts are usually integral, but the controller accepts fractional values
/// (e.g. a moving average reported by the scheduler).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Backlog(f64);

impl Backlog {
    /// Empty queue.
    pub const ZERO: Backlog = Backlog(0.0);

    /// Validate a raw backlog value.
    ///
    /// # Examples
    /// ```
    /// use pacer_model::Backlog;
    ///
    /// assert!(Backlog::new(42.0).is_ok());
    /// assert!(Backlog::new(-5.0).is_err());
    /// assert!(Backlog::new(f64::NAN).is_err());
    /// ```
    pub fn new(value: f64) -> ModelResult<Self> {
        if !value.is_finite() {
            return Err(ControllerError::InvalidInput(format!(
                "backlog must be finite, got {value}"
            )));
        }
        if value < 0.0 {
            return Err(ControllerError::InvalidInput(format!(
                "backlog must be non-negative, got {value}"
            )));
        }
        // Normalise -0.0 so the echoed value prints as "0".
        Ok(Self(value.max(0.0)))
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Backlog {
    type Error = ControllerError;
    fn try_from(value: f64) -> ModelResult<Self> {
        Self::new(value)
    }
}

impl From<Backlog> for f64 {
    fn from(b: Backlog) -> Self {
        b.0
    }
}

impl From<u32> for Backlog {
    fn from(n: u32) -> Self {
        Self(f64::from(n))
    }
}

impl From<u64> for Backlog {
    fn from(n: u64) -> Self {
        Self(n as f64)
    }
}

impl From<usize> for Backlog {
    fn from(n: usize) -> Self {
        Self(n as f64)
    }
}

impl fmt::Display for Backlog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::Backlog;
    use crate::ControllerError;

    #[test]
    fn zero_is_valid() {
        assert_eq!(Backlog::new(0.0).unwrap(), Backlog::ZERO);
    }

    #[test]
    fn negative_zero_is_normalised() {
        let b = Backlog::new(-0.0).unwrap();
        assert!(b.value().is_sign_positive());
        assert_eq!(b.to_string(), "0");
    }

    #[test]
    fn rejects_negative_and_non_finite() {
        for bad in [-5.0, -f64::MIN_POSITIVE, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Backlog::new(bad).unwrap_err();
            assert!(
                matches!(err, ControllerError::InvalidInput(_)),
                "expected InvalidInput for {bad}, got {err:?}"
            );
        }
    }

    #[test]
    fn counts_convert_losslessly() {
        assert_eq!(Backlog::from(1000u32).value(), 1000.0);
        assert_eq!(Backlog::from(100_000u64).value(), 100_000.0);
        assert_eq!(Backlog::from(7usize).value(), 7.0);
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let ok: Backlog = serde_json::from_str("250").unwrap();
        assert_eq!(ok.value(), 250.0);
        assert!(serde_json::from_str::<Backlog>("-1").is_err());

        let json = serde_json::to_string(&Backlog::from(12u32)).unwrap();
        assert_eq!(json, "12.0");
    }
}

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::{ControllerError, ModelResult};

/// Tie-breaking rule used when derived parameters are quantized.
///
/// Only matters when a curve lands exactly between two representable outputs
/// (e.g. a raw retry budget of `8.5` or `2.5`).
///
/// Strategies:
/// - `HalfEven`: ties go to the even neighbour (`2.5 -> 2`, `5.5 -> 6`).
/// - `HalfAwayFromZero`: ties go up for positive values (`2.5 -> 3`, `5.5 -> 6`).
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RoundingPolicy {
    /// Banker's rounding. Unbiased over many ties.
    #[default]
    HalfEven,
    /// Schoolbook rounding.
    HalfAwayFromZero,
}

impl RoundingPolicy {
    /// Round to the nearest integer.
    #[inline]
    pub fn round(self, value: f64) -> f64 {
        match self {
            RoundingPolicy::HalfEven => value.round_ties_even(),
            RoundingPolicy::HalfAwayFromZero => value.round(),
        }
    }

    /// Round to `decimals` fractional digits.
    #[inline]
    pub fn round_to(self, value: f64, decimals: i32) -> f64 {
        let scale = 10f64.powi(decimals);
        self.round(value * scale) / scale
    }
}

impl FromStr for RoundingPolicy {
    type Err = ControllerError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half-even" | "halfeven" | "even" | "bankers" => Ok(RoundingPolicy::HalfEven),
            "half-away" | "half-away-from-zero" | "halfawayfromzero" | "away" => {
                Ok(RoundingPolicy::HalfAwayFromZero)
            }
            other => Err(ControllerError::InvalidConfiguration(format!(
                "unknown rounding policy: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for RoundingPolicy {
    type Error = ControllerError;
    fn try_from(s: String) -> ModelResult<Self> {
        s.parse()
    }
}

impl From<RoundingPolicy> for String {
    fn from(p: RoundingPolicy) -> Self {
        p.to_string()
    }
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoundingPolicy::HalfEven => "half-even",
            RoundingPolicy::HalfAwayFromZero => "half-away",
        })
    }
}

mod config;
pub use config::BoundsConfig;

mod scale;
pub use scale::{CurveScales, ScaleFactor};

use serde::{Deserialize, Serialize};

use crate::error::{ControllerError, ModelResult};

/// Validated, immutable controller configuration.
///
/// Holds the `[min, max]` range of every derived parameter and the curve
/// steepness. The only ways to obtain one are [`BoundsConfig::validate`],
/// [`TryFrom<BoundsConfig>`] and deserialisation (which validates too), so any
/// `ControllerBounds` value satisfies:
///
/// - `min_retries <= max_retries`
/// - `min_batch <= max_batch`
/// - `0 <= min_interval <= max_interval`, both finite
/// - every scale factor finite and `> 0`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoundsConfig", into = "BoundsConfig")]
pub struct ControllerBounds {
    min_retries: u32,
    max_retries: u32,
    min_batch: u32,
    max_batch: u32,
    min_interval: f64,
    max_interval: f64,
    scale: ScaleFactor,
}

impl ControllerBounds {
    pub fn min_retries(&self) -> u32 {
        self.min_retries
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn min_batch(&self) -> u32 {
        self.min_batch
    }

    pub fn max_batch(&self) -> u32 {
        self.max_batch
    }

    pub fn min_interval(&self) -> f64 {
        self.min_interval
    }

    pub fn max_interval(&self) -> f64 {
        self.max_interval
    }

    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    /// Copy of the bounds as a plain config, e.g. to tweak a field and re-validate.
    pub fn to_config(&self) -> BoundsConfig {
        BoundsConfig::from(self.clone())
    }
}

impl Default for ControllerBounds {
    fn default() -> Self {
        Self {
            min_retries: crate::DEFAULT_MIN_RETRIES,
            max_retries: crate::DEFAULT_MAX_RETRIES,
            min_batch: crate::DEFAULT_MIN_BATCH,
            max_batch: crate::DEFAULT_MAX_BATCH,
            min_interval: crate::DEFAULT_MIN_INTERVAL,
            max_interval: crate::DEFAULT_MAX_INTERVAL,
            scale: ScaleFactor::default(),
        }
    }
}

impl TryFrom<BoundsConfig> for ControllerBounds {
    type Error = ControllerError;
    fn try_from(cfg: BoundsConfig) -> ModelResult<Self> {
        cfg.validate()
    }
}

impl From<ControllerBounds> for BoundsConfig {
    fn from(b: ControllerBounds) -> Self {
        BoundsConfig {
            min_retries: b.min_retries,
            max_retries: b.max_retries,
            min_batch: b.min_batch,
            max_batch: b.max_batch,
            min_interval: b.min_interval,
            max_interval: b.max_interval,
            scale_factor: b.scale,
        }
    }
}

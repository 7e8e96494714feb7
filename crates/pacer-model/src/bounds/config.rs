use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_MAX_BATCH, DEFAULT_MAX_INTERVAL, DEFAULT_MAX_RETRIES, DEFAULT_MIN_BATCH,
    DEFAULT_MIN_INTERVAL, DEFAULT_MIN_RETRIES,
    bounds::{ControllerBounds, ScaleFactor},
    error::{ControllerError, ModelResult},
};

/// Unvalidated controller configuration, as read from a file or flags.
///
/// Every field is optional on input and falls back to the crate defaults.
/// Turn it into [`ControllerBounds`] with [`BoundsConfig::validate`] before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoundsConfig {
    pub min_retries: u32,
    pub max_retries: u32,
    pub min_batch: u32,
    pub max_batch: u32,
    pub min_interval: f64,
    pub max_interval: f64,
    pub scale_factor: ScaleFactor,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            min_retries: DEFAULT_MIN_RETRIES,
            max_retries: DEFAULT_MAX_RETRIES,
            min_batch: DEFAULT_MIN_BATCH,
            max_batch: DEFAULT_MAX_BATCH,
            min_interval: DEFAULT_MIN_INTERVAL,
            max_interval: DEFAULT_MAX_INTERVAL,
            scale_factor: ScaleFactor::default(),
        }
    }
}

impl BoundsConfig {
    /// Check ordering and domain constraints and freeze the result.
    ///
    /// Fails with [`ControllerError::InvalidConfiguration`] on the first violation found.
    pub fn validate(&self) -> ModelResult<ControllerBounds> {
        if self.min_retries > self.max_retries {
            return Err(invalid(format!(
                "minRetries ({}) > maxRetries ({})",
                self.min_retries, self.max_retries
            )));
        }
        if self.min_batch > self.max_batch {
            return Err(invalid(format!(
                "minBatch ({}) > maxBatch ({})",
                self.min_batch, self.max_batch
            )));
        }
        for (name, value) in [
            ("minInterval", self.min_interval),
            ("maxInterval", self.max_interval),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!(
                    "{name} must be a finite number >= 0, got {value}"
                )));
            }
        }
        if self.min_interval > self.max_interval {
            return Err(invalid(format!(
                "minInterval ({}) > maxInterval ({})",
                self.min_interval, self.max_interval
            )));
        }
        self.scale_factor.validate()?;

        Ok(ControllerBounds {
            min_retries: self.min_retries,
            max_retries: self.max_retries,
            min_batch: self.min_batch,
            max_batch: self.max_batch,
            min_interval: self.min_interval,
            max_interval: self.max_interval,
            scale: self.scale_factor,
        })
    }
}

fn invalid(msg: String) -> ControllerError {
    ControllerError::InvalidConfiguration(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CurveScales;

    #[test]
    fn defaults_are_valid() {
        let bounds = BoundsConfig::default().validate().unwrap();
        assert_eq!(bounds.min_retries(), 1);
        assert_eq!(bounds.max_retries(), 10);
        assert_eq!(bounds.min_batch(), 10);
        assert_eq!(bounds.max_batch(), 60);
        assert_eq!(bounds.min_interval(), 1.0);
        assert_eq!(bounds.max_interval(), 8.0);
        assert_eq!(bounds.scale(), ScaleFactor::Shared(1000.0));
    }

    #[test]
    fn equal_min_and_max_are_allowed() {
        let cfg = BoundsConfig {
            min_retries: 3,
            max_retries: 3,
            min_batch: 0,
            max_batch: 0,
            min_interval: 2.5,
            max_interval: 2.5,
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_retries() {
        let cfg = BoundsConfig {
            min_retries: 11,
            ..Default::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ControllerError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("minRetries"));
    }

    #[test]
    fn rejects_inverted_batch() {
        let cfg = BoundsConfig {
            min_batch: 61,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ControllerError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn rejects_bad_intervals() {
        let inverted = BoundsConfig {
            min_interval: 9.0,
            ..Default::default()
        };
        assert!(inverted.validate().is_err());

        let negative = BoundsConfig {
            min_interval: -1.0,
            ..Default::default()
        };
        assert!(negative.validate().is_err());

        let nan = BoundsConfig {
            max_interval: f64::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn rejects_zero_scale_factor() {
        let cfg = BoundsConfig {
            scale_factor: ScaleFactor::Shared(0.0),
            ..Default::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ControllerError::InvalidConfiguration(_)));
    }

    #[test]
    fn serde_uses_defaults_for_missing_fields() {
        let cfg: BoundsConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, BoundsConfig::default());
    }

    #[test]
    fn partial_deserialization() {
        let json = r#"{"maxBatch": 200, "scaleFactor": {"retry": 10, "batch": 20, "interval": 30}}"#;
        let cfg: BoundsConfig = serde_json::from_str(json).unwrap();

        assert_eq!(cfg.max_batch, 200);
        assert_eq!(cfg.min_batch, DEFAULT_MIN_BATCH);
        assert_eq!(
            cfg.scale_factor,
            ScaleFactor::PerCurve(CurveScales {
                retry: 10.0,
                batch: 20.0,
                interval: 30.0,
            })
        );
    }

    #[test]
    fn negative_counts_fail_to_parse() {
        assert!(serde_json::from_str::<BoundsConfig>(r#"{"minRetries": -1}"#).is_err());
    }
}

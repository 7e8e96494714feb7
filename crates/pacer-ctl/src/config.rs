use std::fs;

use anyhow::Context;
use pacer_model::{BoundsConfig, ControllerBounds, CurveScales, ScaleFactor};
use tracing::debug;

use crate::args::BoundsArgs;

/// Build validated bounds: defaults, then the config file, then flag overrides.
pub fn resolve_bounds(args: &BoundsArgs) -> anyhow::Result<ControllerBounds> {
    let mut cfg = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            let cfg: BoundsConfig = serde_json::from_str(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?;
            debug!(path = %path.display(), "loaded controller config");
            cfg
        }
        None => BoundsConfig::default(),
    };

    apply_overrides(&mut cfg, args);
    Ok(cfg.validate()?)
}

fn apply_overrides(cfg: &mut BoundsConfig, args: &BoundsArgs) {
    if let Some(v) = args.min_retries {
        cfg.min_retries = v;
    }
    if let Some(v) = args.max_retries {
        cfg.max_retries = v;
    }
    if let Some(v) = args.min_batch {
        cfg.min_batch = v;
    }
    if let Some(v) = args.max_batch {
        cfg.max_batch = v;
    }
    if let Some(v) = args.min_interval {
        cfg.min_interval = v;
    }
    if let Some(v) = args.max_interval {
        cfg.max_interval = v;
    }
    if let Some(v) = args.scale_factor {
        cfg.scale_factor = ScaleFactor::Shared(v);
    }

    // Any per-curve flag splits the factor; untouched curves keep their current value.
    if args.retry_scale.is_some() || args.batch_scale.is_some() || args.interval_scale.is_some() {
        let current = cfg.scale_factor;
        cfg.scale_factor = ScaleFactor::PerCurve(CurveScales {
            retry: args.retry_scale.unwrap_or(current.retry()),
            batch: args.batch_scale.unwrap_or(current.batch()),
            interval: args.interval_scale.unwrap_or(current.interval()),
        });
    }
}

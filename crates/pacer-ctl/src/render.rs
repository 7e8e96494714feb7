use std::io::Write;

use pacer_model::{ControllerBounds, ControllerResult, RoundingPolicy};

use crate::args::OutputArg;

const HEADER: [&str; 4] = ["backlog", "interval", "retries", "batch"];

/// Write derived parameters, one row per backlog.
pub fn write_results<W: Write>(
    out: &mut W,
    rows: &[ControllerResult],
    format: OutputArg,
) -> anyhow::Result<()> {
    match format {
        OutputArg::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
        }
        OutputArg::Table => {
            writeln!(
                out,
                "{:>12}  {:>9}  {:>7}  {:>6}",
                HEADER[0], HEADER[1], HEADER[2], HEADER[3]
            )?;
            for r in rows {
                writeln!(
                    out,
                    "{:>12}  {:>9}  {:>7}  {:>6}",
                    r.backlog, r.monitoring_interval, r.max_retries, r.batch_size
                )?;
            }
        }
    }
    Ok(())
}

/// Write the effective configuration.
pub fn write_bounds<W: Write>(
    out: &mut W,
    bounds: &ControllerBounds,
    rounding: RoundingPolicy,
    format: OutputArg,
) -> anyhow::Result<()> {
    match format {
        OutputArg::Json => {
            let value = serde_json::json!({ "bounds": bounds, "rounding": rounding });
            serde_json::to_writer_pretty(&mut *out, &value)?;
            writeln!(out)?;
        }
        OutputArg::Table => {
            let s = bounds.scale();
            writeln!(out, "retries   {} ..= {}", bounds.min_retries(), bounds.max_retries())?;
            writeln!(out, "batch     {} ..= {}", bounds.min_batch(), bounds.max_batch())?;
            writeln!(out, "interval  {} ..= {}", bounds.min_interval(), bounds.max_interval())?;
            writeln!(
                out,
                "scale     retry={} batch={} interval={}",
                s.retry(),
                s.batch(),
                s.interval()
            )?;
            writeln!(out, "rounding  {rounding}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pacer_core::ParameterController;

    use super::*;

    fn rows() -> Vec<ControllerResult> {
        ParameterController::default()
            .compute_many([10.0, 1000.0])
            .unwrap()
    }

    #[test]
    fn table_has_header_and_aligned_rows() {
        let mut buf = Vec::new();
        write_results(&mut buf, &rows(), OutputArg::Table).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("backlog") && lines[0].contains("batch"));
        assert_eq!(
            lines[1].split_whitespace().collect::<Vec<_>>(),
            ["10", "7.27", "10", "15"]
        );
        assert_eq!(
            lines[2].split_whitespace().collect::<Vec<_>>(),
            ["1000", "4", "6", "60"]
        );
    }

    #[test]
    fn table_prints_clamped_interval_exactly() {
        let bounds = pacer_model::BoundsConfig {
            min_interval: 1.234,
            ..Default::default()
        }
        .validate()
        .unwrap();
        let rows = vec![ParameterController::new(bounds).compute_count(1_000_000)];

        let mut buf = Vec::new();
        write_results(&mut buf, &rows, OutputArg::Table).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let row: Vec<&str> = text.lines().nth(1).unwrap().split_whitespace().collect();
        assert_eq!(row[1], "1.234");
    }

    #[test]
    fn json_is_an_array_of_results() {
        let mut buf = Vec::new();
        write_results(&mut buf, &rows(), OutputArg::Json).unwrap();
        let back: Vec<ControllerResult> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(back, rows());
    }

    #[test]
    fn bounds_json_includes_rounding() {
        let mut buf = Vec::new();
        write_bounds(
            &mut buf,
            &ControllerBounds::default(),
            RoundingPolicy::HalfAwayFromZero,
            OutputArg::Json,
        )
        .unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v["rounding"], "half-away");
        let back: RoundingPolicy = serde_json::from_value(v["rounding"].clone()).unwrap();
        assert_eq!(back, "half-away".parse::<RoundingPolicy>().unwrap());
        assert_eq!(v["bounds"]["maxBatch"], 60);
    }

    #[test]
    fn bounds_table_lists_every_range() {
        let mut buf = Vec::new();
        write_bounds(
            &mut buf,
            &ControllerBounds::default(),
            RoundingPolicy::HalfEven,
            OutputArg::Table,
        )
        .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("retries   1 ..= 10"));
        assert!(text.contains("interval  1 ..= 8"));
        assert!(text.contains("rounding  half-even"));
    }
}

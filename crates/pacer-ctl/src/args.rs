use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pacer_model::RoundingPolicy;
use pacer_observe::{LoggerFormat, LoggerLevel};

#[derive(Parser, Debug)]
#[command(name = "pacer-ctl", version)]
#[command(about = "Derive worker polling parameters from queue backlog")]
pub struct Cli {
    #[command(flatten)]
    pub bounds: BoundsArgs,

    /// Output format: table or json
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub output: OutputArg,

    /// Tie-breaking rule: half-even or half-away
    #[arg(long, global = true, default_value = "half-even")]
    pub rounding: RoundingPolicy,

    /// Log filter expression, e.g. "info" or "pacer_core=debug"
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: LoggerLevel,

    /// Log format: text or json
    #[arg(long, global = true, default_value = "text")]
    pub log_format: LoggerFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Derive parameters for one or more backlog measurements
    Compute {
        #[arg(required = true, allow_negative_numbers = true)]
        backlog: Vec<f64>,
    },
    /// Print parameters for the reference backlog sweep
    Sample,
    /// Validate the configuration and print the effective bounds
    Check,
}

/// Controller bounds: a JSON file, then per-field overrides.
#[derive(Args, Debug, Default)]
pub struct BoundsArgs {
    /// JSON file with controller bounds (camelCase keys)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub min_retries: Option<u32>,
    #[arg(long, global = true)]
    pub max_retries: Option<u32>,

    #[arg(long, global = true)]
    pub min_batch: Option<u32>,
    #[arg(long, global = true)]
    pub max_batch: Option<u32>,

    #[arg(long, global = true)]
    pub min_interval: Option<f64>,
    #[arg(long, global = true)]
    pub max_interval: Option<f64>,

    /// Scale factor shared by all three curves
    #[arg(long, global = true)]
    pub scale_factor: Option<f64>,

    /// Scale factor for the retry curve only
    #[arg(long, global = true)]
    pub retry_scale: Option<f64>,
    /// Scale factor for the batch curve only
    #[arg(long, global = true)]
    pub batch_scale: Option<f64>,
    /// Scale factor for the interval curve only
    #[arg(long, global = true)]
    pub interval_scale: Option<f64>,
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputArg {
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compute_with_negative_backlog() {
        let cli = Cli::try_parse_from(["pacer-ctl", "compute", "10", "-5"]).unwrap();
        match cli.command {
            Command::Compute { backlog } => assert_eq!(backlog, vec![10.0, -5.0]),
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.output, OutputArg::Table);
        assert_eq!(cli.rounding, RoundingPolicy::HalfEven);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pacer-ctl",
            "sample",
            "--output",
            "json",
            "--rounding",
            "half-away",
            "--max-batch",
            "100",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Sample));
        assert_eq!(cli.output, OutputArg::Json);
        assert_eq!(cli.rounding, RoundingPolicy::HalfAwayFromZero);
        assert_eq!(cli.bounds.max_batch, Some(100));
    }

    #[test]
    fn rejects_bad_rounding_and_level() {
        assert!(Cli::try_parse_from(["pacer-ctl", "check", "--rounding", "ceil"]).is_err());
        assert!(Cli::try_parse_from(["pacer-ctl", "check", "--log-level", "x=loud"]).is_err());
    }

    #[test]
    fn compute_requires_a_backlog() {
        assert!(Cli::try_parse_from(["pacer-ctl", "compute"]).is_err());
    }
}

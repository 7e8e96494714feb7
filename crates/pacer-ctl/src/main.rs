use std::io::{self, Write};

use anyhow::bail;
use clap::Parser;
use tracing::{info, warn};

use pacer_core::ParameterController;
use pacer_model::SAMPLE_BACKLOGS;
use pacer_observe::{LoggerConfig, init_logger};

mod args;
mod config;
mod render;

use args::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1) logger
    let log_cfg = LoggerConfig {
        format: cli.log_format,
        level: cli.log_level.clone(),
        ..Default::default()
    };
    init_logger(&log_cfg)?;

    // 2) bounds
    let bounds = config::resolve_bounds(&cli.bounds)?;
    let controller = ParameterController::new(bounds).with_rounding(cli.rounding);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // 3) command
    match cli.command {
        Command::Check => {
            render::write_bounds(&mut out, controller.bounds(), controller.rounding(), cli.output)?;
        }
        Command::Sample => {
            let rows: Vec<_> = SAMPLE_BACKLOGS
                .iter()
                .map(|&b| controller.compute_count(b))
                .collect();
            render::write_results(&mut out, &rows, cli.output)?;
        }
        Command::Compute { backlog } => {
            let mut rows = Vec::with_capacity(backlog.len());
            let mut rejected = 0usize;
            for b in backlog {
                match controller.compute(b) {
                    Ok(r) => {
                        info!(
                            backlog = b,
                            interval = r.monitoring_interval,
                            retries = r.max_retries,
                            batch = r.batch_size,
                            "parameters derived"
                        );
                        rows.push(r);
                    }
                    Err(e) => {
                        warn!(backlog = b, kind = e.as_label(), "{e}");
                        rejected += 1;
                    }
                }
            }
            render::write_results(&mut out, &rows, cli.output)?;
            out.flush()?;
            if rejected > 0 {
                bail!("{rejected} backlog value(s) rejected");
            }
        }
    }

    out.flush()?;
    Ok(())
}

use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::logger::{
    config::LoggerConfig,
    error::{LoggerError, LoggerResult},
    object::LoggerRfc3339,
};

/// Human-readable logs on stderr.
pub(crate) fn logger_text(cfg: &LoggerConfig, timer: LoggerRfc3339) -> LoggerResult<()> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(cfg.should_use_color())
        .with_target(cfg.with_targets)
        .with_timer(timer);

    let subscriber = tracing_subscriber::registry()
        .with(cfg.level.to_env_filter())
        .with(fmt_layer);
    init_subscriber(subscriber)
}

/// One JSON object per event on stderr.
pub(crate) fn logger_json(cfg: &LoggerConfig, timer: LoggerRfc3339) -> LoggerResult<()> {
    let fmt_layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(cfg.with_targets)
        .with_timer(timer);

    let subscriber = tracing_subscriber::registry()
        .with(cfg.level.to_env_filter())
        .with(fmt_layer);
    init_subscriber(subscriber)
}

fn init_subscriber<S>(subscriber: S) -> LoggerResult<()>
where
    S: Subscriber + Send + Sync + 'static,
{
    subscriber
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::object::LoggerTimeZone;

    #[test]
    fn second_install_reports_already_initialized() {
        let cfg = LoggerConfig {
            use_color: false,
            ..Default::default()
        };
        let timer = LoggerRfc3339::new(LoggerTimeZone::Utc.resolve());

        // Another test may have won the race for the global slot; either way
        // at most one install succeeds.
        let first = logger_text(&cfg, timer);
        assert!(
            first.is_ok() || matches!(first, Err(LoggerError::AlreadyInitialized)),
            "unexpected install error: {first:?}"
        );

        let second = logger_json(&cfg, timer);
        assert!(matches!(second, Err(LoggerError::AlreadyInitialized)));
    }
}

mod config;
mod error;
mod install;
mod object;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use object::{LoggerFormat, LoggerLevel, LoggerRfc3339, LoggerTimeZone};

/// Installs the global tracing subscriber described by `cfg`.
///
/// Output goes to stderr so that stdout stays free for command output.
/// With [`LoggerTimeZone::Local`] the offset is resolved here, once; call this
/// before spawning threads, local offset detection is unreliable afterwards.
///
/// # Examples
/// ```rust
/// use pacer_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::default();
/// init_logger(&config).expect("Failed to initialize logger");
///
/// tracing::info!("logger initialized");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    let timer = LoggerRfc3339::new(cfg.tz.resolve());
    match cfg.format {
        LoggerFormat::Text => install::logger_text(cfg, timer),
        LoggerFormat::Json => install::logger_json(cfg, timer),
    }
}

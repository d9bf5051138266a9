//! tracing subscriber setup. Everything is written to stderr; stdout is
//! reserved for report output.

use crate::cli::{LogFormat, LogLevel, LoggingConfig};
use crate::{CliError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Pick the filter directive from the command line, falling back to the config.
pub fn filter_directive(
    verbose: u8,
    quiet: bool,
    log_level: Option<LogLevel>,
    config: &LoggingConfig,
) -> &'static str {
    if let Some(level) = log_level {
        level.as_filter()
    } else if quiet {
        "error"
    } else {
        match verbose {
            0 => config.level.as_filter(),
            1 => "debug",
            _ => "trace",
        }
    }
}

pub fn setup_logging(
    verbose: u8,
    quiet: bool,
    log_level: Option<LogLevel>,
    log_format: Option<LogFormat>,
    config: &LoggingConfig,
) -> Result<()> {
    let filter = EnvFilter::new(filter_directive(verbose, quiet, log_level, config));

    let formatter = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_level(true);

    let registry = tracing_subscriber::registry().with(filter);
    match log_format.unwrap_or(config.format) {
        LogFormat::Pretty => registry.with(formatter).try_init(),
        LogFormat::Json => registry.with(formatter.json()).try_init(),
    }
    .map_err(|e| CliError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_config_level() {
        let config = LoggingConfig::default();
        assert_eq!(filter_directive(0, false, None, &config), "warn");

        let config = LoggingConfig {
            level: LogLevel::Info,
            ..LoggingConfig::default()
        };
        assert_eq!(filter_directive(0, false, None, &config), "info");
    }

    #[test]
    fn test_command_line_overrides() {
        let config = LoggingConfig::default();
        assert_eq!(filter_directive(1, false, None, &config), "debug");
        assert_eq!(filter_directive(3, false, None, &config), "trace");
        assert_eq!(filter_directive(2, true, None, &config), "error");
        assert_eq!(
            filter_directive(0, true, Some(LogLevel::Debug), &config),
            "debug"
        );
    }
}

//! Logging Initialization
//!
//! Installs a `tracing_subscriber` fmt subscriber writing to stderr, so the
//! demo transcript on stdout stays clean.

use tracing_subscriber::EnvFilter;

use crate::args::LogFormat;

/// Error type for subscriber installation
pub type LoggingError = Box<dyn std::error::Error + Send + Sync>;

/// Install the global subscriber for the given filter and format
///
/// # Arguments
/// * `log_level` - `EnvFilter` directives (e.g. `"info"`, `"frameworks_demo=debug"`)
/// * `log_format` - Output style
///
/// # Returns
/// Error if the filter does not parse or a subscriber is already installed
pub fn init_logging(log_level: &str, log_format: LogFormat) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(log_level)?;
    let s = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match log_format {
        LogFormat::Compact => s.compact().try_init(),
        LogFormat::Full => s.try_init(),
        LogFormat::Pretty => s.pretty().try_init(),
    }?;

    Ok(())
}

/// Install a subscriber that writes through the test harness, ignoring
/// repeated calls within one process
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("LOG_LEVEL"))
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_filter() {
        assert!(init_logging("demo=loud", LogFormat::Compact).is_err());
    }
}

//! Command-Line Argument Parsing Module
//!
//! Operands for the demo transcript plus logging options. Uses clap for
//! type-safe argument parsing with environment fallbacks for logging.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use demoprogram::Number;

/// Output style of the log subscriber
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Corresponds to [`tracing_subscriber::fmt::format::Compact`]
    Compact,

    /// Corresponds to [`tracing_subscriber::fmt::format::Full`]
    Full,

    /// Corresponds to [`tracing_subscriber::fmt::format::Pretty`]
    Pretty,
}

/// Error returned when a log format name is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLogFormat(String);

impl std::fmt::Display for InvalidLogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid log format '{}', expected one of 'compact', 'full', or 'pretty'",
            self.0
        )
    }
}

impl std::error::Error for InvalidLogFormat {}

impl FromStr for LogFormat {
    type Err = InvalidLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" => Ok(LogFormat::Compact),
            "full" => Ok(LogFormat::Full),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(InvalidLogFormat(s.to_owned())),
        }
    }
}

/// demoprogram command-line arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "demoprogram")]
#[command(about = "Walk through the demoprogram calc and utility functions")]
#[command(version)]
#[command(allow_negative_numbers = true)]
pub struct DemoArgs {
    /// Text used for the string utility demos
    #[arg(long, default_value = "Hello, World!")]
    pub text: String,

    /// First integer operand
    #[arg(short = 'a', default_value_t = 10)]
    pub a: i64,

    /// Second integer operand
    #[arg(short = 'b', default_value_t = 3)]
    pub b: i64,

    /// Numbers to average
    #[arg(long, num_args = 0.., default_values = ["1", "2", "3", "4", "5"])]
    pub numbers: Vec<Number>,

    /// Part for the percentage demo
    #[arg(long, default_value = "25")]
    pub part: Number,

    /// Total for the percentage demo
    #[arg(long, default_value = "100")]
    pub total: Number,

    /// File whose size is reported in the utility section
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Log level filter, as a comma separated list of `tracing_subscriber::EnvFilter` directives
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Log output format: compact, full or pretty
    #[arg(long, env = "LOG_FORMAT", default_value = "compact")]
    pub log_format: LogFormat,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            text: "Hello, World!".to_owned(),
            a: 10,
            b: 3,
            numbers: (1..=5).map(Number::int).collect(),
            part: Number::int(25),
            total: Number::int(100),
            file: None,
            log_level: "warn".to_owned(),
            log_format: LogFormat::Compact,
        }
    }
}

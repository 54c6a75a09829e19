//! Command-line interface: write log lines from shell scripts using the same formatting
//! as the library.

mod run;

pub use run::{apply_overrides, run};

use clap::Parser;
use std::path::PathBuf;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    #[value(alias = "warn")]
    Warning,
    #[value(alias = "err")]
    Error,
    #[value(alias = "crit")]
    Critical,
}

impl From<LogLevel> for crate::level::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warning => Self::Warning,
            LogLevel::Error => Self::Error,
            LogLevel::Critical => Self::Critical,
        }
    }
}

/// tintlog - write a leveled, colored log line.
///
/// With no MESSAGE, each line read from stdin is logged separately.
#[derive(Debug, Parser)]
#[command(name = "tintlog", version, about = "Write leveled, colored log lines")]
pub struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Level of the message
    #[arg(short, long, value_enum, default_value = "info")]
    pub level: LogLevel,

    /// Minimum level that gets written (overrides config)
    #[arg(short, long, value_enum)]
    pub threshold: Option<LogLevel>,

    /// Write even if the level is below the threshold
    #[arg(long)]
    pub force: bool,

    /// Prefix before the level
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Omit the timestamp
    #[arg(long)]
    pub no_date: bool,

    /// chrono strftime format for the timestamp
    #[arg(long, value_name = "FMT")]
    pub date_format: Option<String>,

    /// Line template, e.g. "{level} {msg}"
    #[arg(long)]
    pub template: Option<String>,

    /// stdout, stderr, or a file path
    #[arg(short, long, value_name = "TARGET")]
    pub output: Option<String>,

    /// Message words, joined with spaces
    pub message: Vec<String>,
}

//! tintlog's own diagnostics (config fallbacks, file creation), reported through a
//! private logger on stderr so they look like every other line.
//!
//! The threshold comes from `TINTLOG_INTERNAL_LEVEL` when set, `warning` otherwise,
//! so the library stays quiet unless asked.

use crate::fmt::{Color, Style, wrap};
use crate::level::Level;
use crate::logger::Logger;
use std::io;
use std::sync::OnceLock;

/// Read once when the internal logger is first used.
pub const LEVEL_ENV: &str = "TINTLOG_INTERNAL_LEVEL";

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

fn logger() -> &'static Logger {
    INTERNAL_LOGGER.get_or_init(|| {
        let level = std::env::var(LEVEL_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Level::Warning);
        let logger = Logger::new(io::stderr(), level);
        logger.set_prefix(wrap(Style::Bold, Color::Magenta, "tintlog", Style::Off));
        logger
    })
}

fn log(level: Level, scope: &str, msg: &str) {
    // Diagnostics must never turn into errors for the caller.
    let _ = logger().log(level, &format!("[{scope}] {msg}"));
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}

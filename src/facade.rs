//! Process-wide default logger and free functions that delegate to it.
//!
//! The logger is created on first use (stderr, `Warning`, colored `>>>` prefix, Ruby-style
//! date, `Flags::STD`) and lives for the rest of the process. Code that wants isolation,
//! tests in particular, should construct its own [`Logger`] instead.
//!
//! Every function is `#[track_caller]`, so with a file flag set the reported location is
//! the code calling into this module. Leveled functions write to the configured stream;
//! `print`, `println` and `printf` always write to stdout.
//!
//! ```no_run
//! use tintlog::{Level, facade};
//!
//! facade::set_level(Level::Info);
//! facade::info("service started");
//! facade::printf(format_args!("{} workers", 4)).ok();
//! ```

use crate::flags::Flags;
use crate::level::Level;
use crate::logger::Logger;
use crate::output::Stream;
use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::OnceLock;

static STD: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, built on first access.
pub fn global() -> &'static Logger {
    STD.get_or_init(|| Logger::new(io::stderr(), Level::Warning))
}

#[must_use]
pub fn level() -> Level {
    global().level()
}

pub fn set_level(level: Level) {
    global().set_level(level);
}

/// Returns the stream that was replaced.
pub fn set_stream(stream: impl Write + Send + 'static) -> Stream {
    global().set_stream(stream)
}

#[must_use]
pub fn prefix() -> String {
    global().prefix()
}

pub fn set_prefix(prefix: impl Into<String>) {
    global().set_prefix(prefix);
}

#[must_use]
pub fn date_format() -> String {
    global().date_format()
}

/// # Errors
/// [`crate::Error::DateFormat`] if chrono can't render `format`.
pub fn set_date_format(format: impl Into<String>) -> Result<(), crate::Error> {
    global().set_date_format(format)
}

#[must_use]
pub fn flags() -> Flags {
    global().flags()
}

pub fn set_flags(flags: Flags) {
    global().set_flags(flags);
}

#[must_use]
pub fn colors() -> bool {
    global().colors()
}

pub fn set_colors(enabled: bool) {
    global().set_colors(enabled);
}

/// Written to stdout regardless of the threshold, labelled with the current threshold
/// level. Leveled records keep going to the configured stream.
///
/// # Errors
/// Stdout write errors, unchanged.
#[track_caller]
pub fn print(msg: &str) -> io::Result<usize> {
    let caller = Location::caller();
    let logger = global();
    let mut stdout = io::stdout();
    logger.output(
        Some(caller),
        logger.level(),
        msg,
        Some(&mut stdout as &mut dyn Write),
    )
}

/// [`print`] with a trailing newline.
///
/// # Errors
/// Stdout write errors, unchanged.
#[track_caller]
pub fn println(msg: &str) -> io::Result<usize> {
    print(&format!("{msg}\n"))
}

/// [`print`] for `format_args!` input.
///
/// # Errors
/// Stdout write errors, unchanged.
#[track_caller]
pub fn printf(args: fmt::Arguments<'_>) -> io::Result<usize> {
    print(&fmt::format(args))
}

#[track_caller]
pub fn debug(msg: &str) -> Option<io::Result<usize>> {
    global().debug(msg)
}

#[track_caller]
pub fn info(msg: &str) -> Option<io::Result<usize>> {
    global().info(msg)
}

#[track_caller]
pub fn warning(msg: &str) -> Option<io::Result<usize>> {
    global().warning(msg)
}

#[track_caller]
pub fn error(msg: &str) -> Option<io::Result<usize>> {
    global().error(msg)
}

#[track_caller]
pub fn critical(msg: &str) -> Option<io::Result<usize>> {
    global().critical(msg)
}

//! The logger: configuration plus a reusable line buffer behind one mutex, so each record
//! reaches the stream as a single uninterrupted write.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::flags::Flags;
use crate::fmt::{CallerInfo, FormatTemplate, LineFormat};
use crate::level::Level;
use crate::output::Stream;
use chrono::Local;
use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Everything a write touches. Only reachable through the logger's lock.
struct State {
    format: LineFormat,
    level: Level,
    stream: Stream,
    /// Cleared, not reallocated, for every record.
    buf: String,
}

/// A logger can be shared between threads; each record is rendered and written while
/// holding the lock, so lines from concurrent writers never interleave.
pub struct Logger {
    state: Mutex<State>,
}

impl Logger {
    /// Logger with the default format: colored `>>>` prefix, Ruby-style date, `Flags::STD`.
    #[must_use]
    pub fn new(stream: impl Write + Send + 'static, level: Level) -> Self {
        Self::from_parts(Box::new(stream), level, LineFormat::default())
    }

    /// Like [`Logger::new`] but with a custom line template.
    ///
    /// # Errors
    /// [`crate::Error::Template`] if the template doesn't compile; no logger is created.
    pub fn with_template(
        stream: impl Write + Send + 'static,
        level: Level,
        template: &str,
    ) -> Result<Self, crate::Error> {
        let mut format = LineFormat::default();
        format.set_template(FormatTemplate::parse(template)?);
        Ok(Self::from_parts(Box::new(stream), level, format))
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) fn from_parts(stream: Stream, level: Level, format: LineFormat) -> Self {
        Self {
            state: Mutex::new(State {
                format,
                level,
                stream,
                buf: String::with_capacity(256),
            }),
        }
    }

    /// A writer that panicked mid-record leaves nothing half-updated that matters: the
    /// buffer is cleared on the next call anyway.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The write path every other method funnels into.
    ///
    /// `caller` is the call site to report; `None` is rendered as `???:0`. It is resolved
    /// before the lock is taken. The line goes to `stream` when given, otherwise to the
    /// logger's own stream, in one `write_all` call.
    ///
    /// # Errors
    /// Whatever the stream returns, unchanged. Nothing is retried.
    pub fn output(
        &self,
        caller: Option<&'static Location<'static>>,
        level: Level,
        text: &str,
        stream: Option<&mut dyn Write>,
    ) -> io::Result<usize> {
        let now = Local::now();
        let caller = CallerInfo::resolve(caller);

        let mut guard = self.lock();
        let State {
            format,
            stream: own,
            buf,
            ..
        } = &mut *guard;

        buf.clear();
        format.format_into(buf, &now, level, &caller, text);

        let out: &mut dyn Write = match stream {
            Some(s) => s,
            None => own,
        };
        out.write_all(buf.as_bytes())?;
        Ok(buf.len())
    }

    /// Whether a record at `level` passes the threshold.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.lock().level
    }

    /// Writes `msg` at `level` if it passes the threshold; `None` when suppressed.
    #[track_caller]
    pub fn log(&self, level: Level, msg: &str) -> Option<io::Result<usize>> {
        let caller = Location::caller();
        if !self.enabled(level) {
            return None;
        }
        Some(self.output(Some(caller), level, msg, None))
    }

    #[track_caller]
    pub fn debug(&self, msg: &str) -> Option<io::Result<usize>> {
        self.log(Level::Debug, msg)
    }

    #[track_caller]
    pub fn info(&self, msg: &str) -> Option<io::Result<usize>> {
        self.log(Level::Info, msg)
    }

    #[track_caller]
    pub fn warning(&self, msg: &str) -> Option<io::Result<usize>> {
        self.log(Level::Warning, msg)
    }

    #[track_caller]
    pub fn error(&self, msg: &str) -> Option<io::Result<usize>> {
        self.log(Level::Error, msg)
    }

    #[track_caller]
    pub fn critical(&self, msg: &str) -> Option<io::Result<usize>> {
        self.log(Level::Critical, msg)
    }

    /// Always written, whatever the threshold. The line is labelled with the current
    /// threshold level.
    ///
    /// # Errors
    /// Stream write errors, unchanged.
    #[track_caller]
    pub fn print(&self, msg: &str) -> io::Result<usize> {
        let caller = Location::caller();
        self.output(Some(caller), self.level(), msg, None)
    }

    /// [`Logger::print`] with a trailing newline. The line still ends with exactly one.
    ///
    /// # Errors
    /// Stream write errors, unchanged.
    #[track_caller]
    pub fn println(&self, msg: &str) -> io::Result<usize> {
        self.print(&format!("{msg}\n"))
    }

    /// [`Logger::print`] for `format_args!` input.
    ///
    /// # Errors
    /// Stream write errors, unchanged.
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) -> io::Result<usize> {
        self.print(&fmt::format(args))
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.lock().level
    }

    pub fn set_level(&self, level: Level) {
        self.lock().level = level;
    }

    /// Swaps the output stream and hands back the previous one.
    pub fn set_stream(&self, stream: impl Write + Send + 'static) -> Stream {
        std::mem::replace(&mut self.lock().stream, Box::new(stream))
    }

    #[must_use]
    pub fn prefix(&self) -> String {
        self.lock().format.prefix().to_string()
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.lock().format.set_prefix(prefix);
    }

    #[must_use]
    pub fn date_format(&self) -> String {
        self.lock().format.date_format().to_string()
    }

    /// Takes a chrono strftime string, e.g. `%Y-%m-%d %H:%M:%S`.
    ///
    /// # Errors
    /// [`crate::Error::DateFormat`] if chrono can't render it; the old format stays.
    pub fn set_date_format(&self, format: impl Into<String>) -> Result<(), crate::Error> {
        self.lock().format.set_date_format(format)
    }

    #[must_use]
    pub fn flags(&self) -> Flags {
        self.lock().format.flags()
    }

    pub fn set_flags(&self, flags: Flags) {
        self.lock().format.set_flags(flags);
    }

    #[must_use]
    pub fn colors(&self) -> bool {
        self.lock().format.colors()
    }

    pub fn set_colors(&self, enabled: bool) {
        self.lock().format.set_colors(enabled);
    }

    #[must_use]
    pub fn template(&self) -> FormatTemplate {
        self.lock().format.template().clone()
    }

    /// # Errors
    /// [`crate::Error::Template`] if the template doesn't compile; the old one stays.
    pub fn set_template(&self, template: &str) -> Result<(), crate::Error> {
        let template = FormatTemplate::parse(template)?;
        self.lock().format.set_template(template);
        Ok(())
    }

    /// Snapshot of the current line format.
    #[must_use]
    pub fn line_format(&self) -> LineFormat {
        self.lock().format.clone()
    }

    /// # Errors
    /// Whatever the stream's `flush` returns.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().stream.flush()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Logger")
            .field("level", &state.level)
            .field("format", &state.format)
            .finish_non_exhaustive()
    }
}

//! Stepwise construction for loggers that need more than a stream and a level.

use super::Logger;
use crate::flags::Flags;
use crate::fmt::{FormatTemplate, LineFormat};
use crate::level::Level;
use crate::output::{Stream, Target};
use std::io::Write;

/// Collects settings; nothing is validated until [`LoggerBuilder::build`].
pub struct LoggerBuilder {
    level: Level,
    stream: Option<Stream>,
    target: Target,
    prefix: Option<String>,
    date_format: Option<String>,
    template: Option<String>,
    flags: Flags,
    colors: bool,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Same defaults as [`Logger::new`] on stderr at `Warning`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Level::Warning,
            stream: None,
            target: Target::Stderr,
            prefix: None,
            date_format: None,
            template: None,
            flags: Flags::STD,
            colors: true,
        }
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// An explicit stream wins over [`LoggerBuilder::target`].
    #[must_use]
    pub fn stream(mut self, stream: impl Write + Send + 'static) -> Self {
        self.stream = Some(Box::new(stream));
        self
    }

    /// Opened at build time.
    #[must_use]
    pub fn target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = Some(format.into());
        self
    }

    #[must_use]
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    #[must_use]
    pub const fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    /// Compiles the template, checks the date format, and opens the target.
    ///
    /// # Errors
    /// [`crate::Error::Template`], [`crate::Error::DateFormat`], or an I/O error from
    /// opening a file target.
    pub fn build(self) -> Result<Logger, crate::Error> {
        let mut format = LineFormat::default();
        if let Some(template) = &self.template {
            format.set_template(FormatTemplate::parse(template)?);
        }
        if let Some(date_format) = self.date_format {
            format.set_date_format(date_format)?;
        }
        if let Some(prefix) = self.prefix {
            format.set_prefix(prefix);
        }
        format.set_flags(self.flags);
        format.set_colors(self.colors);

        let stream = match self.stream {
            Some(stream) => stream,
            None => self.target.open()?,
        };

        Ok(Logger::from_parts(stream, self.level, format))
    }
}

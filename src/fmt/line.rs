//! Assembles one complete log line from the template, timestamp, prefix, level, caller and message.

use super::caller::CallerInfo;
use super::color::{Color, Style, colored_level, strip, wrap};
use super::format::{FormatTemplate, FormatValues};
use crate::flags::Flags;
use crate::level::Level;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone, Utc};
use std::borrow::Cow;
use std::fmt::Write;

/// `Mon Jan 02 15:04:05 -0700 2006`
pub const RUBY_DATE: &str = "%a %b %d %H:%M:%S %z %Y";

/// Prefix text before coloring.
pub const DEFAULT_PREFIX: &str = ">>>";

/// Bold green `>>>`.
#[must_use]
pub fn default_prefix() -> String {
    wrap(Style::Bold, Color::Green, DEFAULT_PREFIX, Style::Off)
}

/// Rejects strftime strings chrono can't render, so rendering a line never has to fail.
///
/// Parse-only specifiers such as `%#z` pass the item check but fail on display, so the
/// format is also rendered once.
///
/// # Errors
/// [`crate::Error::DateFormat`] naming the offending format.
pub fn validate_date_format(format: &str) -> Result<(), crate::Error> {
    let invalid = || crate::Error::DateFormat(format.to_string());
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }
    let mut rendered = String::new();
    write!(rendered, "{}", Utc::now().format(format)).map_err(|_| invalid())?;
    Ok(())
}

/// Everything that shapes a line apart from the record itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFormat {
    template: FormatTemplate,
    prefix: String,
    date_format: String,
    flags: Flags,
    colors: bool,
}

impl Default for LineFormat {
    fn default() -> Self {
        Self {
            template: FormatTemplate::standard(),
            prefix: default_prefix(),
            date_format: RUBY_DATE.to_string(),
            flags: Flags::STD,
            colors: true,
        }
    }
}

impl LineFormat {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn template(&self) -> &FormatTemplate {
        &self.template
    }

    pub fn set_template(&mut self, template: FormatTemplate) {
        self.template = template;
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    #[must_use]
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// # Errors
    /// [`crate::Error::DateFormat`] if chrono can't render `format`; the old format is kept.
    pub fn set_date_format(&mut self, format: impl Into<String>) -> Result<(), crate::Error> {
        let format = format.into();
        validate_date_format(&format)?;
        self.date_format = format;
        Ok(())
    }

    #[must_use]
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    pub const fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }

    #[must_use]
    pub const fn colors(&self) -> bool {
        self.colors
    }

    pub const fn set_colors(&mut self, enabled: bool) {
        self.colors = enabled;
    }

    /// Escapes are only emitted when colors are enabled and the `ANSI` flag is set.
    #[must_use]
    pub const fn colored(&self) -> bool {
        self.colors && self.flags.contains(Flags::ANSI)
    }

    /// Appends one newline-terminated line to `buf`.
    ///
    /// One trailing `\n` is trimmed from the message and exactly one is added after the
    /// whole line, wherever `{msg}` sits in the template.
    pub fn format_into<Tz>(
        &self,
        buf: &mut String,
        now: &DateTime<Tz>,
        level: Level,
        caller: &CallerInfo,
        text: &str,
    ) where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let colored = self.colored();

        let mut date = String::new();
        if self.flags.contains(Flags::DATE)
            && write!(date, "{}", now.format(&self.date_format)).is_err()
        {
            // Only reachable for a format that skipped validation.
            date.clear();
        }

        let level_name: Cow<'_, str> = if colored {
            Cow::Owned(colored_level(level))
        } else {
            Cow::Borrowed(level.as_str())
        };

        let prefix: Cow<'_, str> = if colored {
            Cow::Borrowed(&self.prefix)
        } else {
            Cow::Owned(strip(&self.prefix))
        };

        let file = caller.file_for(self.flags);
        let (location, line) = file.map_or_else(
            || (String::new(), String::new()),
            |file| (format!("{file}:{}", caller.line), caller.line.to_string()),
        );

        let values = FormatValues::new()
            .prefix(&prefix)
            .level(&level_name)
            .date(&date)
            .caller(&location, file.unwrap_or_default(), &line)
            .msg(text.strip_suffix('\n').unwrap_or(text));
        self.template.render_into(buf, &values);
        buf.push('\n');
    }

    /// Convenience for tests and one-off rendering.
    #[must_use]
    pub fn format<Tz>(
        &self,
        now: &DateTime<Tz>,
        level: Level,
        caller: &CallerInfo,
        text: &str,
    ) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let mut buf = String::new();
        self.format_into(&mut buf, now, level, caller, text);
        buf
    }
}

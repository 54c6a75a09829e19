//! Source location of the code that issued a log call.

use crate::flags::Flags;
use std::panic::Location;

/// Substituted when no location is available.
pub const UNKNOWN_FILE: &str = "???";

/// File and line of a log call site, or the `???:0` placeholder when unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerInfo {
    pub file: &'static str,
    pub line: u32,
}

impl CallerInfo {
    /// Never fails: a missing location degrades to `???:0` so the line is still written.
    #[must_use]
    pub fn resolve(location: Option<&'static Location<'static>>) -> Self {
        location.map_or(Self::unknown(), |loc| Self {
            file: loc.file(),
            line: loc.line(),
        })
    }

    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            file: UNKNOWN_FILE,
            line: 0,
        }
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.file == UNKNOWN_FILE
    }

    /// Last path component, split on either separator so Windows paths work too.
    #[must_use]
    pub fn short_file(&self) -> &'static str {
        self.file.rsplit(['/', '\\']).next().unwrap_or(self.file)
    }

    /// File in the form the flags ask for. `SHORT_FILE` wins over `LONG_FILE`;
    /// `None` when neither is set.
    #[must_use]
    pub fn file_for(&self, flags: Flags) -> Option<&'static str> {
        if flags.contains(Flags::SHORT_FILE) {
            Some(self.short_file())
        } else if flags.contains(Flags::LONG_FILE) {
            Some(self.file)
        } else {
            None
        }
    }
}

impl Default for CallerInfo {
    fn default() -> Self {
        Self::unknown()
    }
}

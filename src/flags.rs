//! Bit set selecting which context fields (date, caller, color) go into each line.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};
use std::str::FromStr;

/// Or'ed together to control what gets printed before the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u8);

impl Flags {
    /// Nothing but prefix, level and message.
    pub const NONE: Self = Self(0);
    /// Timestamp rendered with the logger's date format.
    pub const DATE: Self = Self(1);
    /// Full file path and line number: `/a/b/c/main.rs:23`.
    pub const LONG_FILE: Self = Self(1 << 1);
    /// Base file name and line number: `main.rs:23`. Overrides `LONG_FILE`.
    pub const SHORT_FILE: Self = Self(1 << 2);
    /// Color the level and prefix with ANSI escapes.
    pub const ANSI: Self = Self(1 << 3);
    /// Defaults for the process-wide logger.
    pub const STD: Self = Self(Self::DATE.0 | Self::ANSI.0);

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Unknown bits are dropped.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b1111)
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Caller lookup is only worth doing when one of the file flags is set.
    #[must_use]
    pub const fn wants_caller(self) -> bool {
        self.intersects(Self(Self::LONG_FILE.0 | Self::SHORT_FILE.0))
    }

    /// Config files name flags instead of spelling out bit values.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidFlag`] for the first unrecognised name.
    pub fn from_names<I, S>(names: I) -> Result<Self, crate::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .try_fold(Self::NONE, |acc, name| Ok(acc | name.as_ref().parse::<Self>()?))
    }

    /// Names of the set flags, in bit order.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        [
            (Self::DATE, "date"),
            (Self::LONG_FILE, "longfile"),
            (Self::SHORT_FILE, "shortfile"),
            (Self::ANSI, "ansi"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
        .collect()
    }
}

impl BitOr for Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Flags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for Flags {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_bits(!self.0)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join("|"))
    }
}

impl FromStr for Flags {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(Self::DATE),
            "longfile" | "long_file" => Ok(Self::LONG_FILE),
            "shortfile" | "short_file" => Ok(Self::SHORT_FILE),
            "ansi" => Ok(Self::ANSI),
            "std" => Ok(Self::STD),
            "none" => Ok(Self::NONE),
            _ => Err(crate::Error::InvalidFlag(s.to_string())),
        }
    }
}

//! Where log lines go. A logger holds any `Write + Send` stream; this module provides the
//! common ones: the standard streams, append-mode files, and an in-memory buffer.

mod file;
mod memory;

pub use file::{open_append, resolve_path};
pub use memory::SharedBuffer;

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

/// Boxed stream as stored by a logger. The logger never closes the underlying device.
pub type Stream = Box<dyn Write + Send>;

/// Named destinations for configuration files and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Target {
    #[default]
    Stderr,
    Stdout,
    File(PathBuf),
}

impl Target {
    /// Opens the destination as a boxed stream.
    ///
    /// # Errors
    /// Only file targets can fail: directory creation or open errors.
    pub fn open(&self) -> Result<Stream, crate::Error> {
        match self {
            Self::Stderr => Ok(Box::new(io::stderr())),
            Self::Stdout => Ok(Box::new(io::stdout())),
            Self::File(path) => Ok(Box::new(open_append(path)?)),
        }
    }
}

/// `"stderr"` and `"stdout"` name the standard streams; anything else is a file path.
impl From<&str> for Target {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "" | "stderr" => Self::Stderr,
            "stdout" => Self::Stdout,
            _ => Self::File(resolve_path(s.trim())),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stderr => f.write_str("stderr"),
            Self::Stdout => f.write_str("stdout"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

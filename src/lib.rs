//! `tintlog` - leveled logging with ANSI colors, timestamps and caller locations.
//!
//! Each record is rendered into a reused buffer and written to the logger's stream in a
//! single call while the logger's lock is held, so concurrent writers never interleave.
//!
//! # Example
//!
//! ```
//! use tintlog::{Flags, Level, Logger, SharedBuffer};
//!
//! let out = SharedBuffer::new();
//! let logger = Logger::new(out.clone(), Level::Info);
//! logger.set_flags(Flags::SHORT_FILE);
//!
//! logger.info("cache warmed");
//! logger.debug("not shown");
//!
//! let text = out.contents();
//! assert!(text.contains("INFO"));
//! assert!(text.contains("cache warmed"));
//! assert!(!text.contains("not shown"));
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `tintlog` command-line tool

pub mod config;
mod error;
pub mod facade;
pub mod flags;
pub mod fmt;
mod internal;
pub mod level;
pub mod logger;
pub mod output;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::Error;
pub use flags::Flags;
pub use fmt::{CallerInfo, Color, FormatTemplate, LineFormat, Style, strip, wrap};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use output::{SharedBuffer, Stream, Target};

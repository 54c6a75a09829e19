//! TOML configuration for building a logger without code changes.
//!
//! Every field has a default, so an empty file (or no file at all) yields the same logger
//! as the process-wide default.

use crate::flags::Flags;
use crate::fmt::RUBY_DATE;
use crate::internal;
use crate::level::Level;
use crate::output::Target;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Mirrors the logger's settings one-to-one. Strings are parsed when the logger is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Threshold: `debug`, `info`, `warning`, `error` or `critical`.
    pub level: String,
    /// `None` keeps the colored `>>>`.
    pub prefix: Option<String>,
    pub colors: bool,
    /// chrono strftime string.
    pub date_format: String,
    pub template: String,
    /// Any of `date`, `longfile`, `shortfile`, `ansi`.
    pub flags: Vec<String>,
    /// `stderr`, `stdout`, or a file path (`~` is expanded).
    pub stream: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Level::Warning.as_str().to_lowercase(),
            prefix: None,
            colors: true,
            date_format: RUBY_DATE.to_string(),
            template: "{prefix} {level} {date} {caller} {msg}".to_string(),
            flags: vec!["date".to_string(), "ansi".to_string()],
            stream: "stderr".to_string(),
        }
    }
}

impl Config {
    /// # Errors
    /// TOML syntax or type errors.
    pub fn from_toml_str(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// Loads from the default location, falling back to defaults when the file is absent.
    ///
    /// # Errors
    /// No config directory on this platform, an unreadable file, or invalid TOML.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let path = Self::get_config_path()?;
        Self::load_from(&path)
    }

    /// Missing files are not an error: the defaults are returned instead.
    ///
    /// # Errors
    /// An unreadable file or invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug(
                "CONFIG",
                &format!("{} not found, using defaults", path.display()),
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// `~/.config/tintlog/tintlog.toml` on Linux; the platform equivalent elsewhere.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("tintlog").join("tintlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// # Errors
    /// [`crate::Error::InvalidLevel`] for an unknown level name.
    pub fn parse_level(&self) -> Result<Level, crate::Error> {
        Ok(self.level.parse()?)
    }

    /// # Errors
    /// [`crate::Error::InvalidFlag`] for the first unknown flag name.
    pub fn parse_flags(&self) -> Result<Flags, crate::Error> {
        Flags::from_names(&self.flags)
    }

    #[must_use]
    pub fn target(&self) -> Target {
        Target::from(self.stream.as_str())
    }
}

//! Logger construction from a [`Config`].

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::internal;

impl Logger {
    /// Builds a logger from the default config file, or defaults if there is none.
    ///
    /// # Errors
    /// Config loading errors, or any error [`Logger::from_config_with`] reports.
    pub fn from_config() -> Result<Self, crate::Error> {
        internal::debug("LOGGER", "Building logger from config");
        let config = Config::load()?;
        Self::from_config_with(&config)
    }

    /// # Errors
    /// Unknown level or flag names, a bad template or date format, or a file stream
    /// that can't be opened.
    pub fn from_config_with(config: &Config) -> Result<Self, crate::Error> {
        let level = config.parse_level()?;
        let flags = config.parse_flags()?;
        let target = config.target();
        internal::debug(
            "LOGGER",
            &format!("level={level}, flags={flags}, stream={target}"),
        );

        let mut builder = LoggerBuilder::new()
            .level(level)
            .flags(flags)
            .colors(config.colors)
            .date_format(&config.date_format)
            .template(&config.template)
            .target(target);
        if let Some(prefix) = &config.prefix {
            builder = builder.prefix(prefix);
        }

        let logger = builder.build()?;
        internal::debug("LOGGER", "Logger ready");
        Ok(logger)
    }
}

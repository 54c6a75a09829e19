use super::Cli;
use crate::config::Config;
use crate::flags::Flags;
use crate::level::Level;
use crate::logger::Logger;
use std::io::{self, BufRead};
use std::process::ExitCode;

/// Folds command-line options over the loaded config; flags given on the command line win.
pub fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(threshold) = cli.threshold {
        config.level = Level::from(threshold).as_str().to_lowercase();
    }
    if let Some(prefix) = &cli.prefix {
        config.prefix = Some(prefix.clone());
    }
    if cli.no_color {
        config.colors = false;
    }
    if cli.no_date {
        // `std` carries the date bit too, so clear it on the combined set.
        if let Ok(flags) = config.parse_flags() {
            let names = (flags & !Flags::DATE).names();
            config.flags = names.into_iter().map(String::from).collect();
        }
    }
    if let Some(format) = &cli.date_format {
        config.date_format.clone_from(format);
    }
    if let Some(template) = &cli.template {
        config.template.clone_from(template);
    }
    if let Some(output) = &cli.output {
        config.stream.clone_from(output);
    }
}

fn load_config(cli: &Cli) -> Result<Config, crate::Error> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn write_line(logger: &Logger, cli: &Cli, msg: &str) -> io::Result<()> {
    let level = Level::from(cli.level);
    if cli.force || logger.enabled(level) {
        logger.output(None, level, msg, None)?;
    }
    Ok(())
}

fn write_messages(logger: &Logger, cli: &Cli) -> io::Result<()> {
    if cli.message.is_empty() {
        for line in io::stdin().lock().lines() {
            write_line(logger, cli, &line?)?;
        }
    } else {
        write_line(logger, cli, &cli.message.join(" "))?;
    }
    logger.flush()
}

/// Builds the logger and writes the message(s); returns the process exit code.
#[must_use]
pub fn run(cli: &Cli) -> ExitCode {
    let mut config = match load_config(cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };
    apply_overrides(&mut config, cli);

    let logger = match Logger::from_config_with(&config) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error building logger: {e}");
            return ExitCode::FAILURE;
        }
    };

    match write_messages(&logger, cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error writing log: {e}");
            ExitCode::FAILURE
        }
    }
}

use std::fs;
use tempfile::TempDir;
use tintlog::{Config, Flags, Level, Logger, Target};

#[test]
fn empty_config_matches_defaults() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.parse_level().unwrap(), Level::Warning);
    assert_eq!(config.parse_flags().unwrap(), Flags::STD);
    assert_eq!(config.target(), Target::Stderr);
}

#[test]
fn full_config_parses() {
    let config = Config::from_toml_str(
        r#"
level = "debug"
prefix = "svc"
colors = false
date_format = "%H:%M"
template = "{level} {msg}"
flags = ["shortfile", "date"]
stream = "stdout"
"#,
    )
    .unwrap();
    assert_eq!(config.parse_level().unwrap(), Level::Debug);
    assert_eq!(config.prefix.as_deref(), Some("svc"));
    assert!(!config.colors);
    assert_eq!(config.parse_flags().unwrap(), Flags::SHORT_FILE | Flags::DATE);
    assert_eq!(config.target(), Target::Stdout);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = Config::from_toml_str("level = [").unwrap_err();
    assert!(matches!(err, tintlog::Error::ConfigParse(_)));
}

#[test]
fn unknown_level_and_flag_fail_logger_build() {
    let config = Config {
        level: "loud".to_string(),
        ..Config::default()
    };
    assert!(matches!(
        Logger::from_config_with(&config),
        Err(tintlog::Error::InvalidLevel(l)) if l == "loud"
    ));

    let config = Config {
        flags: vec!["sparkles".to_string()],
        ..Config::default()
    };
    assert!(matches!(
        Logger::from_config_with(&config),
        Err(tintlog::Error::InvalidFlag(_))
    ));
}

#[test]
fn bad_template_fails_logger_build() {
    let config = Config {
        template: "{level}".to_string(),
        ..Config::default()
    };
    assert!(matches!(
        Logger::from_config_with(&config),
        Err(tintlog::Error::Template(_))
    ));
}

#[test]
fn load_from_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn logger_from_config_writes_to_file_stream() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("nested").join("app.log");
    let config_path = dir.path().join("tintlog.toml");
    fs::write(
        &config_path,
        format!(
            "level = \"info\"\nprefix = \"app\"\nflags = []\ntemplate = \"{{prefix}}|{{level}}|{{msg}}\"\nstream = \"{}\"\n",
            log_path.display()
        ),
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();
    let logger = Logger::from_config_with(&config).unwrap();
    assert!(logger.debug("hidden").is_none());
    logger.info("first").unwrap().unwrap();
    logger.error("second\n").unwrap().unwrap();
    logger.flush().unwrap();

    let content = fs::read_to_string(&log_path).unwrap();
    assert_eq!(content, "app|INFO|first\napp|ERROR|second\n");
}

#[test]
fn default_config_path_is_under_tintlog_dir() {
    if let Ok(path) = Config::get_config_path() {
        assert!(path.ends_with("tintlog/tintlog.toml"));
    }
}

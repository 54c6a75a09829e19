use std::fs;
use std::io::Write;
use tempfile::TempDir;
use tintlog::output::{open_append, resolve_path};
use tintlog::{Flags, Level, Logger, Target};

#[test]
fn open_append_creates_parents_and_appends() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a").join("b").join("out.log");

    open_append(&path).unwrap().write_all(b"one\n").unwrap();
    open_append(&path).unwrap().write_all(b"two\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
}

#[test]
fn target_names_parse() {
    assert_eq!(Target::from("stderr"), Target::Stderr);
    assert_eq!(Target::from("STDOUT"), Target::Stdout);
    assert_eq!(Target::from(""), Target::Stderr);
    assert_eq!(
        Target::from("/var/log/app.log"),
        Target::File("/var/log/app.log".into())
    );
    assert_eq!(Target::Stdout.to_string(), "stdout");
}

#[test]
fn tilde_is_expanded() {
    let path = resolve_path("~/x.log");
    assert!(!path.to_string_lossy().starts_with('~'));
    assert!(path.ends_with("x.log"));
}

#[test]
fn builder_opens_file_target() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("logger.log");

    let logger = Logger::builder()
        .target(Target::File(path.clone()))
        .level(Level::Info)
        .flags(Flags::NONE)
        .build()
        .unwrap();
    logger.warning("on disk").unwrap().unwrap();
    drop(logger);

    assert_eq!(fs::read_to_string(&path).unwrap(), ">>> WARNING on disk\n");
}

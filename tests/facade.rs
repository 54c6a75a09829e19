//! The facade shares one logger across the process, so everything lives in a single test.

use tintlog::{Flags, Level, SharedBuffer, facade};

#[test]
fn facade_delegates_to_global_logger() {
    assert_eq!(facade::level(), Level::Warning);
    assert_eq!(facade::flags(), Flags::STD);
    assert!(facade::colors());
    assert_eq!(facade::date_format(), tintlog::fmt::RUBY_DATE);
    assert_eq!(tintlog::strip(&facade::prefix()), ">>>");

    let out = SharedBuffer::new();
    let _stderr = facade::set_stream(out.clone());
    facade::set_flags(Flags::SHORT_FILE);
    facade::set_colors(false);

    assert!(facade::info("below threshold").is_none());
    let expected = format!("facade.rs:{}", line!() + 1);
    facade::warning("disk low").unwrap().unwrap();
    assert_eq!(out.contents(), format!(">>> WARNING {expected} disk low\n"));

    out.clear();
    facade::set_level(Level::Critical);
    facade::set_prefix("app");
    let line = line!() + 1;
    let n = facade::println("always").unwrap();
    assert_eq!(n, format!("app CRITICAL facade.rs:{line} always\n").len());
    facade::printf(format_args!("n={}", 3)).unwrap();
    facade::print("raw").unwrap();
    assert!(out.is_empty(), "print family goes to stdout, not the configured stream");

    assert!(facade::error("dropped").is_none());
    facade::critical("boom");
    let contents = out.contents();
    assert!(contents.starts_with("app CRITICAL facade.rs:"));
    assert!(contents.ends_with(" boom\n"));
    assert_eq!(contents.lines().count(), 1);

    out.clear();
    facade::set_level(Level::Debug);
    facade::set_flags(Flags::DATE);
    facade::set_date_format("%Y").unwrap();
    assert!(facade::set_date_format("%K").is_err());
    facade::debug("dated");
    let year = chrono::Local::now().format("%Y").to_string();
    assert_eq!(out.contents(), format!("app DEBUG {year} dated\n"));

    assert!(std::ptr::eq(facade::global(), facade::global()));
}

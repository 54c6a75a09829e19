#![no_main]
use libfuzzer_sys::fuzz_target;
use tintlog::Config;

fuzz_target!(|data: &str| {
    // Must not panic on any config content; the stream is never opened here
    if let Ok(config) = Config::from_toml_str(data) {
        let _ = config.parse_level();
        let _ = config.parse_flags();
        let _ = config.target();
    }
});

#![no_main]
use libfuzzer_sys::fuzz_target;
use tintlog::fmt::{FormatTemplate, FormatValues};

fuzz_target!(|data: &str| {
    // Must not panic on any template string
    let Ok(template) = FormatTemplate::parse(data) else {
        return;
    };

    let values = FormatValues::new()
        .prefix(">>>")
        .level("INFO")
        .date("Tue Mar 05 14:07:09 +0000 2024")
        .caller("main.rs:1", "main.rs", "1")
        .msg("test");
    let _ = template.render(&values);
});

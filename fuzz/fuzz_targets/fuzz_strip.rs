#![no_main]
use libfuzzer_sys::fuzz_target;
use tintlog::strip;

fuzz_target!(|data: &str| {
    let once = strip(data);
    assert_eq!(strip(&once), once);
});

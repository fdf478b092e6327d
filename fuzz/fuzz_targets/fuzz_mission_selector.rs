#![no_main]

use libfuzzer_sys::fuzz_target;
use mission_control::MissionSelector;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = std::str::from_utf8(data) {
        // Parsing and displaying a selector should never panic
        let selector = MissionSelector::parse(value);
        let _ = selector.to_string();
    }
});

#![no_main]

//! Settings parser fuzzer.
//!
//! Arbitrary bytes must either parse into settings that validate or be
//! rejected with an error, never panic.

use libfuzzer_sys::fuzz_target;
use snakepit::Settings;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(settings) = Settings::from_json_str(text) {
        assert!(settings.validate().is_ok());
        assert!(settings.royale.shrink_every_n_turns >= 1);
    }
});

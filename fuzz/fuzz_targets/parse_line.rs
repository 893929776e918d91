#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        let _ = sie::tokenize(line);
        let _ = sie::parse_line(line, true);
        let _ = sie::parse_line(line, false);
    }
});

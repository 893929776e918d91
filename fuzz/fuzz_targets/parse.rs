#![no_main]

use libfuzzer_sys::fuzz_target;
use sie::{Parser, ParserOptions};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let _ = Parser::new(ParserOptions::new().lenient(true)).parse(input);
    }
});

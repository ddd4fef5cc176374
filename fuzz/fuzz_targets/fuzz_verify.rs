#![no_main]

use libfuzzer_sys::fuzz_target;
use mrzkit::{FormatType, verify_mrz};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic on any line shape, including multibyte text.
        let lines: Vec<&str> = s.lines().collect();
        let _ = verify_mrz(FormatType::Td3, &lines);
        let _ = verify_mrz(FormatType::Td1, &lines);
    }
});

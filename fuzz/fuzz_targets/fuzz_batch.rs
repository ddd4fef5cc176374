#![no_main]

use libfuzzer_sys::fuzz_target;
use mrzkit::MrzOptions;
use mrzkit::batch::convert_json;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = convert_json(s, &MrzOptions::default());
        let _ = convert_json(s, &MrzOptions::strict());
    }
});

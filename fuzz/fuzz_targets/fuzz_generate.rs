#![no_main]

use libfuzzer_sys::fuzz_target;
use mrzkit::{DocumentFields, FormatType, MrzOptions, generate_mrz, generate_mrz_with};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let mut parts = s.split('|').map(String::from);
    let mut next = || parts.next().unwrap_or_default();
    let fields = DocumentFields {
        format_type: if data.first().is_some_and(|b| b & 1 == 1) {
            FormatType::Td1
        } else {
            FormatType::Td3
        },
        doc_type: next(),
        issuing_country: next(),
        nationality: next(),
        last_name: next(),
        first_name: next(),
        document_number: next(),
        birth_date: next(),
        expiry_date: next(),
        sex: next(),
        extra_info: next(),
    };

    // Permissive generation always succeeds with fixed-width lines.
    let mrz = generate_mrz(&fields).expect("permissive generation failed");
    for line in &mrz.lines {
        assert_eq!(line.chars().count(), fields.format_type.line_width());
    }
    let _ = generate_mrz_with(&fields, &MrzOptions::strict());
});

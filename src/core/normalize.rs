//! Canonicalization of raw fields into the MRZ alphabet.

use super::types::{DocumentFields, FILLER};

/// Maximum number of optional-data characters kept from `extra_info`.
pub const EXTRA_INFO_MAX: usize = 14;

/// Convert a DDMMYY date into the YYMMDD order used inside the MRZ.
///
/// Anything that is not exactly six characters long is returned unchanged.
///
/// ```
/// use mrzkit::convert_date;
///
/// assert_eq!(convert_date("190383"), "830319");
/// assert_eq!(convert_date("1903"), "1903");
/// ```
pub fn convert_date(date: &str) -> String {
    let chars: Vec<char> = date.chars().collect();
    if chars.len() != 6 {
        return date.to_string();
    }
    let (day, rest) = chars.split_at(2);
    let (month, year) = rest.split_at(2);
    year.iter().chain(month).chain(day).collect()
}

fn upper(s: &str) -> String {
    s.to_uppercase()
}

fn upper_filled(s: &str) -> String {
    s.to_uppercase().replace(' ', &FILLER.to_string())
}

/// Produce the normalized copy of `fields` that the composer lays out.
///
/// Never fails: names and optional data are uppercased with spaces turned
/// into fillers, codes are uppercased, an empty sex becomes `<`, dates are
/// reordered to YYMMDD and `extra_info` is cut to 14 characters.
/// `doc_type` is left exactly as given.
pub fn normalize(fields: &DocumentFields) -> DocumentFields {
    let sex = upper(&fields.sex);
    let extra_info: String = upper_filled(&fields.extra_info)
        .chars()
        .take(EXTRA_INFO_MAX)
        .collect();

    DocumentFields {
        format_type: fields.format_type,
        doc_type: fields.doc_type.clone(),
        issuing_country: upper(&fields.issuing_country),
        nationality: upper(&fields.nationality),
        last_name: upper_filled(&fields.last_name),
        first_name: upper_filled(&fields.first_name),
        document_number: upper(&fields.document_number),
        birth_date: convert_date(&fields.birth_date),
        expiry_date: convert_date(&fields.expiry_date),
        sex: if sex.is_empty() { FILLER.to_string() } else { sex },
        extra_info,
    }
}

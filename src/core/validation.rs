use chrono::NaiveDate;

use super::countries::is_known_country_code;
use super::error::ValidationError;
use super::normalize::normalize;
use super::types::{DocumentFields, FILLER, FormatType};

/// Whether `c` belongs to the MRZ alphabet `[A-Z0-9<]`.
pub fn is_mrz_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || c == FILLER
}

/// Validate a field set against the standard TD3/TD1 field widths.
/// Returns all validation errors found (not just the first).
///
/// A clean result means the composed block lands every field on its ICAO
/// position, so [`verify_mrz`](super::verify_mrz) accepts it. Generation
/// only calls this in strict mode.
pub fn validate_fields(fields: &DocumentFields) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let n = normalize(fields);

    // The composer writes one filler after the code, completing the
    // two-character document code field
    let doc = fields.doc_type.as_bytes();
    if doc.len() != 1 || !doc[0].is_ascii_uppercase() {
        errors.push(ValidationError::with_rule(
            "doc_type",
            format!(
                "document code '{}' must be a single letter A-Z",
                fields.doc_type
            ),
            "MRZ-DOC-TYPE",
        ));
    }

    validate_country(&n.issuing_country, "issuing_country", &mut errors);
    validate_country(&n.nationality, "nationality", &mut errors);

    let number_len = n.document_number.chars().count();
    if number_len != 9 {
        errors.push(ValidationError::with_rule(
            "document_number",
            format!("document number has {number_len} characters, expected 9 (pad with <)"),
            "MRZ-DOC-NUMBER",
        ));
    }

    validate_date(&fields.birth_date, "birth_date", &mut errors);
    validate_date(&fields.expiry_date, "expiry_date", &mut errors);

    if !matches!(n.sex.as_str(), "M" | "F" | "X" | "<") {
        errors.push(ValidationError::with_rule(
            "sex",
            format!("sex '{}' must be M, F, X or <", fields.sex),
            "MRZ-SEX",
        ));
    }

    // Length before the normalizer's 14-character cut
    let optional_len = fields.extra_info.chars().count();
    let optional_max = match fields.format_type {
        FormatType::Td3 => 14,
        FormatType::Td1 => 11,
    };
    if optional_len > optional_max {
        errors.push(ValidationError::with_rule(
            "extra_info",
            format!(
                "optional data has {optional_len} characters, {} holds {optional_max}",
                fields.format_type
            ),
            "MRZ-OPTIONAL",
        ));
    }

    let name_len = n.last_name.chars().count() + 2 + n.first_name.chars().count();
    let name_max = match fields.format_type {
        FormatType::Td3 => FormatType::Td3.line_width().saturating_sub(
            n.doc_type.chars().count() + 1 + n.issuing_country.chars().count(),
        ),
        FormatType::Td1 => FormatType::Td1.line_width(),
    };
    if name_len > name_max {
        errors.push(ValidationError::with_rule(
            "last_name",
            format!("name section has {name_len} characters, only {name_max} fit"),
            "MRZ-NAME",
        ));
    }

    for (field, value) in [
        ("last_name", &n.last_name),
        ("first_name", &n.first_name),
        ("document_number", &n.document_number),
        ("extra_info", &n.extra_info),
    ] {
        if let Some(bad) = value.chars().find(|c| !is_mrz_char(*c)) {
            errors.push(ValidationError::with_rule(
                field,
                format!("character '{bad}' is outside the MRZ alphabet A-Z 0-9 <"),
                "MRZ-CHARSET",
            ));
        }
    }

    errors
}

fn validate_country(code: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if code.chars().count() != 3 {
        errors.push(ValidationError::with_rule(
            field,
            format!("code '{code}' must be 3 characters (pad with <, e.g. D<<)"),
            "MRZ-COUNTRY",
        ));
    } else if !is_known_country_code(code) {
        errors.push(ValidationError::with_rule(
            field,
            format!("code '{code}' is not a known ICAO state or organization code"),
            "MRZ-COUNTRY",
        ));
    }
}

/// DDMMYY, six ASCII digits forming a real calendar date.
fn validate_date(date: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if date.len() != 6 || !date.bytes().all(|b| b.is_ascii_digit()) {
        errors.push(ValidationError::with_rule(
            field,
            format!("date '{date}' must be 6 digits (DDMMYY)"),
            "MRZ-DATE",
        ));
    } else if NaiveDate::parse_from_str(date, "%d%m%y").is_err() {
        errors.push(ValidationError::with_rule(
            field,
            format!("date '{date}' is not a valid calendar date"),
            "MRZ-DATE",
        ));
    }
}

//! TD3 and TD1 line composition.

use tracing::debug;

use super::check_digit::check_digit;
use super::error::MrzError;
use super::normalize::{EXTRA_INFO_MAX, normalize};
use super::types::{DocumentFields, FILLER, FormatType, MrzOptions, MrzOutput};
use super::validation::validate_fields;

/// Right-pad `s` with fillers to `width` characters, or cut it to `width`.
pub fn fit(s: &str, width: usize) -> String {
    let mut out: String = s.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat_n(FILLER, width - len));
    out
}

/// Check digits shared by both layouts.
struct FieldChecks {
    document_number: char,
    birth: char,
    expiry: char,
}

impl FieldChecks {
    fn of(n: &DocumentFields) -> Self {
        Self {
            document_number: check_digit(&n.document_number),
            birth: check_digit(&n.birth_date),
            expiry: check_digit(&n.expiry_date),
        }
    }
}

/// Lay out already-normalized fields.
///
/// Callers normally go through [`generate_mrz`]; this is exposed for front
/// ends that normalize themselves.
pub fn compose(n: &DocumentFields) -> MrzOutput {
    let checks = FieldChecks::of(n);
    let (lines, final_check_digit) = match n.format_type {
        FormatType::Td3 => compose_td3(n, &checks),
        FormatType::Td1 => compose_td1(n, &checks),
    };
    debug!(format = %n.format_type, final_check = %final_check_digit, "composed MRZ");
    MrzOutput {
        format: n.format_type,
        lines,
        final_check_digit,
    }
}

fn compose_td3(n: &DocumentFields, c: &FieldChecks) -> (Vec<String>, char) {
    let width = FormatType::Td3.line_width();

    let line1 = fit(
        &format!(
            "{}{FILLER}{}{}{FILLER}{FILLER}{}",
            n.doc_type, n.issuing_country, n.last_name, n.first_name
        ),
        width,
    );

    let optional = fit(&n.extra_info, EXTRA_INFO_MAX);
    let body = format!(
        "{}{}{}{}{}{}{}{}{}",
        n.document_number,
        c.document_number,
        n.nationality,
        n.birth_date,
        c.birth,
        n.sex,
        n.expiry_date,
        c.expiry,
        optional
    );
    // Over the body as concatenated, whatever its length. The digit follows
    // the body directly; an oversized body pushes it off the line.
    let final_check = check_digit(&body);
    let line2 = fit(&format!("{body}{final_check}"), width);

    (vec![line1, line2], final_check)
}

fn compose_td1(n: &DocumentFields, c: &FieldChecks) -> (Vec<String>, char) {
    let width = FormatType::Td1.line_width();

    let line1 = fit(
        &format!(
            "{}{FILLER}{}{}{}",
            n.doc_type, n.issuing_country, n.document_number, c.document_number
        ),
        width,
    );

    // Cut to 29 as well as padded, so the composite digit always lands at 30
    let provisional = fit(
        &format!(
            "{}{}{}{}{}{}{}",
            n.birth_date, c.birth, n.sex, n.expiry_date, c.expiry, n.nationality, n.extra_info
        ),
        width - 1,
    );
    // Composite digit spans line 1 and the first 29 characters of line 2.
    let final_check = check_digit(&format!("{line1}{provisional}"));
    let mut line2 = provisional;
    line2.push(final_check);

    let line3 = fit(
        &format!("{}{FILLER}{FILLER}{}", n.last_name, n.first_name),
        width,
    );

    (vec![line1, line2, line3], final_check)
}

/// Generate the MRZ for `fields` with permissive defaults.
///
/// Normalizes, then composes. Malformed content is padded or truncated
/// rather than rejected.
///
/// ```
/// use mrzkit::{DocumentFields, generate_mrz};
///
/// let mrz = generate_mrz(&DocumentFields::default()).unwrap();
/// assert_eq!(mrz.lines[0], "P<USAHULTON<<DAVID<NAKAMURA<<<<<<<<<<<<<<<<<");
/// assert_eq!(mrz.lines[1], "A099139827USA8303198M3301188534397504<<<<<0<");
/// ```
pub fn generate_mrz(fields: &DocumentFields) -> Result<MrzOutput, MrzError> {
    generate_mrz_with(fields, &MrzOptions::default())
}

/// Generate the MRZ for `fields` with explicit options.
///
/// With [`MrzOptions::strict`] the field set must pass
/// [`validate_fields`] first; all findings are returned together.
pub fn generate_mrz_with(
    fields: &DocumentFields,
    options: &MrzOptions,
) -> Result<MrzOutput, MrzError> {
    if options.strict {
        let errors = validate_fields(fields);
        if !errors.is_empty() {
            debug!(count = errors.len(), "strict validation rejected field set");
            return Err(MrzError::Validation(errors));
        }
    }
    Ok(compose(&normalize(fields)))
}

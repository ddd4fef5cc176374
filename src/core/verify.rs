//! Re-checking an existing MRZ block.

use std::ops::Range;

use super::check_digit::check_digit;
use super::error::ValidationError;
use super::types::{FormatType, MrzOutput};
use super::validation::is_mrz_char;

/// A check digit position: data range and the digit's index, on one line.
struct DigitSpan {
    name: &'static str,
    line: usize,
    data: Range<usize>,
    digit: usize,
}

const fn span(name: &'static str, line: usize, data: Range<usize>, digit: usize) -> DigitSpan {
    DigitSpan {
        name,
        line,
        data,
        digit,
    }
}

const TD3_SPANS: &[DigitSpan] = &[
    span("document_number", 1, 0..9, 9),
    span("birth_date", 1, 13..19, 19),
    span("expiry_date", 1, 21..27, 27),
];

const TD1_SPANS: &[DigitSpan] = &[
    span("document_number", 0, 5..14, 14),
    span("birth_date", 1, 0..6, 6),
    span("expiry_date", 1, 8..14, 14),
];

/// Verify line geometry, alphabet and every check digit of an MRZ block.
/// Returns all findings; an empty list means the block is consistent.
///
/// Field positions are those of the standard layouts, so blocks composed
/// from oversized fields report check digit mismatches.
pub fn verify_mrz<S: AsRef<str>>(format: FormatType, lines: &[S]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if lines.len() != format.line_count() {
        errors.push(ValidationError::with_rule(
            "lines",
            format!(
                "{format} has {} lines, got {}",
                format.line_count(),
                lines.len()
            ),
            "MRZ-GEOMETRY",
        ));
        return errors;
    }

    let rows: Vec<Vec<char>> = lines.iter().map(|l| l.as_ref().chars().collect()).collect();
    let mut geometry_ok = true;
    for (i, row) in rows.iter().enumerate() {
        let field = format!("line{}", i + 1);
        if row.len() != format.line_width() {
            geometry_ok = false;
            errors.push(ValidationError::with_rule(
                field.clone(),
                format!("expected {} characters, got {}", format.line_width(), row.len()),
                "MRZ-GEOMETRY",
            ));
        }
        if let Some(bad) = row.iter().find(|c| !is_mrz_char(**c)) {
            errors.push(ValidationError::with_rule(
                field,
                format!("character '{bad}' is outside the MRZ alphabet A-Z 0-9 <"),
                "MRZ-CHARSET",
            ));
        }
    }
    // Positions are meaningless on lines of the wrong width
    if !geometry_ok {
        return errors;
    }

    let spans = match format {
        FormatType::Td3 => TD3_SPANS,
        FormatType::Td1 => TD1_SPANS,
    };
    for span in spans {
        let row = &rows[span.line];
        let data: String = row[span.data.clone()].iter().collect();
        check_span(span.name, &data, row[span.digit], &mut errors);
    }

    let (composite, found) = match format {
        FormatType::Td3 => (rows[1][..42].iter().collect::<String>(), rows[1][42]),
        FormatType::Td1 => (
            rows[0].iter().chain(&rows[1][..29]).collect::<String>(),
            rows[1][29],
        ),
    };
    check_span("final", &composite, found, &mut errors);

    errors
}

/// [`verify_mrz`] over a generated block.
pub fn verify_output(output: &MrzOutput) -> Vec<ValidationError> {
    verify_mrz(output.format, &output.lines)
}

fn check_span(name: &str, data: &str, found: char, errors: &mut Vec<ValidationError>) {
    let expected = check_digit(data);
    if found != expected {
        errors.push(ValidationError::with_rule(
            name,
            format!("check digit is '{found}', expected '{expected}'"),
            "MRZ-CHECK-DIGIT",
        ));
    }
}

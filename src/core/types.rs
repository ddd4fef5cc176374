use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::MrzError;

/// The MRZ filler character, used for padding and as a null placeholder.
pub const FILLER: char = '<';

/// ICAO 9303 document layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FormatType {
    /// Passport booklet: two lines of 44 characters.
    Td3,
    /// Identity card: three lines of 30 characters.
    Td1,
}

impl FormatType {
    /// Fixed width of every line in this layout.
    pub fn line_width(self) -> usize {
        match self {
            FormatType::Td3 => 44,
            FormatType::Td1 => 30,
        }
    }

    /// Number of lines in this layout.
    pub fn line_count(self) -> usize {
        match self {
            FormatType::Td3 => 2,
            FormatType::Td1 => 3,
        }
    }

    /// Canonical code ("TD3" / "TD1").
    pub fn code(self) -> &'static str {
        match self {
            FormatType::Td3 => "TD3",
            FormatType::Td1 => "TD1",
        }
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FormatType {
    type Err = MrzError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TD3" => Ok(FormatType::Td3),
            "TD1" => Ok(FormatType::Td1),
            _ => Err(MrzError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for FormatType {
    type Error = MrzError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FormatType> for String {
    fn from(value: FormatType) -> Self {
        value.code().to_string()
    }
}

/// Raw identity-document fields as supplied by a caller.
///
/// Nothing here is checked against the destination field widths. Values
/// are normalized and then padded or truncated during composition; use
/// [`validate_fields`](super::validate_fields) or strict mode to reject
/// oversized input instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFields {
    /// Target layout.
    pub format_type: FormatType,
    /// Document type code (e.g. "P", "ID", "V").
    pub doc_type: String,
    /// Issuing state or organization (3-letter code).
    pub issuing_country: String,
    /// Nationality of the holder (3-letter code).
    pub nationality: String,
    /// Primary identifier (surname). Spaces become fillers.
    pub last_name: String,
    /// Secondary identifier (given names). Spaces become fillers.
    pub first_name: String,
    /// Document number, up to 9 characters in the standard layouts.
    pub document_number: String,
    /// Date of birth, DDMMYY.
    pub birth_date: String,
    /// Date of expiry, DDMMYY.
    pub expiry_date: String,
    /// "M", "F" or "<" (unspecified).
    #[serde(default)]
    pub sex: String,
    /// Optional data (personal number etc.), at most 14 characters are used.
    #[serde(default)]
    pub extra_info: String,
}

impl Default for DocumentFields {
    /// The reference passport; front ends use this as their "reset" state.
    fn default() -> Self {
        Self {
            format_type: FormatType::Td3,
            doc_type: "P".into(),
            issuing_country: "USA".into(),
            nationality: "USA".into(),
            last_name: "HULTON".into(),
            first_name: "DAVID NAKAMURA".into(),
            document_number: "A09913982".into(),
            birth_date: "190383".into(),
            expiry_date: "180133".into(),
            sex: "M".into(),
            extra_info: "534397504".into(),
        }
    }
}

/// A generated machine readable zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MrzOutput {
    /// Layout the lines were composed for.
    pub format: FormatType,
    /// Fixed-width lines, top to bottom.
    pub lines: Vec<String>,
    /// Final (composite) check digit. Also embedded in the last data line
    /// unless an oversized TD3 body pushed it past the cut.
    pub final_check_digit: char,
}

impl MrzOutput {
    /// Lines joined with `\n`.
    pub fn joined(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for MrzOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

/// Generation options.
///
/// Permissive by default: oversized or malformed field content is padded
/// or truncated, never rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MrzOptions {
    /// Reject field sets that fail [`validate_fields`](super::validate_fields).
    pub strict: bool,
}

impl MrzOptions {
    /// Strict validation before composition.
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parse_case_insensitive() {
        assert_eq!("td3".parse::<FormatType>().unwrap(), FormatType::Td3);
        assert_eq!(" TD1 ".parse::<FormatType>().unwrap(), FormatType::Td1);
    }

    #[test]
    fn format_parse_rejects_td2() {
        let err = "TD2".parse::<FormatType>().unwrap_err();
        assert!(matches!(err, MrzError::UnsupportedFormat(ref s) if s == "TD2"));
    }

    #[test]
    fn format_dimensions() {
        assert_eq!(FormatType::Td3.line_width(), 44);
        assert_eq!(FormatType::Td3.line_count(), 2);
        assert_eq!(FormatType::Td1.line_width(), 30);
        assert_eq!(FormatType::Td1.line_count(), 3);
    }

    #[test]
    fn default_fields_are_reference_passport() {
        let f = DocumentFields::default();
        assert_eq!(f.format_type, FormatType::Td3);
        assert_eq!(f.last_name, "HULTON");
        assert_eq!(f.document_number, "A09913982");
    }

    #[test]
    fn output_display_joins_lines() {
        let out = MrzOutput {
            format: FormatType::Td1,
            lines: vec!["A".into(), "B".into(), "C".into()],
            final_check_digit: '0',
        };
        assert_eq!(out.to_string(), "A\nB\nC");
    }
}

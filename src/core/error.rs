use std::fmt;

use thiserror::Error;

/// Errors that can occur during MRZ generation or processing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MrzError {
    /// The requested layout is neither TD3 nor TD1.
    #[error("unsupported MRZ format '{0}': expected TD3 or TD1")]
    UnsupportedFormat(String),

    /// Strict mode rejected the field set.
    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    /// Batch input could not be read as JSON.
    #[error("JSON error: {0}")]
    Json(String),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// One problem found in a field set or an existing MRZ block.
///
/// Strict generation and [`verify_mrz`](super::verify_mrz) both report
/// findings of this shape, so front ends print them the same way.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationError {
    /// Input field ("issuing_country") or block position ("line2", "final").
    pub field: String,
    pub message: String,
    /// `MRZ-*` rule that fired, e.g. "MRZ-DATE" or "MRZ-CHECK-DIGIT".
    pub rule: Option<String>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rule {
            Some(rule) => write!(f, "[{rule}] {}: {}", self.field, self.message),
            None => write!(f, "{}: {}", self.field, self.message),
        }
    }
}

impl ValidationError {
    /// Finding outside the `MRZ-*` rule set.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Finding tagged with the `MRZ-*` rule that produced it.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            rule: Some(rule.into()),
            ..Self::new(field, message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_rule() {
        let e = ValidationError::with_rule("sex", "must be M, F, X or <", "MRZ-SEX");
        assert_eq!(e.to_string(), "[MRZ-SEX] sex: must be M, F, X or <");
    }

    #[test]
    fn display_without_rule() {
        let e = ValidationError::new("line1", "wrong width");
        assert_eq!(e.to_string(), "line1: wrong width");
    }

    #[test]
    fn validation_error_lists_all_findings() {
        let err = MrzError::Validation(vec![
            ValidationError::with_rule("sex", "bad", "MRZ-SEX"),
            ValidationError::with_rule("birth_date", "bad", "MRZ-DATE"),
        ]);
        assert_eq!(
            err.to_string(),
            "validation failed: [MRZ-SEX] sex: bad; [MRZ-DATE] birth_date: bad"
        );
    }
}

//! Batch conversion of JSON field sets into MRZ blocks.
//!
//! Input is a JSON array of [`DocumentFields`] objects. A record with an
//! unsupported format selector or a strict-mode finding fails on its own;
//! the other records are still converted.
//!
//! # Example
//!
//! ```
//! use mrzkit::batch::*;
//!
//! let input = r#"[
//!   {"format_type": "TD3", "doc_type": "P", "issuing_country": "USA",
//!    "nationality": "USA", "last_name": "HULTON", "first_name": "DAVID",
//!    "document_number": "A09913982", "birth_date": "190383",
//!    "expiry_date": "180133", "sex": "M"},
//!   {"format_type": "TD2"}
//! ]"#;
//!
//! let records = convert_json(input, &mrzkit::MrzOptions::default()).unwrap();
//! assert!(records[0].result.is_ok());
//! assert!(records[1].result.is_err());
//! ```

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::{DocumentFields, MrzError, MrzOptions, MrzOutput, generate_mrz_with};

/// Outcome for one input record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRecord {
    /// Zero-based position in the input array.
    pub index: usize,
    /// Generated block, or the error message for this record.
    #[serde(with = "record_result")]
    pub result: Result<MrzOutput, String>,
}

/// Convert every record of a JSON array.
///
/// Fails as a whole only when the document is not a JSON array.
pub fn convert_json(input: &str, options: &MrzOptions) -> Result<Vec<BatchRecord>, MrzError> {
    let values: Vec<Value> =
        serde_json::from_str(input).map_err(|e| MrzError::Json(e.to_string()))?;
    debug!(records = values.len(), "converting batch");

    let records = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let result = serde_json::from_value::<DocumentFields>(value)
                .map_err(|e| e.to_string())
                .and_then(|fields| {
                    generate_mrz_with(&fields, options).map_err(|e| e.to_string())
                });
            if let Err(e) = &result {
                warn!(index, error = %e, "batch record failed");
            }
            BatchRecord { index, result }
        })
        .collect();
    Ok(records)
}

/// Render records as newline-delimited JSON, one object per record.
pub fn to_json_lines(records: &[BatchRecord]) -> Result<String, MrzError> {
    let mut out = String::new();
    for record in records {
        let line = serde_json::to_string(record).map_err(|e| MrzError::Json(e.to_string()))?;
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

/// `{"ok": {...}}` / `{"error": "..."}`
mod record_result {
    use serde::Serializer;
    use serde::ser::SerializeMap;

    use crate::core::MrzOutput;

    pub fn serialize<S: Serializer>(
        value: &Result<MrzOutput, String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match value {
            Ok(output) => map.serialize_entry("ok", output)?,
            Err(message) => map.serialize_entry("error", message)?,
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn td1_record() -> serde_json::Value {
        serde_json::json!({
            "format_type": "td1",
            "doc_type": "ID",
            "issuing_country": "DEU",
            "nationality": "DEU",
            "last_name": "MUSTER",
            "first_name": "MAX",
            "document_number": "L3H8HG5CY",
            "birth_date": "261293",
            "expiry_date": "120832",
            "sex": "<",
            "extra_info": "2108"
        })
    }

    #[test]
    fn converts_records_in_order() {
        let defaults = serde_json::to_value(DocumentFields::default()).unwrap();
        let input = serde_json::to_string(&vec![defaults, td1_record()]).unwrap();
        let records = convert_json(&input, &MrzOptions::default()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].index, 0);
        assert_eq!(records[1].index, 1);
        let td1 = records[1].result.as_ref().unwrap();
        assert_eq!(td1.lines[1], "9312269<3208128DEU2108<<<<<<<0");
    }

    #[test]
    fn unsupported_format_isolated_to_record() {
        let mut bad = td1_record();
        bad["format_type"] = "TD2".into();
        let input = serde_json::to_string(&vec![bad, td1_record()]).unwrap();
        let records = convert_json(&input, &MrzOptions::default()).unwrap();
        let err = records[0].result.as_ref().unwrap_err();
        assert!(err.contains("unsupported MRZ format 'TD2'"), "{err}");
        assert!(records[1].result.is_ok());
    }

    #[test]
    fn strict_findings_isolated_to_record() {
        let mut bad = td1_record();
        bad["birth_date"] = "310293".into();
        let input = serde_json::to_string(&vec![bad]).unwrap();
        let records = convert_json(&input, &MrzOptions::strict()).unwrap();
        assert!(records[0].result.as_ref().unwrap_err().contains("MRZ-DATE"));
    }

    #[test]
    fn optional_fields_may_be_omitted() {
        let mut record = td1_record();
        record.as_object_mut().unwrap().remove("sex");
        record.as_object_mut().unwrap().remove("extra_info");
        let input = serde_json::to_string(&vec![record]).unwrap();
        let records = convert_json(&input, &MrzOptions::default()).unwrap();
        let out = records[0].result.as_ref().unwrap();
        assert_eq!(&out.lines[1][7..8], "<");
    }

    #[test]
    fn malformed_document_fails_whole_batch() {
        let err = convert_json("{not json", &MrzOptions::default()).unwrap_err();
        assert!(matches!(err, MrzError::Json(_)));
        let err = convert_json("{}", &MrzOptions::default()).unwrap_err();
        assert!(matches!(err, MrzError::Json(_)));
    }

    #[test]
    fn json_lines_shape() {
        let input = serde_json::to_string(&vec![td1_record()]).unwrap();
        let records = convert_json(&input, &MrzOptions::default()).unwrap();
        let ndjson = to_json_lines(&records).unwrap();
        assert_eq!(ndjson.lines().count(), 1);
        let parsed: serde_json::Value = serde_json::from_str(ndjson.trim_end()).unwrap();
        assert_eq!(parsed["index"], 0);
        assert_eq!(parsed["result"]["ok"]["format"], "TD1");
        assert_eq!(parsed["result"]["ok"]["final_check_digit"], "0");
        assert_eq!(parsed["result"]["ok"]["lines"][2], "MUSTER<<MAX<<<<<<<<<<<<<<<<<<<");
    }
}

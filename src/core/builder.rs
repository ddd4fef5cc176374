use super::error::MrzError;
use super::types::{DocumentFields, FormatType};

/// Builder for document field sets.
///
/// Starts from empty fields; anything not set stays empty and is filled
/// with `<` at composition time.
///
/// ```
/// use mrzkit::*;
///
/// let fields = DocumentFieldsBuilder::new()
///     .format_code("td1")
///     .doc_type("ID")
///     .issuing_country("DEU")
///     .nationality("DEU")
///     .name("Muster", "Max")
///     .document_number("L3H8HG5CY")
///     .birth_date("261293")
///     .expiry_date("120832")
///     .extra_info("2108")
///     .build()
///     .unwrap();
///
/// let mrz = generate_mrz(&fields).unwrap();
/// assert_eq!(mrz.lines.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DocumentFieldsBuilder {
    fields: DocumentFields,
    format_code: Option<String>,
}

impl Default for DocumentFieldsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFieldsBuilder {
    pub fn new() -> Self {
        Self {
            fields: DocumentFields {
                format_type: FormatType::Td3,
                doc_type: String::new(),
                issuing_country: String::new(),
                nationality: String::new(),
                last_name: String::new(),
                first_name: String::new(),
                document_number: String::new(),
                birth_date: String::new(),
                expiry_date: String::new(),
                sex: String::new(),
                extra_info: String::new(),
            },
            format_code: None,
        }
    }

    /// Continue from an existing field set (e.g. the defaults).
    pub fn from_fields(fields: DocumentFields) -> Self {
        Self {
            fields,
            format_code: None,
        }
    }

    pub fn format(mut self, format: FormatType) -> Self {
        self.fields.format_type = format;
        self.format_code = None;
        self
    }

    /// Textual layout selector ("TD3", "td1"); checked by [`build`](Self::build).
    pub fn format_code(mut self, code: impl Into<String>) -> Self {
        self.format_code = Some(code.into());
        self
    }

    pub fn doc_type(mut self, code: impl Into<String>) -> Self {
        self.fields.doc_type = code.into();
        self
    }

    pub fn issuing_country(mut self, code: impl Into<String>) -> Self {
        self.fields.issuing_country = code.into();
        self
    }

    pub fn nationality(mut self, code: impl Into<String>) -> Self {
        self.fields.nationality = code.into();
        self
    }

    /// Surname and given names.
    pub fn name(mut self, last: impl Into<String>, first: impl Into<String>) -> Self {
        self.fields.last_name = last.into();
        self.fields.first_name = first.into();
        self
    }

    pub fn document_number(mut self, number: impl Into<String>) -> Self {
        self.fields.document_number = number.into();
        self
    }

    /// DDMMYY.
    pub fn birth_date(mut self, date: impl Into<String>) -> Self {
        self.fields.birth_date = date.into();
        self
    }

    /// DDMMYY.
    pub fn expiry_date(mut self, date: impl Into<String>) -> Self {
        self.fields.expiry_date = date.into();
        self
    }

    pub fn sex(mut self, sex: impl Into<String>) -> Self {
        self.fields.sex = sex.into();
        self
    }

    pub fn extra_info(mut self, info: impl Into<String>) -> Self {
        self.fields.extra_info = info.into();
        self
    }

    /// Finish the field set.
    ///
    /// Fails only when a textual format selector other than TD3/TD1 was given.
    pub fn build(self) -> Result<DocumentFields, MrzError> {
        let mut fields = self.fields;
        if let Some(code) = self.format_code {
            fields.format_type = code.parse()?;
        }
        Ok(fields)
    }
}

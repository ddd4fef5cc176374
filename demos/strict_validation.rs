use mrzkit::*;

fn main() {
    // Two-letter code and unpadded German state code: permissive mode
    // composes them anyway
    let fields = DocumentFields {
        format_type: FormatType::Td1,
        doc_type: "ID".into(),
        issuing_country: "D".into(),
        nationality: "DEU".into(),
        last_name: "Mustermann".into(),
        first_name: "Erika".into(),
        document_number: "L01X00T47".into(),
        birth_date: "120864".into(),
        expiry_date: "310231".into(),
        sex: "f".into(),
        extra_info: String::new(),
    };

    let mrz = generate_mrz(&fields).expect("permissive generation");
    println!("Permissive:\n{mrz}\n");

    println!("Verification of the permissive block:");
    for e in verify_output(&mrz) {
        println!("  {e}");
    }

    // Strict mode reports everything that keeps fields off their positions
    match generate_mrz_with(&fields, &MrzOptions::strict()) {
        Ok(mrz) => println!("Strict:\n{mrz}"),
        Err(MrzError::Validation(errors)) => {
            println!("\nStrict validation: {} errors", errors.len());
            for e in &errors {
                println!("  {e}");
            }
        }
        Err(e) => println!("Strict: {e}"),
    }

    // Fixed up
    let fixed = DocumentFields {
        doc_type: "I".into(),
        issuing_country: "D<<".into(),
        expiry_date: "280231".into(),
        ..fields
    };
    let mrz = generate_mrz_with(&fixed, &MrzOptions::strict()).expect("fields are aligned");
    println!("\nStrict after fixes:\n{mrz}");
}

use mrzkit::*;

fn main() {
    // Passport booklet, two lines of 44
    let passport = DocumentFieldsBuilder::new()
        .format(FormatType::Td3)
        .doc_type("P")
        .issuing_country("UTO")
        .nationality("UTO")
        .name("Eriksson", "Anna Maria")
        .document_number("L898902C3")
        .birth_date("120874")
        .expiry_date("160412")
        .sex("F")
        .extra_info("ZE184226B")
        .build()
        .expect("format is supported");

    let mrz = generate_mrz(&passport).expect("permissive generation");
    println!("{mrz}");
    println!("final check digit: {}", mrz.final_check_digit);
    println!();

    // ID card, three lines of 30, same holder
    let card = DocumentFieldsBuilder::from_fields(passport)
        .format(FormatType::Td1)
        .doc_type("I")
        .document_number("D23145890")
        .expiry_date("150812")
        .extra_info("")
        .build()
        .expect("format is supported");

    let mrz = generate_mrz(&card).expect("permissive generation");
    println!("{mrz}");

    let findings = verify_output(&mrz);
    println!("verification: {} findings", findings.len());
    println!("check digit of 'D23145890': {}", check_digit("D23145890"));
}

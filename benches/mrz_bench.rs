use criterion::{Criterion, black_box, criterion_group, criterion_main};

use mrzkit::*;

fn td1_fields() -> DocumentFields {
    DocumentFieldsBuilder::new()
        .format(FormatType::Td1)
        .doc_type("I")
        .issuing_country("UTO")
        .nationality("UTO")
        .name("Eriksson", "Anna Maria")
        .document_number("D23145890")
        .birth_date("120774")
        .expiry_date("150812")
        .sex("F")
        .build()
        .unwrap()
}

fn build_1000_records() -> String {
    let records: Vec<DocumentFields> = (0..1000)
        .map(|i| DocumentFields {
            document_number: format!("A{i:08}"),
            ..Default::default()
        })
        .collect();
    serde_json::to_string(&records).unwrap()
}

fn bench_check_digit(c: &mut Criterion) {
    let line = "A099139827USA8303198M3301188534397504<<<<<<";
    c.bench_function("check_digit_43", |b| {
        b.iter(|| black_box(check_digit(black_box(line))));
    });
}

fn bench_generate_td3(c: &mut Criterion) {
    let fields = DocumentFields::default();
    c.bench_function("generate_td3", |b| {
        b.iter(|| black_box(generate_mrz(black_box(&fields))));
    });
}

fn bench_generate_td1(c: &mut Criterion) {
    let fields = td1_fields();
    c.bench_function("generate_td1", |b| {
        b.iter(|| black_box(generate_mrz(black_box(&fields))));
    });
}

fn bench_generate_strict(c: &mut Criterion) {
    let fields = DocumentFields::default();
    let options = MrzOptions::strict();
    c.bench_function("generate_td3_strict", |b| {
        b.iter(|| black_box(generate_mrz_with(black_box(&fields), &options)));
    });
}

fn bench_verify(c: &mut Criterion) {
    let mrz = generate_mrz(&td1_fields()).unwrap();
    c.bench_function("verify_td1", |b| {
        b.iter(|| black_box(verify_output(black_box(&mrz))));
    });
}

fn bench_batch_1000(c: &mut Criterion) {
    let input = build_1000_records();
    let options = MrzOptions::default();
    c.bench_function("batch_1000_records", |b| {
        b.iter(|| black_box(mrzkit::batch::convert_json(black_box(&input), &options)));
    });
}

criterion_group!(
    benches,
    bench_check_digit,
    bench_generate_td3,
    bench_generate_td1,
    bench_generate_strict,
    bench_verify,
    bench_batch_1000,
);
criterion_main!(benches);

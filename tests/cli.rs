#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("mrz").unwrap()
}

#[test]
fn generate_defaults_prints_reference_passport() {
    cmd()
        .arg("generate")
        .assert()
        .success()
        .stdout(
            "P<USAHULTON<<DAVID<NAKAMURA<<<<<<<<<<<<<<<<<\n\
             A099139827USA8303198M3301188534397504<<<<<0<\n",
        );
}

#[test]
fn generate_td1_json() {
    cmd()
        .args([
            "--json",
            "generate",
            "--format",
            "td1",
            "--doc-type",
            "I",
            "--country",
            "UTO",
            "--nationality",
            "UTO",
            "--last-name",
            "Eriksson",
            "--first-name",
            "Anna Maria",
            "--document-number",
            "D23145890",
            "--birth",
            "120774",
            "--expiry",
            "150812",
            "--sex",
            "F",
            "--extra-info",
            "",
        ])
        .assert()
        .success()
        .stdout(contains("\"format\": \"TD1\""))
        .stdout(contains("7407125F1208157UTO<<<<<<<<<<<7"))
        .stdout(contains("\"final_check_digit\": \"7\""));
}

#[test]
fn generate_unsupported_format_fails() {
    cmd()
        .args(["generate", "--format", "TD2"])
        .assert()
        .failure()
        .stderr(contains("unsupported MRZ format 'TD2'"));
}

#[test]
fn generate_strict_reports_all_findings() {
    cmd()
        .args(["--strict", "generate", "--country", "D", "--birth", "310299"])
        .assert()
        .failure()
        .stderr(contains("MRZ-COUNTRY"))
        .stderr(contains("MRZ-DATE"));
}

#[test]
fn check_digit_command() {
    cmd()
        .args(["check-digit", "L898902C3"])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn verify_accepts_generated_block() {
    cmd()
        .args([
            "verify",
            "--format",
            "TD3",
            "P<USAHULTON<<DAVID<NAKAMURA<<<<<<<<<<<<<<<<<",
            "A099139827USA8303198M3301188534397504<<<<<0<",
        ])
        .assert()
        .success()
        .stdout(contains("MRZ valid"));
}

#[test]
fn verify_rejects_corrupted_block() {
    cmd()
        .args([
            "verify",
            "P<USAHULTON<<DAVID<NAKAMURA<<<<<<<<<<<<<<<<<",
            "A099139827USA8303198M3301188534397504<<<<<9<",
        ])
        .assert()
        .failure()
        .stdout(contains("[MRZ-CHECK-DIGIT] final"));
}

#[test]
fn batch_from_stdin() {
    let input = r#"[
        {"format_type": "TD3", "doc_type": "P", "issuing_country": "USA",
         "nationality": "USA", "last_name": "HULTON", "first_name": "DAVID NAKAMURA",
         "document_number": "A09913982", "birth_date": "190383",
         "expiry_date": "180133", "sex": "M", "extra_info": "534397504"}
    ]"#;
    cmd()
        .args(["batch", "-"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("A099139827USA8303198M3301188534397504<<<<<0<"))
        .stdout(contains("\"index\":0"));
}

#[test]
fn batch_with_bad_record_exits_nonzero() {
    let input = r#"[{"format_type": "TD2"}]"#;
    cmd()
        .args(["batch", "-"])
        .write_stdin(input)
        .assert()
        .failure()
        .stdout(contains("\"error\""));
}

#[test]
fn batch_missing_file() {
    cmd()
        .args(["batch", "/nonexistent/fields.json"])
        .assert()
        .failure()
        .stderr(contains("reading /nonexistent/fields.json"));
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("generate").and(contains("check-digit")));
}

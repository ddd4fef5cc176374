use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use mrzkit::batch::{convert_json, to_json_lines};
use mrzkit::{DocumentFields, FormatType, MrzOptions, check_digit, generate_mrz_with, verify_mrz};

#[derive(Parser, Debug)]
#[command(name = "mrz", version, about = "ICAO 9303 machine readable zone generator")]
struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[arg(
        long,
        global = true,
        help = "Reject fields that do not fit the standard layout instead of truncating"
    )]
    strict: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate an MRZ block from field values
    Generate(FieldArgs),
    /// Print the 7-3-1 check digit of TEXT
    CheckDigit { text: String },
    /// Verify widths, alphabet and check digits of existing MRZ lines
    Verify {
        #[arg(long, default_value = "TD3")]
        format: String,
        #[arg(required = true)]
        lines: Vec<String>,
    },
    /// Convert a JSON array of field sets (FILE or - for stdin) to NDJSON
    Batch { input: PathBuf },
}

/// Defaults are the reference passport, so every flag is optional.
#[derive(Args, Debug)]
struct FieldArgs {
    #[arg(long, default_value = "TD3")]
    format: String,
    #[arg(long, default_value = "P")]
    doc_type: String,
    #[arg(long, default_value = "USA")]
    country: String,
    #[arg(long, default_value = "USA")]
    nationality: String,
    #[arg(long, default_value = "HULTON")]
    last_name: String,
    #[arg(long, default_value = "DAVID NAKAMURA")]
    first_name: String,
    #[arg(long, default_value = "A09913982")]
    document_number: String,
    #[arg(long, default_value = "190383", help = "Date of birth, DDMMYY")]
    birth: String,
    #[arg(long, default_value = "180133", help = "Date of expiry, DDMMYY")]
    expiry: String,
    #[arg(long, default_value = "M")]
    sex: String,
    #[arg(long, default_value = "534397504")]
    extra_info: String,
}

impl FieldArgs {
    fn into_fields(self) -> Result<DocumentFields> {
        Ok(DocumentFields {
            format_type: self.format.parse()?,
            doc_type: self.doc_type,
            issuing_country: self.country,
            nationality: self.nationality,
            last_name: self.last_name,
            first_name: self.first_name,
            document_number: self.document_number,
            birth_date: self.birth,
            expiry_date: self.expiry,
            sex: self.sex,
            extra_info: self.extra_info,
        })
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let options = MrzOptions { strict: cli.strict };
    match cli.command {
        Commands::Generate(args) => {
            let fields = args.into_fields()?;
            let mrz = generate_mrz_with(&fields, &options)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&mrz)?);
            } else {
                println!("{mrz}");
            }
        }
        Commands::CheckDigit { text } => {
            println!("{}", check_digit(&text));
        }
        Commands::Verify { format, lines } => {
            let format: FormatType = format.parse()?;
            let findings = verify_mrz(format, &lines);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&findings)?);
            } else if findings.is_empty() {
                println!("MRZ valid");
            } else {
                for finding in &findings {
                    println!("{finding}");
                }
            }
            if !findings.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Batch { input } => {
            let text = read_input(&input)?;
            let records = convert_json(&text, &options)?;
            print!("{}", to_json_lines(&records)?);
            if records.iter().any(|r| r.result.is_err()) {
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

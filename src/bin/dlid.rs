use std::{fmt::Write as _, fs, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dlid_barcodes::{
    aamva::reference::{CodeTable, EYE_COLORS, HAIR_COLORS, JURISDICTIONS},
    encode, to_preview, AamvaRecord, ValidationOutcome, Validator,
};
use log::info;

/// AAMVA driver license / ID card record toolkit.
#[derive(Parser, Debug)]
#[command(name = "dlid", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a JSON record and list its errors.
    Validate { file: PathBuf },

    /// Print the review summary of a valid record.
    Preview { file: PathBuf },

    /// Encode a valid record into the barcode payload.
    Encode {
        file: PathBuf,

        /// Also check every data element against its format rule.
        #[arg(long)]
        strict: bool,

        /// Print control characters as is.
        #[arg(long)]
        raw: bool,

        /// Write the payload to this file instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// List reference codes.
    Codes { table: Table },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Table {
    Jurisdictions,
    EyeColors,
    HairColors,
}

impl Table {
    fn codes(self) -> &'static CodeTable {
        match self {
            Self::Jurisdictions => &*JURISDICTIONS,
            Self::EyeColors => &*EYE_COLORS,
            Self::HairColors => &*HAIR_COLORS,
        }
    }
}

fn load(path: &PathBuf) -> Result<AamvaRecord> {
    let content =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("invalid record {}", path.display()))
}

fn report(outcome: &ValidationOutcome) {
    for error in &outcome.errors {
        eprintln!("{}: {}", error.field, error.message);
    }
}

/// Makes separators and terminators visible.
fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            c if c.is_control() => {
                let _ = write!(result, "\\x{:02X}", c as u32);
            }
            c => result.push(c),
        }
    }
    result
}

fn run(cli: Cli) -> Result<ExitCode> {
    let validator = Validator::new();

    match cli.command {
        Command::Validate { file } => {
            let outcome = validator.validate_record(&load(&file)?);
            if outcome.is_valid {
                println!("valid");
                Ok(ExitCode::SUCCESS)
            } else {
                report(&outcome);
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Preview { file } => {
            let record = load(&file)?;
            let outcome = validator.validate_record(&record);
            if !outcome.is_valid {
                report(&outcome);
                return Ok(ExitCode::FAILURE);
            }

            print!("{}", to_preview(&record));
            Ok(ExitCode::SUCCESS)
        }
        Command::Encode {
            file,
            strict,
            raw,
            output,
        } => {
            let record = load(&file)?;
            let mut outcome = validator.validate_record(&record);
            if strict && outcome.is_valid {
                outcome = validator.check_elements(&record);
            }
            if !outcome.is_valid {
                report(&outcome);
                return Ok(ExitCode::FAILURE);
            }

            let text = encode(&record)?;
            match output {
                Some(path) => {
                    fs::write(&path, &text)
                        .with_context(|| format!("cannot write {}", path.display()))?;
                    info!("wrote {} characters to {}", text.len(), path.display());
                }
                None if raw => print!("{text}"),
                None => println!("{}", escape(&text)),
            }

            Ok(ExitCode::SUCCESS)
        }
        Command::Codes { table } => {
            for entry in table.codes().iter() {
                println!("{}\t{}", entry.code, entry.name);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    run(Cli::parse())
}

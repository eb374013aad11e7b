//! Command-line interface for mcqtab
//! Converts a pasted spreadsheet block (file or stdin) into escaped
//! records and prints them in a round-trip-friendly format.
//!
//! Usage:
//!   mcqtab [path] [--format tsv|tsv-headers|json] [--copy]  - Convert and print records
//!   mcqtab --preview [path]                                 - Split only, print raw rows

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use mcqtab::mcq::clipboard;
use mcqtab::mcq::formats::{self, HeaderMode};
use mcqtab::mcq::record::{McqRecord, FIELD_COUNT};
use mcqtab::mcq::rows::{self, RawRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Tab-delimited data rows only
    Tsv,
    /// Tab-delimited with the header row prepended
    TsvHeaders,
    /// Pretty-printed JSON records
    Json,
}

#[derive(Parser)]
#[command(name = "mcqtab")]
#[command(about = "Convert pasted MCQ spreadsheet rows into escaped records")]
struct Args {
    /// Path to the pasted block; reads stdin when omitted
    path: Option<PathBuf>,

    /// Stop after row splitting and print the unescaped rows
    #[arg(long)]
    preview: bool,

    /// Output format for converted records
    #[arg(long, short, value_enum, default_value_t = OutputFormat::TsvHeaders)]
    format: OutputFormat,

    /// Also place the output on the system clipboard
    #[arg(long)]
    copy: bool,
}

fn main() {
    let args = Args::parse();

    let input = read_input(args.path.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error reading input: {}", e);
        std::process::exit(1);
    });

    let rows = rows::split_rows(&input).unwrap_or_else(|| {
        eprintln!("Error: input is empty");
        std::process::exit(1);
    });

    report_invalid_rows(&rows);

    let output = if args.preview {
        formats::rows_to_tsv(&rows)
    } else {
        let records = McqRecord::from_rows(&rows);
        match args.format {
            OutputFormat::Tsv => formats::records_to_tsv(&records, HeaderMode::Omit),
            OutputFormat::TsvHeaders => formats::records_to_tsv(&records, HeaderMode::Prepend),
            OutputFormat::Json => serde_json::to_string_pretty(&records).unwrap_or_else(|e| {
                eprintln!("Error formatting records: {}", e);
                std::process::exit(1);
            }),
        }
    };

    println!("{}", output);

    // Fire-and-forget: a clipboard failure never fails the conversion
    if args.copy {
        if let Err(e) = clipboard::set_text(&output) {
            eprintln!("Warning: clipboard write failed: {}", e);
        }
    }
}

fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Warn on stderr about rows whose arity doesn't match the schema.
/// Advisory only; conversion proceeds with positional defaulting.
fn report_invalid_rows(rows: &[RawRow]) {
    for (i, row) in rows.iter().enumerate() {
        if !rows::is_valid_row(row, FIELD_COUNT) {
            eprintln!(
                "warning: row {} has {} cells, expected {}",
                i + 1,
                row.len(),
                FIELD_COUNT
            );
        }
    }
}

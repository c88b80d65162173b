use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bankparse_core::{ExtractedPage, LogObserver, Transaction};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "bankparse", version, about = "Bank statement transaction extraction")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract transactions from an extracted-pages JSON file or plain text
    Parse {
        /// Input file: pages JSON, or plain text with --text
        #[arg(long)]
        input: PathBuf,

        /// Treat the input as plain text (one page of lines)
        #[arg(long)]
        text: bool,

        /// Bank profile key; auto-detected from the text when omitted
        #[arg(long)]
        bank: Option<String>,

        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Print the detected bank profile key for a document
    Detect {
        #[arg(long)]
        input: PathBuf,

        #[arg(long)]
        text: bool,
    },

    /// List the known bank profile keys
    Banks,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Json,
    Csv,
}

/// Wire format produced by the text-extraction step.
#[derive(Debug, Deserialize)]
struct PagesFile {
    pages: Vec<ExtractedPage>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Parse { input, text, bank, format } => {
            let pages = load_pages(&input, text)?;
            let key = match bank {
                Some(key) => key,
                None => bankparse_profiles::detect(&joined_text(&pages))?.to_string(),
            };
            log::info!("using bank profile '{key}'");

            let profile = bankparse_profiles::build(&key)?;
            let txs = bankparse_core::run_with(&profile, &pages, &LogObserver)?;
            emit(&txs, format)?;
        }

        Command::Detect { input, text } => {
            let pages = load_pages(&input, text)?;
            println!("{}", bankparse_profiles::detect(&joined_text(&pages))?);
        }

        Command::Banks => {
            for key in bankparse_profiles::keys() {
                println!("{key}");
            }
        }
    }

    Ok(())
}

fn load_pages(path: &Path, plain_text: bool) -> Result<Vec<ExtractedPage>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    if plain_text {
        let page = ExtractedPage {
            lines: raw.lines().map(str::to_string).collect(),
            ..Default::default()
        };
        return Ok(vec![page]);
    }
    let parsed: PagesFile = serde_json::from_str(&raw)
        .with_context(|| format!("parsing pages JSON from {}", path.display()))?;
    Ok(parsed.pages)
}

fn joined_text(pages: &[ExtractedPage]) -> String {
    pages.iter().flat_map(|p| p.lines.iter().map(String::as_str)).collect::<Vec<_>>().join("\n")
}

fn emit(txs: &[Transaction], format: OutputFormat) -> Result<()> {
    let stdout = std::io::stdout();
    match format {
        OutputFormat::Json => {
            let mut out = stdout.lock();
            serde_json::to_writer_pretty(&mut out, txs)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(stdout.lock());
            for tx in txs {
                writer.serialize(tx)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

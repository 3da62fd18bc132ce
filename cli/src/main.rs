//! lipi CLI - Bengali glyph repair and voter record extraction

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use lipi::{detect, ExtractMode, ExtractOptions, Extractor, GlyphRepair};

#[derive(Parser)]
#[command(name = "lipi")]
#[command(author = "sridasgati")]
#[command(version)]
#[command(about = "Repair broken Bengali text and extract voter records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Repair corrupted text and print the result
    Repair {
        /// Input file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Extract voter records and emit a JSON array
    Extract {
        /// Input file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Extraction strategy
        #[arg(long, value_enum, default_value = "auto")]
        mode: Mode,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Report artifact glyph occurrences in the input
    Scan {
        /// Input file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Try JSON, fall through to labeled blocks
    Auto,
    /// JSON object or array only
    Json,
    /// Labeled text blocks split on blank lines
    Labeled,
    /// Single combined pattern over OCR output
    Ocr,
}

impl From<Mode> for ExtractMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Auto => ExtractMode::Auto,
            Mode::Json => ExtractMode::Json,
            Mode::Labeled => ExtractMode::LabeledBlocks,
            Mode::Ocr => ExtractMode::OcrPattern,
        }
    }
}

fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn run(cli: Cli) -> lipi::Result<()> {
    match cli.command {
        Commands::Repair { input } => {
            let text = read_input(input.as_ref())?;
            let repair = GlyphRepair::new();
            let mut stdout = io::stdout().lock();
            for line in text.lines() {
                writeln!(stdout, "{}", repair.repair(line))?;
            }
        }

        Commands::Extract {
            input,
            mode,
            pretty,
            output,
        } => {
            let text = read_input(input.as_ref())?;
            log::debug!("read {} bytes of input", text.len());
            let extractor = Extractor::new(ExtractOptions::new().with_mode(mode.into()));
            let records = extractor.extract(&text);

            if records.is_empty() {
                eprintln!(
                    "{}",
                    "no records found — check the input format and try again".yellow()
                );
            } else {
                eprintln!("{} {} records", "extracted".green().bold(), records.len());
            }

            let json = if pretty {
                serde_json::to_string_pretty(&records)?
            } else {
                serde_json::to_string(&records)?
            };
            match output {
                Some(path) => fs::write(path, json)?,
                None => println!("{json}"),
            }
        }

        Commands::Scan { input } => {
            let text = read_input(input.as_ref())?;
            let report = detect::scan(&text);
            if report.is_clean() {
                println!("{}", "no artifact glyphs found".green());
            } else {
                println!(
                    "{} {} artifact occurrences",
                    "found".red().bold(),
                    report.total
                );
                for (artifact, count) in &report.counts {
                    println!("  {artifact} (U+{:04X}): {count}", *artifact as u32);
                }
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

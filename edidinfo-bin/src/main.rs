//! Command-line interface for edidinfo

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use edidinfo::{DecodeReport, EdidRecord, ReportConfig};

#[derive(Parser)]
#[command(name = "edidinfo")]
#[command(version = edidinfo::VERSION)]
#[command(about = "Decode EDID blocks into readable display information", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output verbosity
    #[arg(short, long, value_enum, default_value_t = Verbosity::Normal)]
    verbosity: Verbosity,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode and print one or more EDID files (hex text or raw binary)
    Show {
        /// EDID files to decode
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Print a hex dump before the report
        #[arg(long)]
        dump: bool,
    },

    /// Check header and checksum; exits non-zero on a bad checksum
    Check {
        /// EDID file to check
        file: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Verbosity {
    Minimal,
    Normal,
    Detailed,
    Debug,
}

impl Verbosity {
    fn log_filter(self) -> log::LevelFilter {
        match self {
            Verbosity::Minimal => log::LevelFilter::Error,
            Verbosity::Normal => log::LevelFilter::Warn,
            Verbosity::Detailed => log::LevelFilter::Debug,
            Verbosity::Debug => log::LevelFilter::Trace,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_filter())
        .parse_default_env()
        .init();

    match &cli.command {
        Commands::Show { files, format, dump } => {
            let blobs = files
                .iter()
                .map(|path| {
                    edidinfo::input::load_edid_file(path)
                        .with_context(|| format!("Unable to read file {}", path.display()))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;

            let config = if *dump || cli.verbosity == Verbosity::Detailed {
                ReportConfig::detailed()
            } else {
                ReportConfig::default()
            };

            for ((path, bytes), result) in files.iter().zip(&blobs).zip(decode_all(&blobs)) {
                let record =
                    result.with_context(|| format!("Unable to parse EDID {}", path.display()))?;
                match format {
                    OutputFormat::Text => {
                        if files.len() > 1 {
                            println!("==> {} <==", path.display());
                        }
                        let text = edidinfo::render_text(&record, Some(bytes.as_slice()), &config);
                        print!("{}", text);
                        println!();
                    }
                    OutputFormat::Json => {
                        let report = DecodeReport::new(path.display().to_string(), &record);
                        println!("{}", report.to_json()?);
                    }
                }
            }
        }

        Commands::Check { file } => {
            let record = edidinfo::parse_edid_file(file)
                .with_context(|| format!("Unable to parse EDID {}", file.display()))?;

            println!("Header:   {}", if record.has_valid_header() { "ok" } else { "invalid" });
            println!("Checksum: {}", if record.checksum_valid { "ok" } else { "invalid" });
            if cli.verbosity != Verbosity::Minimal {
                print_summary(&record);
            }
            if !record.checksum_valid {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Version => {
            println!("edidinfo v{}", edidinfo::version());
            println!("Library for EDID decoding");
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(feature = "parallel")]
fn decode_all(blobs: &[Vec<u8>]) -> Vec<edidinfo::EdidResult<EdidRecord>> {
    edidinfo::parse_edid_batch(blobs)
}

#[cfg(not(feature = "parallel"))]
fn decode_all(blobs: &[Vec<u8>]) -> Vec<edidinfo::EdidResult<EdidRecord>> {
    blobs.iter().map(|bytes| edidinfo::parse_edid(bytes)).collect()
}

fn print_summary(record: &EdidRecord) {
    let id = &record.identity;
    println!(
        "Display:  {} {:04X} ({})",
        id.manufacturer_id,
        id.product_code,
        record.monitor_name.as_deref().unwrap_or("unnamed")
    );
    if let Some(dtd) = record.preferred_timing() {
        println!(
            "Native:   {}x{} @ {} kHz",
            dtd.horizontal_active, dtd.vertical_active, dtd.pixel_clock_khz
        );
    }
    println!("Extensions: {}", record.extension_count);
}

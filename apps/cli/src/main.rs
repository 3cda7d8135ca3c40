mod commands;
mod config;
mod export;
mod logging;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::commands::{CheckKind, MaskKind};
use crate::config::AppConfig;
use crate::export::ExportFormat;

#[derive(Parser)]
#[command(
    name = "castra",
    version,
    about = "Castra Pet registration checks, masks and exports"
)]
struct Cli {
    /// Configuration file (defaults to ./castra.toml when present)
    #[arg(long, global = true, env = "CASTRA_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `castra_validator=trace` (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a single field value
    Check {
        /// Kind of field
        #[arg(value_enum)]
        kind: CheckKind,
        /// Value to check
        value: String,
    },
    /// Apply an input mask to a value
    Mask {
        /// Kind of field
        #[arg(value_enum)]
        kind: MaskKind,
        /// Raw or partially typed value
        value: String,
    },
    /// Validate registration records from a JSON file (`-` reads stdin)
    Validate {
        /// JSON object or array of objects
        file: PathBuf,
        /// Print the reports as JSON
        #[arg(long)]
        json: bool,
    },
    /// Find records whose fields contain the given terms, ignoring case
    Search {
        /// JSON object or array of objects (`-` reads stdin)
        file: PathBuf,
        /// Search term for one field; repeat to narrow the search
        #[arg(short = 'w', long = "where", value_name = "FIELD=TERM", value_parser = commands::parse_term)]
        terms: Vec<(String, String)>,
    },
    /// Count records by species, neutering and microchip
    Stats {
        /// JSON object or array of objects (`-` reads stdin)
        file: PathBuf,
        /// Print the counts as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export registration records
    Export {
        /// JSON object or array of objects (`-` reads stdin)
        file: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,
        /// Include the registration timestamps
        #[arg(long)]
        all_fields: bool,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Exit status for operational failures; `1` is reserved for invalid input.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = AppConfig::load(cli.config.as_deref())?;
    logging::init(cli.log_level.as_deref(), &config.log.level)?;
    tracing::debug!(?config, "configuration loaded");

    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Check { kind, value } => commands::check(kind, &value, &mut stdout),
        Commands::Mask { kind, value } => commands::mask(kind, &value, &mut stdout),
        Commands::Validate { file, json } => commands::validate(&config, &file, json, &mut stdout),
        Commands::Search { file, terms } => commands::search(&file, terms, &mut stdout),
        Commands::Stats { file, json } => commands::stats(&file, json, &mut stdout),
        Commands::Export {
            file,
            format,
            all_fields,
            output,
        } => commands::export(
            &config,
            &file,
            format,
            all_fields,
            output.as_deref(),
            &mut stdout,
        ),
    }
}

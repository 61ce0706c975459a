//! Katameros Liturgy Reference Extractor CLI
//!
//! Prompts for a date range (unless given on the command line), fetches the
//! Liturgy readings for every day and writes `out.json` and `out.xlsx`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use katameros::{
    error::Result,
    models::{Config, DateRange},
    pipeline,
    storage::LocalStorage,
};

/// Katameros API Liturgy Reference Extractor
#[derive(Parser, Debug)]
#[command(
    name = "katameros",
    version,
    about = "Katameros API Liturgy Reference Extractor"
)]

struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "katameros.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract Liturgy references for a date range
    Extract {
        /// First date, DD-MM-YYYY (prompted if omitted)
        #[arg(long)]
        start: Option<String>,

        /// Last date, DD-MM-YYYY (prompted if omitted)
        #[arg(long)]
        end: Option<String>,

        /// Override the JSON output path
        #[arg(long)]
        json: Option<String>,

        /// Override the Excel output path
        #[arg(long)]
        xlsx: Option<String>,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Ask for a value on stdin; an empty answer takes the default.
fn prompt(label: &str, default: &str) -> Result<String> {
    print!("{label} [{default}]: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let answer = line.trim();
    Ok(if answer.is_empty() {
        default.to_string()
    } else {
        answer.to_string()
    })
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);

    let command = cli.command.unwrap_or(Command::Extract {
        start: None,
        end: None,
        json: None,
        xlsx: None,
    });

    match command {
        Command::Extract {
            start,
            end,
            json,
            xlsx,
        } => {
            log::info!("Katameros API Liturgy Reference Extractor");

            if let Some(path) = json {
                config.output.json_path = path;
            }
            if let Some(path) = xlsx {
                config.output.xlsx_path = path;
            }
            config.validate()?;

            let start = match start {
                Some(date) => date,
                None => prompt("Enter start date (DD-MM-YYYY)", &config.dates.default_start)?,
            };
            let end = match end {
                Some(date) => date,
                None => prompt("Enter end date (DD-MM-YYYY)", &config.dates.default_end)?,
            };

            let range = DateRange::parse(&start, &end).inspect_err(|e| {
                if e.is_input_error() {
                    log::error!("{}", e);
                }
            })?;

            let storage = LocalStorage::from_config(&config.output);
            pipeline::run_extraction(&config, &storage, &range).await?;
        }

        Command::Validate => pipeline::run_validate(&config)?,
    }

    log::info!("Done!");

    Ok(())
}

//! gs1 command-line interface

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use gs1_scan::ParserOptions;
use gs1_scan::cli::check::{self, CheckConfig};
use gs1_scan::cli::decode::{self, DecodeConfig};
use gs1_scan::cli::input::InputSource;
use gs1_scan::cli::output::{self, OutputFormat};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// GS1 barcode tool
#[derive(Parser)]
#[command(name = "gs1")]
#[command(author, version, about = "Decode GS1 pharmaceutical barcode scans", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, pretty, table)
    #[arg(short = 'f', long, global = true)]
    format: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    /// Characters of each element string to decode
    #[arg(long = "max-len", default_value_t = ParserOptions::DEFAULT_MAX_INPUT_LEN, global = true)]
    max_len: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode scanned codes into medication records
    Decode {
        /// Codes to decode (default: one per line from --input or stdin)
        codes: Vec<String>,

        /// File with one code per line
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Show where each field was found
        #[arg(short, long)]
        details: bool,
    },

    /// Decode codes and check the records
    Check {
        /// Codes to check (default: one per line from --input or stdin)
        codes: Vec<String>,

        /// File with one code per line
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Strict mode (warnings as errors)
        #[arg(short, long)]
        strict: bool,

        /// Date for expiry checks, YYYY-MM-DD (default: today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);
    init_logging(cli.verbose);

    let format = cli.format.as_deref().map(OutputFormat::parse);

    let result = match cli.command {
        Commands::Decode {
            codes,
            input,
            details,
        } => {
            let config = DecodeConfig {
                input: InputSource { codes, file: input },
                max_len: cli.max_len,
                details,
                output_format: format.unwrap_or_default(),
                output_file: cli.output.clone(),
            };
            decode::decode(config).map(|()| true)
        }

        Commands::Check {
            codes,
            input,
            strict,
            today,
        } => {
            let config = CheckConfig {
                input: InputSource { codes, file: input },
                max_len: cli.max_len,
                strict,
                today: today.unwrap_or_else(|| chrono::Local::now().date_naive()),
                output_format: format.unwrap_or(OutputFormat::Table),
                output_file: cli.output.clone(),
            };
            check::check(config)
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}", output::format_error(&e));
            std::process::exit(1);
        }
    }
}

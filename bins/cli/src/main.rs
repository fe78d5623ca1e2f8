//! Finaudit CLI
//!
//! Command-line entry point for the financial statement auditor.
//!
//! # Commands
//!
//! - `finaudit audit --input <file>` - Audit one or many statement sets
//! - `finaudit benford --input <file>` - Screen transaction amounts against Benford's Law
//! - `finaudit generate statements|transactions` - Write synthetic data
//! - `finaudit demo` - Audit random statements, then screen a random ledger

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finaudit_shared::{AppConfig, AppError};

mod commands;
mod input;
mod render;

/// Financial statement auditor
#[derive(Parser)]
#[command(name = "finaudit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file layered over config/default and config/{RUN_MODE}
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit statement sets read from a JSON file
    Audit {
        /// Statement file: one set, an array of sets, or column form
        #[arg(short, long)]
        input: PathBuf,

        /// Export the report as JSON; without a path, a timestamped file in report.output_dir
        #[arg(short, long, num_args = 0..=1)]
        output: Option<Option<PathBuf>>,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Compare leading digits of transaction amounts with Benford's Law
    Benford {
        /// Transaction file: `{id: amount}` map or array of amounts
        #[arg(short, long)]
        input: PathBuf,

        /// Print the analysis as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write synthetic statements or transactions as JSON
    Generate {
        /// What to generate
        #[arg(value_enum)]
        kind: commands::generate::Kind,

        /// Number of statement sets or transactions
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Every balance sheet satisfies the accounting equation
        #[arg(long, conflicts_with = "unbalanced")]
        balanced: bool,

        /// Every balance sheet carries an injected error
        #[arg(long)]
        unbalanced: bool,

        /// Draw leading digits uniformly instead of by Benford's Law
        #[arg(long)]
        uniform: bool,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Audit random statement sets, then screen a random ledger
    Demo {
        /// Seed for reproducible output
        #[arg(short, long, default_value = "100")]
        seed: u64,

        /// Number of statement sets to audit
        #[arg(long, default_value = "5")]
        sets: usize,

        /// Number of transactions to screen
        #[arg(long, default_value = "1000")]
        transactions: usize,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "finaudit=debug" } else { "finaudit=info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = AppConfig::load_with_file(cli.config.as_deref()).map_err(AppError::from)?;
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Audit {
            input,
            output,
            json,
        } => commands::audit::run(&config, &input, output.as_ref().map(Option::as_deref), json),
        Commands::Benford { input, json } => commands::benford::run(&config, &input, json),
        Commands::Generate {
            kind,
            count,
            seed,
            balanced,
            unbalanced,
            uniform,
            output,
        } => commands::generate::run(
            &commands::generate::Options {
                kind,
                count,
                seed,
                mode: commands::generate::balance_mode(balanced, unbalanced),
                uniform,
            },
            output.as_deref(),
        ),
        Commands::Demo {
            seed,
            sets,
            transactions,
        } => commands::demo::run(&config, seed, sets, transactions),
    }
}

/// Maps a command failure onto the application error that decides the exit code.
fn into_app_error(err: anyhow::Error) -> AppError {
    match err.downcast::<AppError>() {
        Ok(app_error) => app_error,
        Err(err) => match err.downcast::<std::io::Error>() {
            Ok(io_error) => AppError::from(io_error),
            Err(other) => AppError::Internal(format!("{other:#}")),
        },
    }
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            let app_error = into_app_error(err);
            error!(code = app_error.error_code(), "{app_error}");
            eprintln!("error: {app_error}");
            ExitCode::from(app_error.exit_code())
        }
    }
}

//! Benford command implementation

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use tracing::info;

use finaudit_core::benford::BenfordAnalyzer;
use finaudit_shared::{AppConfig, AppError};

use crate::input::read_transactions;
use crate::render::write_benford_table;

/// Run the benford command
pub fn run(config: &AppConfig, input: &Path, json: bool) -> anyhow::Result<ExitCode> {
    let ledger = read_transactions(input)?;
    info!(input = %input.display(), transactions = ledger.len(), "Screening leading digits");

    let analysis = BenfordAnalyzer::from(&config.benford).analyze(&ledger);

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &analysis)
            .map_err(|e| AppError::Serialization(e.to_string()))?;
        writeln!(out).map_err(AppError::from)?;
    } else {
        write_benford_table(&mut out, &analysis).map_err(AppError::from)?;
    }

    Ok(ExitCode::SUCCESS)
}

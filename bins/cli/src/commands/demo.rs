//! Demo command implementation
//!
//! Audits a handful of random statement sets, then screens a random
//! Benford-distributed ledger.

use std::io::{self, Write};
use std::process::ExitCode;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use finaudit_core::audit::{AuditPolicy, StatementValidator};
use finaudit_core::benford::BenfordAnalyzer;
use finaudit_shared::{AppConfig, AppError};
use finaudit_synth::{BalanceMode, generate_benford_transactions, generate_statement_sets};

use crate::render::{write_audit_report, write_benford_table};

/// Run the demo command
pub fn run(
    config: &AppConfig,
    seed: u64,
    set_count: usize,
    transaction_count: usize,
) -> anyhow::Result<ExitCode> {
    info!(seed, set_count, transaction_count, "Running demo");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = io::stdout().lock();

    let validator = StatementValidator::new(AuditPolicy::from(&config.audit));
    let sets = generate_statement_sets(&mut rng, set_count, BalanceMode::Random);
    for (index, set) in sets.iter().enumerate() {
        writeln!(out, "Statement set {} of {}", index + 1, sets.len()).map_err(AppError::from)?;
        write_audit_report(&mut out, &validator.run_all(set)).map_err(AppError::from)?;
    }

    let ledger = generate_benford_transactions(&mut rng, transaction_count);
    let analysis = BenfordAnalyzer::from(&config.benford).analyze(&ledger);
    write_benford_table(&mut out, &analysis).map_err(AppError::from)?;

    Ok(ExitCode::SUCCESS)
}

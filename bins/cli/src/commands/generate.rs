//! Generate command implementation

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::ValueEnum;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;
use tracing::info;

use finaudit_shared::{AppError, AppResult};
use finaudit_synth::{
    BalanceMode, generate_benford_transactions, generate_statement_sets,
    generate_uniform_transactions,
};

use crate::render::export_json;

/// Kind of synthetic data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    /// Statement sets
    Statements,
    /// Transaction ledger
    Transactions,
}

/// Settings of one generation run.
#[derive(Debug, Clone)]
pub struct Options {
    /// What to generate.
    pub kind: Kind,
    /// Number of sets or transactions.
    pub count: usize,
    /// Seed; a fresh OS seed when absent.
    pub seed: Option<u64>,
    /// Balance of generated statement sets.
    pub mode: BalanceMode,
    /// Uniform instead of Benford leading digits.
    pub uniform: bool,
}

/// Maps the `--balanced`/`--unbalanced` flags onto a mode.
pub fn balance_mode(balanced: bool, unbalanced: bool) -> BalanceMode {
    match (balanced, unbalanced) {
        (true, _) => BalanceMode::Balanced,
        (false, true) => BalanceMode::Unbalanced,
        (false, false) => BalanceMode::Random,
    }
}

/// Produces the requested data as JSON.
pub fn generate(options: &Options) -> AppResult<Value> {
    let mut rng = options
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let value = match options.kind {
        Kind::Statements => serde_json::to_value(generate_statement_sets(
            &mut rng,
            options.count,
            options.mode,
        )),
        Kind::Transactions if options.uniform => {
            serde_json::to_value(generate_uniform_transactions(&mut rng, options.count))
        }
        Kind::Transactions => {
            serde_json::to_value(generate_benford_transactions(&mut rng, options.count))
        }
    };

    value.map_err(|e| AppError::Serialization(e.to_string()))
}

/// Run the generate command
pub fn run(options: &Options, output: Option<&Path>) -> anyhow::Result<ExitCode> {
    info!(kind = ?options.kind, count = options.count, seed = ?options.seed, "Generating data");
    let value = generate(options)?;

    match output {
        Some(path) => {
            let written = export_json(&value, Some(path), ".")?;
            eprintln!("Wrote {}", written.display());
        }
        None => {
            let mut out = io::stdout().lock();
            serde_json::to_writer_pretty(&mut out, &value)
                .map_err(|e| AppError::Serialization(e.to_string()))?;
            writeln!(out).map_err(AppError::from)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_transactions;
    use finaudit_core::audit::{FindingStatus, run_all};
    use finaudit_core::statements::load_statement_sets;
    use rstest::rstest;

    fn options(kind: Kind, mode: BalanceMode) -> Options {
        Options {
            kind,
            count: 4,
            seed: Some(100),
            mode,
            uniform: false,
        }
    }

    #[rstest]
    #[case(false, false, BalanceMode::Random)]
    #[case(true, false, BalanceMode::Balanced)]
    #[case(false, true, BalanceMode::Unbalanced)]
    fn test_balance_mode(
        #[case] balanced: bool,
        #[case] unbalanced: bool,
        #[case] expected: BalanceMode,
    ) {
        assert_eq!(balance_mode(balanced, unbalanced), expected);
    }

    #[test]
    fn test_generated_statements_load_back() {
        let value = generate(&options(Kind::Statements, BalanceMode::Balanced)).unwrap();
        let sets = load_statement_sets(&value).unwrap();

        assert_eq!(sets.len(), 4);
        assert!(sets.iter().all(|set| {
            run_all(set)
                .finding("Balance Sheet Equation (A = L + E)")
                .is_some_and(|f| f.status == FindingStatus::Pass)
        }));
    }

    #[test]
    fn test_generated_transactions_load_back() {
        let value = generate(&options(Kind::Transactions, BalanceMode::Random)).unwrap();
        let ledger = parse_transactions(value).unwrap();
        assert_eq!(ledger.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_seed_reproduces_output() {
        let opts = options(Kind::Statements, BalanceMode::Random);
        assert_eq!(generate(&opts).unwrap(), generate(&opts).unwrap());
    }
}

//! Audit command implementation

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use serde_json::Value;
use tracing::info;

use finaudit_core::audit::{AuditPolicy, AuditReport, StatementValidator};
use finaudit_shared::{AppConfig, AppError};

use crate::input::read_statement_sets;
use crate::render::{export_json, write_audit_report};

/// A single report exports as an object, a batch as an array.
fn payload(reports: &[AuditReport]) -> serde_json::Result<Value> {
    match reports {
        [single] => serde_json::to_value(single),
        many => serde_json::to_value(many),
    }
}

/// Run the audit command
///
/// Exits with status 1 when any statement set fails its audit.
pub fn run(
    config: &AppConfig,
    input: &Path,
    output: Option<Option<&Path>>,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let sets = read_statement_sets(input)?;
    info!(input = %input.display(), sets = sets.len(), "Auditing statements");

    let validator = StatementValidator::new(AuditPolicy::from(&config.audit));
    let reports = validator.audit_batch(&sets);

    let mut out = io::stdout().lock();
    if json {
        let value = payload(&reports).map_err(|e| AppError::Serialization(e.to_string()))?;
        serde_json::to_writer_pretty(&mut out, &value)
            .map_err(|e| AppError::Serialization(e.to_string()))?;
        writeln!(out).map_err(AppError::from)?;
    } else {
        for report in &reports {
            write_audit_report(&mut out, report).map_err(AppError::from)?;
        }
    }

    if let Some(path) = output {
        let value = payload(&reports).map_err(|e| AppError::Serialization(e.to_string()))?;
        let written = export_json(&value, path, &config.report.output_dir)?;
        eprintln!("Audit report exported to: {}", written.display());
    }

    let failed = reports.iter().filter(|r| !r.is_passed()).count();
    info!(audited = reports.len(), failed, "Audit run complete");

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

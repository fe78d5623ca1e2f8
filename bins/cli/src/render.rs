//! Console rendering and JSON export of results.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::info;

use finaudit_core::audit::AuditReport;
use finaudit_core::benford::BenfordAnalysis;
use finaudit_shared::{AppError, AppResult};

const RULE_WIDTH: usize = 70;
const PASSED_SHOWN: usize = 5;

fn rule(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

/// Writes the text form of an audit report.
///
/// Only the first five passed checks are listed; warnings and errors are listed in full.
pub fn write_audit_report(out: &mut impl Write, report: &AuditReport) -> io::Result<()> {
    let summary = &report.summary;

    rule(out)?;
    writeln!(out, "FINANCIAL STATEMENT AUDIT VALIDATION REPORT")?;
    writeln!(out, "Audit Date: {}", summary.audit_timestamp.to_rfc3339())?;
    rule(out)?;
    writeln!(out)?;

    writeln!(out, "PASSED CHECKS: {}", summary.passed)?;
    for finding in report.passed_checks.iter().take(PASSED_SHOWN) {
        writeln!(out, " - {}", finding.check_name)?;
    }
    writeln!(out)?;

    if report.warnings.is_empty() {
        writeln!(out, "WARNINGS: None")?;
    } else {
        writeln!(out, "WARNINGS: {}", summary.warnings)?;
        for finding in &report.warnings {
            writeln!(out, " - {}: {}", finding.check_name, finding.message)?;
        }
    }
    writeln!(out)?;

    if report.errors.is_empty() {
        writeln!(out, "ERRORS: None")?;
    } else {
        writeln!(out, "ERRORS: {}", summary.failed)?;
        for finding in &report.errors {
            let severity = finding
                .severity
                .map_or_else(|| "UNKNOWN".to_string(), |s| s.to_string());
            writeln!(out, " - [{severity}] {}: {}", finding.check_name, finding.message)?;
        }
    }
    writeln!(out)?;

    rule(out)?;
    writeln!(out, "OVERALL STATUS: {}", summary.status)?;
    rule(out)?;
    writeln!(out)
}

/// Writes the digit table, MAD and verdict of a Benford analysis.
#[allow(clippy::float_arithmetic)]
pub fn write_benford_table(out: &mut impl Write, analysis: &BenfordAnalysis) -> io::Result<()> {
    rule(out)?;
    writeln!(out, "BENFORD'S LAW ANALYSIS")?;
    writeln!(
        out,
        "Sample size: {} ({} without a leading digit)",
        analysis.sample_size, analysis.skipped
    )?;
    rule(out)?;
    writeln!(
        out,
        "{:>5}  {:>10}  {:>8}  {:>10}  {:>8}",
        "Digit", "Expected", "Actual", "Expected %", "Actual %"
    )?;
    for (digit, row) in &analysis.digits {
        writeln!(
            out,
            "{digit:>5}  {:>10.1}  {:>8}  {:>9.2}%  {:>7.2}%",
            row.expected_value,
            row.actual_value,
            row.expected_proportion * 100.0,
            row.actual_proportion * 100.0,
        )?;
    }
    rule(out)?;
    writeln!(out, "MAD: {:.5}", analysis.mad)?;
    writeln!(out, "Interpretation: {}", analysis.interpretation())?;
    if !analysis.sample_adequate {
        writeln!(out, "Note: sample is too small for a reliable verdict")?;
    }
    writeln!(out)
}

/// File name used when an export path is not given: `audit_report_<YYYYmmdd_HHMMSS>.json`.
pub fn default_report_filename(now: DateTime<Local>) -> String {
    format!("audit_report_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// Serializes `value` with two-space indentation and writes it to `path`,
/// or to a timestamped file in `output_dir` when no path is given.
pub fn export_json<T: serde::Serialize + ?Sized>(
    value: &T,
    path: Option<&Path>,
    output_dir: &str,
) -> AppResult<PathBuf> {
    let path = path.map_or_else(
        || Path::new(output_dir).join(default_report_filename(Local::now())),
        Path::to_path_buf,
    );

    let json =
        serde_json::to_string_pretty(value).map_err(|e| AppError::Serialization(e.to_string()))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| AppError::Io(format!("{}: {e}", parent.display())))?;
    }
    std::fs::write(&path, json).map_err(|e| AppError::Io(format!("{}: {e}", path.display())))?;

    info!(path = %path.display(), "Report exported");
    Ok(path)
}

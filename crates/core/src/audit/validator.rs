//! Runs the check battery and compiles the report.

use rayon::prelude::*;
use tracing::info;

use super::checks::{AuditCheck, standard_checks};
use super::log::AuditLog;
use super::policy::AuditPolicy;
use super::report::AuditReport;
use crate::statements::StatementSet;

/// Audits statement sets against an ordered list of checks.
///
/// The validator holds no per-audit state: every call to [`run_all`](Self::run_all)
/// starts from an empty [`AuditLog`], so one instance can serve many audits,
/// concurrently or in sequence.
pub struct StatementValidator {
    policy: AuditPolicy,
    checks: Vec<Box<dyn AuditCheck>>,
}

impl StatementValidator {
    /// Creates a validator running the standard battery.
    #[must_use]
    pub fn new(policy: AuditPolicy) -> Self {
        Self::with_checks(policy, standard_checks())
    }

    /// Creates a validator running a custom list of checks, in order.
    #[must_use]
    pub fn with_checks(policy: AuditPolicy, checks: Vec<Box<dyn AuditCheck>>) -> Self {
        Self { policy, checks }
    }

    /// Thresholds in use.
    #[must_use]
    pub fn policy(&self) -> &AuditPolicy {
        &self.policy
    }

    /// Names of the configured checks, in execution order.
    #[must_use]
    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    /// Runs a single check, recording into a caller-owned log.
    pub fn run_check(
        &self,
        check: &dyn AuditCheck,
        statements: &StatementSet,
        log: &mut AuditLog,
    ) -> bool {
        check.evaluate(statements, &self.policy, log)
    }

    /// Runs every check in order and compiles the report.
    #[must_use]
    pub fn run_all(&self, statements: &StatementSet) -> AuditReport {
        let mut log = AuditLog::new();
        for check in &self.checks {
            self.run_check(check.as_ref(), statements, &mut log);
        }

        let report = AuditReport::from_log(log);
        info!(
            status = %report.summary.status,
            passed = report.summary.passed,
            warnings = report.summary.warnings,
            failed = report.summary.failed,
            "Audit completed"
        );
        report
    }

    /// Audits many statement sets in parallel, preserving input order.
    #[must_use]
    pub fn audit_batch(&self, sets: &[StatementSet]) -> Vec<AuditReport> {
        sets.par_iter().map(|set| self.run_all(set)).collect()
    }
}

impl Default for StatementValidator {
    fn default() -> Self {
        Self::new(AuditPolicy::default())
    }
}

impl std::fmt::Debug for StatementValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatementValidator")
            .field("policy", &self.policy)
            .field("checks", &self.check_names())
            .finish()
    }
}

/// Audits one statement set with the default policy.
#[must_use]
pub fn run_all(statements: &StatementSet) -> AuditReport {
    StatementValidator::default().run_all(statements)
}

/// Audits many statement sets in parallel with the default policy.
#[must_use]
pub fn audit_batch(sets: &[StatementSet]) -> Vec<AuditReport> {
    StatementValidator::default().audit_batch(sets)
}

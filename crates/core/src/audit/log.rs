//! Accumulator threaded through one audit run.

use tracing::debug;

use super::finding::{Finding, FindingStatus};

/// Findings collected during a single audit, split by outcome.
///
/// A fresh log is created per statement set, so findings never leak between runs.
#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    passed: Vec<Finding>,
    warnings: Vec<Finding>,
    errors: Vec<Finding>,
}

impl AuditLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Files a finding under its outcome, preserving arrival order.
    pub fn record(&mut self, finding: Finding) {
        debug!(
            check = %finding.check_name,
            status = %finding.status,
            "Finding recorded"
        );

        match finding.status {
            FindingStatus::Pass => self.passed.push(finding),
            FindingStatus::Warning => self.warnings.push(finding),
            FindingStatus::Fail => self.errors.push(finding),
        }
    }

    /// Findings whose rule held.
    #[must_use]
    pub fn passed(&self) -> &[Finding] {
        &self.passed
    }

    /// Plausibility warnings.
    #[must_use]
    pub fn warnings(&self) -> &[Finding] {
        &self.warnings
    }

    /// Rule violations.
    #[must_use]
    pub fn errors(&self) -> &[Finding] {
        &self.errors
    }

    /// Total number of findings of any outcome.
    #[must_use]
    pub fn len(&self) -> usize {
        self.passed.len() + self.warnings.len() + self.errors.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Splits the log into `(passed, warnings, errors)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Finding>, Vec<Finding>, Vec<Finding>) {
        (self.passed, self.warnings, self.errors)
    }
}

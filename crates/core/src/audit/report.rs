//! Aggregated audit results.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::finding::Finding;
use super::log::AuditLog;

/// Overall verdict of an audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditStatus {
    /// No rule was violated.
    Passed,
    /// At least one rule was violated.
    Failed,
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => write!(f, "PASSED"),
            Self::Failed => write!(f, "FAILED"),
        }
    }
}

/// Headline counts of an audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditSummary {
    /// Passed plus failed findings; warnings are counted separately.
    pub total_checks: usize,
    /// Number of passed findings.
    pub passed: usize,
    /// Number of failed findings.
    pub failed: usize,
    /// Number of warnings.
    pub warnings: usize,
    /// Overall verdict.
    pub status: AuditStatus,
    /// When the report was compiled.
    pub audit_timestamp: DateTime<Utc>,
}

/// Result of auditing one statement set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Headline counts.
    pub summary: AuditSummary,
    /// Findings whose rule held, in execution order.
    pub passed_checks: Vec<Finding>,
    /// Plausibility warnings, in execution order.
    pub warnings: Vec<Finding>,
    /// Rule violations, in execution order.
    pub errors: Vec<Finding>,
}

impl AuditReport {
    /// Compiles a report stamped with the current time.
    #[must_use]
    pub fn from_log(log: AuditLog) -> Self {
        Self::from_log_at(log, Utc::now())
    }

    /// Compiles a report with an explicit timestamp.
    ///
    /// The verdict is `Failed` exactly when at least one error was recorded.
    #[must_use]
    pub fn from_log_at(log: AuditLog, audit_timestamp: DateTime<Utc>) -> Self {
        let (passed_checks, warnings, errors) = log.into_parts();

        let status = if errors.is_empty() {
            AuditStatus::Passed
        } else {
            AuditStatus::Failed
        };

        Self {
            summary: AuditSummary {
                total_checks: passed_checks.len() + errors.len(),
                passed: passed_checks.len(),
                failed: errors.len(),
                warnings: warnings.len(),
                status,
                audit_timestamp,
            },
            passed_checks,
            warnings,
            errors,
        }
    }

    /// Returns true if the audit passed.
    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.summary.status == AuditStatus::Passed
    }

    /// Looks up the first finding of any outcome with the given check name.
    #[must_use]
    pub fn finding(&self, check_name: &str) -> Option<&Finding> {
        self.passed_checks
            .iter()
            .chain(&self.warnings)
            .chain(&self.errors)
            .find(|f| f.check_name == check_name)
    }
}

//! Statement consistency and plausibility audit.
//!
//! This module implements the rule-based auditor:
//! - Findings with status and severity
//! - The per-run finding log
//! - Numeric policy (tolerance, plausibility bands)
//! - The battery of checks
//! - Report aggregation
//! - The validator that ties them together

pub mod checks;
pub mod finding;
pub mod log;
pub mod policy;
pub mod report;
pub mod validator;

#[cfg(test)]
mod validator_props;

pub use checks::{AuditCheck, standard_checks};
pub use finding::{ContextValue, Finding, FindingStatus, Severity};
pub use log::AuditLog;
pub use policy::{AuditPolicy, PercentBand};
pub use report::{AuditReport, AuditStatus, AuditSummary};
pub use validator::{StatementValidator, audit_batch, run_all};

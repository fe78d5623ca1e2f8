//! Single check outcomes.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome class of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindingStatus {
    /// The rule held.
    Pass,
    /// A plausibility bound was exceeded; the audit verdict is unaffected.
    Warning,
    /// A rule was violated; the audit fails.
    Fail,
}

/// Business impact of a failed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Broken accounting identity or impossible value.
    Critical,
    /// Impossible component value.
    High,
    /// Questionable supplementary value.
    Medium,
}

impl fmt::Display for FindingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Warning => write!(f, "WARNING"),
            Self::Fail => write!(f, "FAIL"),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Critical => write!(f, "CRITICAL"),
            Self::High => write!(f, "HIGH"),
            Self::Medium => write!(f, "MEDIUM"),
        }
    }
}

/// Diagnostic value attached to a finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextValue {
    /// Monetary amount or ratio.
    Amount(Decimal),
    /// Yes/no flag.
    Flag(bool),
    /// Free text (item names, formatted percentages, ranges).
    Text(String),
}

impl From<Decimal> for ContextValue {
    fn from(value: Decimal) -> Self {
        Self::Amount(value)
    }
}

impl From<bool> for ContextValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Outcome of one rule evaluated against a statement set.
///
/// `severity` is set exactly when `status` is [`FindingStatus::Fail`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Name of the rule.
    pub check_name: String,
    /// Outcome class.
    pub status: FindingStatus,
    /// Impact of a failure.
    pub severity: Option<Severity>,
    /// Human-readable explanation.
    pub message: String,
    /// Diagnostic values keyed by name.
    pub context: BTreeMap<String, ContextValue>,
}

impl Finding {
    fn new(
        check_name: impl Into<String>,
        status: FindingStatus,
        severity: Option<Severity>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            check_name: check_name.into(),
            status,
            severity,
            message: message.into(),
            context: BTreeMap::new(),
        }
    }

    /// A rule that held.
    #[must_use]
    pub fn pass(check_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(check_name, FindingStatus::Pass, None, message)
    }

    /// A plausibility bound that was exceeded.
    #[must_use]
    pub fn warning(check_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(check_name, FindingStatus::Warning, None, message)
    }

    /// A violated rule.
    #[must_use]
    pub fn fail(
        check_name: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self::new(check_name, FindingStatus::Fail, Some(severity), message)
    }

    /// Attaches a diagnostic value.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<ContextValue>) -> Self {
        self.context.insert(key.to_string(), value.into());
        self
    }

    /// Looks up a monetary diagnostic value.
    #[must_use]
    pub fn amount(&self, key: &str) -> Option<Decimal> {
        match self.context.get(key) {
            Some(ContextValue::Amount(value)) => Some(*value),
            _ => None,
        }
    }

    /// Looks up a textual diagnostic value.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.context.get(key) {
            Some(ContextValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns true if this finding fails the audit.
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        self.status == FindingStatus::Fail
    }
}

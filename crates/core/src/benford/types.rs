//! Benford analysis data types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a ledger transaction.
pub type TransactionId = u64;

/// Expected and observed counts for one leading digit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DigitFrequency {
    /// Count predicted by Benford's Law, rounded to one decimal place.
    pub expected_value: f64,
    /// Count observed.
    pub actual_value: u64,
    /// Probability predicted by Benford's Law.
    pub expected_proportion: f64,
    /// Share of the sample observed.
    pub actual_proportion: f64,
}

/// Qualitative reading of a mean absolute deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conformity {
    /// MAD below 0.006.
    Close,
    /// MAD below 0.012.
    Acceptable,
    /// MAD below 0.015.
    Marginal,
    /// MAD of 0.015 or more.
    NonConformity,
}

impl Conformity {
    /// Human-readable verdict.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Close => "Close conformity - data likely follows Benford's Law",
            Self::Acceptable => "Acceptable conformity - data reasonably follows Benford's Law",
            Self::Marginal => "Marginally acceptable conformity - investigate further",
            Self::NonConformity => "Non-conformity - potential data quality issues or fraud",
        }
    }

    /// Returns true if the data needs a closer look.
    #[must_use]
    pub const fn needs_review(self) -> bool {
        matches!(self, Self::Marginal | Self::NonConformity)
    }
}

impl fmt::Display for Conformity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of comparing a dataset's leading digits with Benford's Law.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenfordAnalysis {
    /// Per-digit comparison for digits 1 through 9.
    pub digits: BTreeMap<u8, DigitFrequency>,
    /// Mean absolute deviation of the proportions, rounded to five decimal places.
    pub mad: f64,
    /// Qualitative reading of `mad`.
    pub conformity: Conformity,
    /// Records that contributed a leading digit.
    pub sample_size: u64,
    /// Records without a leading digit (zero amounts).
    pub skipped: u64,
    /// Whether `sample_size` reached the configured minimum.
    pub sample_adequate: bool,
}

impl BenfordAnalysis {
    /// Returns the comparison row for one digit.
    #[must_use]
    pub fn digit(&self, digit: u8) -> Option<&DigitFrequency> {
        self.digits.get(&digit)
    }

    /// Interpretation label of the result.
    #[must_use]
    pub fn interpretation(&self) -> &'static str {
        self.conformity.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(
            Conformity::Close.to_string(),
            "Close conformity - data likely follows Benford's Law"
        );
        assert_eq!(
            Conformity::NonConformity.label(),
            "Non-conformity - potential data quality issues or fraud"
        );
    }

    #[test]
    fn test_needs_review() {
        assert!(!Conformity::Close.needs_review());
        assert!(!Conformity::Acceptable.needs_review());
        assert!(Conformity::Marginal.needs_review());
        assert!(Conformity::NonConformity.needs_review());
    }

    #[test]
    fn test_serialization() {
        assert_eq!(
            serde_json::to_value(Conformity::NonConformity).unwrap(),
            "non_conformity"
        );
    }
}

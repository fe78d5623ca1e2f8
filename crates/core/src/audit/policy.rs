//! Numeric thresholds applied by the checks.

use finaudit_shared::AuditSettings;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inclusive range of percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentBand {
    /// Lowest accepted percentage.
    pub min: Decimal,
    /// Highest accepted percentage.
    pub max: Decimal,
}

impl PercentBand {
    /// Creates a band from whole-number bounds.
    #[must_use]
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            min: Decimal::from(min),
            max: Decimal::from(max),
        }
    }

    /// Returns true if `value` lies within the band, bounds included.
    #[must_use]
    pub fn contains(&self, value: Decimal) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Thresholds used by the statement checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditPolicy {
    /// Largest absolute discrepancy accepted by the equality checks.
    pub tolerance: Decimal,
    /// Lowest plausible operating cash flow as a multiple of net income.
    pub ocf_lower_multiple: Decimal,
    /// Highest plausible operating cash flow as a multiple of net income.
    pub ocf_upper_multiple: Decimal,
    /// Plausible gross margin.
    pub gross_margin: PercentBand,
    /// Plausible operating margin.
    pub operating_margin: PercentBand,
    /// Plausible net margin.
    pub net_margin: PercentBand,
    /// Plausible debt-to-assets ratio.
    pub debt_to_assets: PercentBand,
}

impl Default for AuditPolicy {
    fn default() -> Self {
        Self::from(&AuditSettings::default())
    }
}

impl From<&AuditSettings> for AuditPolicy {
    fn from(settings: &AuditSettings) -> Self {
        Self {
            tolerance: settings.tolerance.abs(),
            ocf_lower_multiple: settings.ocf_lower_multiple,
            ocf_upper_multiple: settings.ocf_upper_multiple,
            gross_margin: PercentBand::new(-1, 101),
            operating_margin: PercentBand::new(-101, 101),
            net_margin: PercentBand::new(-101, 101),
            debt_to_assets: PercentBand::new(0, 200),
        }
    }
}

impl AuditPolicy {
    /// Returns true if a reported figure agrees with its recomputation.
    #[must_use]
    pub fn agrees(&self, reported: Decimal, calculated: Decimal) -> bool {
        (reported - calculated).abs() <= self.tolerance
    }
}

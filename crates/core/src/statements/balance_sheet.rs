//! Balance sheet record.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use super::amount::{ensure_object, required_amount};
use super::error::StatementError;

const STATEMENT: &str = "balance_sheet";

/// Asset side of the balance sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assets {
    /// Total current assets.
    pub current_assets: Decimal,
    /// Cash and equivalents.
    pub cash: Decimal,
    /// Accounts receivable.
    pub accounts_receivable: Decimal,
    /// Inventory.
    pub inventory: Decimal,
    /// Total non-current assets.
    pub non_current_assets: Decimal,
    /// Gross property, plant and equipment.
    pub property_plant_equipment: Decimal,
    /// Accumulated depreciation, conventionally negative.
    pub accumulated_depreciation: Decimal,
    /// Intangible assets.
    pub intangible_assets: Decimal,
}

/// Liability side of the balance sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Liabilities {
    /// Total current liabilities.
    pub current_liabilities: Decimal,
    /// Accounts payable.
    pub accounts_payable: Decimal,
    /// Short-term debt.
    pub short_term_debt: Decimal,
    /// Accrued expenses.
    pub accrued_expenses: Decimal,
    /// Total non-current liabilities.
    pub non_current_liabilities: Decimal,
    /// Long-term debt.
    pub long_term_debt: Decimal,
}

/// Shareholders' equity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Equity {
    /// Common stock.
    pub common_stock: Decimal,
    /// Retained earnings.
    pub retained_earnings: Decimal,
}

/// Balance sheet as supplied by the caller.
///
/// The accounting equation is checked by the auditor, never enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceSheet {
    /// Assets.
    pub assets: Assets,
    /// Liabilities.
    pub liabilities: Liabilities,
    /// Equity.
    pub equity: Equity,
}

impl Assets {
    /// Current plus non-current assets.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.current_assets + self.non_current_assets
    }
}

impl Liabilities {
    /// Current plus non-current liabilities.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.current_liabilities + self.non_current_liabilities
    }
}

impl Equity {
    /// Common stock plus retained earnings.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.common_stock + self.retained_earnings
    }
}

impl BalanceSheet {
    /// Total assets.
    #[must_use]
    pub fn total_assets(&self) -> Decimal {
        self.assets.total()
    }

    /// Total liabilities.
    #[must_use]
    pub fn total_liabilities(&self) -> Decimal {
        self.liabilities.total()
    }

    /// Total equity.
    #[must_use]
    pub fn total_equity(&self) -> Decimal {
        self.equity.total()
    }

    /// Builds a balance sheet from a JSON object, failing on the first absent field.
    pub fn from_value(value: &Value) -> Result<Self, StatementError> {
        ensure_object(value, STATEMENT)?;
        let field = |section: &str, name: &str| required_amount(value, STATEMENT, &[section, name]);

        Ok(Self {
            assets: Assets {
                current_assets: field("assets", "current_assets")?,
                cash: field("assets", "cash")?,
                accounts_receivable: field("assets", "accounts_receivable")?,
                inventory: field("assets", "inventory")?,
                non_current_assets: field("assets", "non_current_assets")?,
                property_plant_equipment: field("assets", "property_plant_equipment")?,
                accumulated_depreciation: field("assets", "accumulated_depreciation")?,
                intangible_assets: field("assets", "intangible_assets")?,
            },
            liabilities: Liabilities {
                current_liabilities: field("liabilities", "current_liabilities")?,
                accounts_payable: field("liabilities", "accounts_payable")?,
                short_term_debt: field("liabilities", "short_term_debt")?,
                accrued_expenses: field("liabilities", "accrued_expenses")?,
                non_current_liabilities: field("liabilities", "non_current_liabilities")?,
                long_term_debt: field("liabilities", "long_term_debt")?,
            },
            equity: Equity {
                common_stock: field("equity", "common_stock")?,
                retained_earnings: field("equity", "retained_earnings")?,
            },
        })
    }
}

//! Cash-flow statement record.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use super::amount::{ensure_object, optional_amount, required_amount};
use super::error::StatementError;

const STATEMENT: &str = "cash_flow";

/// Cash-flow statement as supplied by the caller.
///
/// Only the three activity totals are required. The component lines are
/// often unavailable and read as zero when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CashFlowStatement {
    /// Net cash from operating activities.
    pub operating_activities: Decimal,
    /// Net cash from investing activities.
    pub investing_activities: Decimal,
    /// Net cash from financing activities.
    pub financing_activities: Decimal,
    /// Capital expenditure, normally an outflow.
    pub capital_expenditure: Decimal,
    /// Depreciation added back.
    pub depreciation: Decimal,
    /// Proceeds from new debt.
    pub debt_issuance: Decimal,
    /// Debt repaid, normally an outflow.
    pub debt_repayment: Decimal,
    /// Dividends paid, normally an outflow.
    pub dividends_paid: Decimal,
}

impl CashFlowStatement {
    /// Sum of the three activity totals.
    #[must_use]
    pub fn net_change(&self) -> Decimal {
        self.operating_activities + self.investing_activities + self.financing_activities
    }

    /// Builds a cash-flow statement from a JSON object.
    pub fn from_value(value: &Value) -> Result<Self, StatementError> {
        ensure_object(value, STATEMENT)?;
        let required = |name: &str| required_amount(value, STATEMENT, &[name]);
        let optional = |name: &str| optional_amount(value, STATEMENT, &[name]);

        Ok(Self {
            operating_activities: required("operating_activities")?,
            investing_activities: required("investing_activities")?,
            financing_activities: required("financing_activities")?,
            capital_expenditure: optional("capital_expenditure")?,
            depreciation: optional("depreciation")?,
            debt_issuance: optional("debt_issuance")?,
            debt_repayment: optional("debt_repayment")?,
            dividends_paid: optional("dividends_paid")?,
        })
    }
}

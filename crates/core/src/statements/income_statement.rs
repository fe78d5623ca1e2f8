//! Income statement record.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use super::amount::{ensure_object, required_amount};
use super::error::StatementError;

const STATEMENT: &str = "income_statement";

/// Income statement as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncomeStatement {
    /// Revenue.
    pub revenue: Decimal,
    /// Cost of goods sold.
    pub cost_of_goods_sold: Decimal,
    /// Reported gross profit.
    pub gross_profit: Decimal,
    /// Operating expenses.
    pub operating_expenses: Decimal,
    /// Reported operating income.
    pub operating_income: Decimal,
    /// Interest expense.
    pub interest_expense: Decimal,
    /// Income before tax.
    pub income_before_tax: Decimal,
    /// Income tax expense.
    pub income_tax_expense: Decimal,
    /// Reported net income.
    pub net_income: Decimal,
    /// Dividends paid during the period.
    pub dividends_paid: Decimal,
    /// Revenue of the prior fiscal year.
    pub prior_year_revenue: Decimal,
}

impl IncomeStatement {
    /// Builds an income statement from a JSON object, failing on the first absent field.
    pub fn from_value(value: &Value) -> Result<Self, StatementError> {
        ensure_object(value, STATEMENT)?;
        let field = |name: &str| required_amount(value, STATEMENT, &[name]);

        Ok(Self {
            revenue: field("revenue")?,
            cost_of_goods_sold: field("cost_of_goods_sold")?,
            gross_profit: field("gross_profit")?,
            operating_expenses: field("operating_expenses")?,
            operating_income: field("operating_income")?,
            interest_expense: field("interest_expense")?,
            income_before_tax: field("income_before_tax")?,
            income_tax_expense: field("income_tax_expense")?,
            net_income: field("net_income")?,
            dividends_paid: field("dividends_paid")?,
            prior_year_revenue: field("prior_year_revenue")?,
        })
    }
}

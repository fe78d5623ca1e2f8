//! A balance sheet, income statement and cash-flow statement audited together.

use serde::Serialize;
use serde_json::Value;

use super::amount::ensure_object;
use super::balance_sheet::BalanceSheet;
use super::cash_flow::CashFlowStatement;
use super::error::StatementError;
use super::income_statement::IncomeStatement;

const STATEMENT: &str = "statement_set";

/// The three statements of one company and period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementSet {
    /// Balance sheet.
    pub balance_sheet: BalanceSheet,
    /// Income statement.
    pub income_statement: IncomeStatement,
    /// Cash-flow statement.
    pub cash_flow: CashFlowStatement,
}

impl StatementSet {
    /// Groups three statements for auditing.
    #[must_use]
    pub const fn new(
        balance_sheet: BalanceSheet,
        income_statement: IncomeStatement,
        cash_flow: CashFlowStatement,
    ) -> Self {
        Self {
            balance_sheet,
            income_statement,
            cash_flow,
        }
    }

    /// Builds a set from `{balance_sheet, income_statement, cash_flow}`.
    pub fn from_value(value: &Value) -> Result<Self, StatementError> {
        ensure_object(value, STATEMENT)?;

        Ok(Self {
            balance_sheet: BalanceSheet::from_value(section(value, "balance_sheet")?)?,
            income_statement: IncomeStatement::from_value(section(value, "income_statement")?)?,
            cash_flow: CashFlowStatement::from_value(section(value, "cash_flow")?)?,
        })
    }
}

fn section<'a>(value: &'a Value, name: &str) -> Result<&'a Value, StatementError> {
    value
        .get(name)
        .ok_or_else(|| StatementError::MissingRequiredField {
            statement: STATEMENT,
            field: name.to_string(),
        })
}

/// Loads every statement set contained in a JSON document.
///
/// Three shapes are accepted:
/// - a single set object
/// - an array of set objects
/// - column form `{balance_sheets: [..], income_statements: [..], cash_flows: [..]}`
pub fn load_statement_sets(value: &Value) -> Result<Vec<StatementSet>, StatementError> {
    match value {
        Value::Array(items) => items.iter().map(StatementSet::from_value).collect(),
        Value::Object(map) if map.contains_key("balance_sheets") => load_columns(value),
        Value::Object(_) => Ok(vec![StatementSet::from_value(value)?]),
        _ => Err(StatementError::NotAnObject {
            statement: STATEMENT,
        }),
    }
}

fn column<'a>(value: &'a Value, name: &str) -> Result<&'a [Value], StatementError> {
    section(value, name)?
        .as_array()
        .map(Vec::as_slice)
        .ok_or(StatementError::NotAnObject {
            statement: STATEMENT,
        })
}

fn load_columns(value: &Value) -> Result<Vec<StatementSet>, StatementError> {
    let balance_sheets = column(value, "balance_sheets")?;
    let income_statements = column(value, "income_statements")?;
    let cash_flows = column(value, "cash_flows")?;

    if balance_sheets.len() != income_statements.len() || balance_sheets.len() != cash_flows.len()
    {
        return Err(StatementError::MismatchedBatch {
            balance_sheets: balance_sheets.len(),
            income_statements: income_statements.len(),
            cash_flows: cash_flows.len(),
        });
    }

    balance_sheets
        .iter()
        .zip(income_statements)
        .zip(cash_flows)
        .map(|((bs, is), cf)| {
            Ok(StatementSet::new(
                BalanceSheet::from_value(bs)?,
                IncomeStatement::from_value(is)?,
                CashFlowStatement::from_value(cf)?,
            ))
        })
        .collect()
}

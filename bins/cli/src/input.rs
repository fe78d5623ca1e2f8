//! Reading statement and transaction files.

use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use serde_json::Value;

use finaudit_core::benford::TransactionId;
use finaudit_core::statements::{StatementSet, load_statement_sets};
use finaudit_shared::{AppError, AppResult};

/// Reads and parses a JSON file.
pub fn read_json(path: &Path) -> AppResult<Value> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| AppError::Io(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| AppError::InvalidInput(format!("{}: {e}", path.display())))
}

/// Loads every statement set in a file, failing on the first missing field.
pub fn read_statement_sets(path: &Path) -> AppResult<Vec<StatementSet>> {
    let value = read_json(path)?;
    Ok(load_statement_sets(&value)?)
}

/// Interprets a transaction document.
///
/// Accepts an `{id: amount}` object or an array of amounts, numbered from 1.
/// Amounts may be JSON numbers or decimal strings.
pub fn parse_transactions(value: Value) -> AppResult<BTreeMap<TransactionId, Decimal>> {
    let invalid = |e: serde_json::Error| AppError::InvalidInput(format!("transactions: {e}"));

    match value {
        Value::Array(_) => {
            let amounts: Vec<Decimal> = serde_json::from_value(value).map_err(invalid)?;
            Ok((1..).zip(amounts).collect())
        }
        Value::Object(_) => serde_json::from_value(value).map_err(invalid),
        _ => Err(AppError::InvalidInput(
            "transactions: expected an object or an array".to_string(),
        )),
    }
}

/// Loads a transaction ledger from a file.
pub fn read_transactions(path: &Path) -> AppResult<BTreeMap<TransactionId, Decimal>> {
    parse_transactions(read_json(path)?)
}

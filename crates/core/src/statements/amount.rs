//! Field lookup for statements supplied as JSON values.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

use super::error::StatementError;

/// Exclusive bound on the magnitude of a single amount (10^26).
///
/// Statement totals sum a handful of amounts and must stay inside `Decimal`'s range.
pub const AMOUNT_LIMIT: Decimal =
    Decimal::from_parts(3_825_205_248, 3_704_098_002, 5_421_010, false, 0);

/// Reads an amount that must be present.
pub(crate) fn required_amount(
    root: &Value,
    statement: &'static str,
    path: &[&str],
) -> Result<Decimal, StatementError> {
    match lookup(root, path) {
        Some(node) => parse_amount(node, statement, path),
        None => Err(StatementError::MissingRequiredField {
            statement,
            field: path.join("."),
        }),
    }
}

/// Reads an amount that defaults to zero when absent or null.
pub(crate) fn optional_amount(
    root: &Value,
    statement: &'static str,
    path: &[&str],
) -> Result<Decimal, StatementError> {
    match lookup(root, path) {
        None | Some(Value::Null) => Ok(Decimal::ZERO),
        Some(node) => parse_amount(node, statement, path),
    }
}

/// Rejects anything that is not a JSON object.
pub(crate) fn ensure_object(root: &Value, statement: &'static str) -> Result<(), StatementError> {
    if root.is_object() {
        Ok(())
    } else {
        Err(StatementError::NotAnObject { statement })
    }
}

fn lookup<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(root, |node, key| node.get(key))
}

fn parse_amount(
    node: &Value,
    statement: &'static str,
    path: &[&str],
) -> Result<Decimal, StatementError> {
    let invalid = || StatementError::InvalidField {
        statement,
        field: path.join("."),
    };

    let text = match node {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return Err(invalid()),
    };

    let amount = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| invalid())?;

    if amount.abs() >= AMOUNT_LIMIT {
        return Err(StatementError::AmountOutOfRange {
            statement,
            field: path.join("."),
        });
    }
    Ok(amount)
}

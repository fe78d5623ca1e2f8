//! Statement loading errors.

use finaudit_shared::AppError;
use thiserror::Error;

/// Errors raised while turning raw input into statement records.
///
/// Rule violations are never reported here; they become findings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatementError {
    /// A field the audit relies on is absent.
    #[error("{statement}: missing required field `{field}`")]
    MissingRequiredField {
        /// Statement the field belongs to.
        statement: &'static str,
        /// Dotted path of the field.
        field: String,
    },

    /// A field is present but is not a monetary amount.
    #[error("{statement}: field `{field}` is not a monetary amount")]
    InvalidField {
        /// Statement the field belongs to.
        statement: &'static str,
        /// Dotted path of the field.
        field: String,
    },

    /// An amount is too large to audit without overflowing totals.
    #[error("{statement}: field `{field}` is outside the supported amount range")]
    AmountOutOfRange {
        /// Statement the field belongs to.
        statement: &'static str,
        /// Dotted path of the field.
        field: String,
    },

    /// The statement (or a section of it) is not a JSON object.
    #[error("{statement}: expected a JSON object")]
    NotAnObject {
        /// Statement that was malformed.
        statement: &'static str,
    },

    /// Column-style input whose statement lists differ in length.
    #[error(
        "Statement lists differ in length: {balance_sheets} balance sheets, \
         {income_statements} income statements, {cash_flows} cash flows"
    )]
    MismatchedBatch {
        /// Number of balance sheets.
        balance_sheets: usize,
        /// Number of income statements.
        income_statements: usize,
        /// Number of cash-flow statements.
        cash_flows: usize,
    },
}

impl StatementError {
    /// Returns the error code for machine-readable output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingRequiredField { .. } => "MISSING_REQUIRED_FIELD",
            Self::InvalidField { .. } => "INVALID_FIELD",
            Self::AmountOutOfRange { .. } => "AMOUNT_OUT_OF_RANGE",
            Self::NotAnObject { .. } => "NOT_AN_OBJECT",
            Self::MismatchedBatch { .. } => "MISMATCHED_BATCH",
        }
    }
}

impl From<StatementError> for AppError {
    fn from(err: StatementError) -> Self {
        match err {
            StatementError::MissingRequiredField { statement, field } => {
                Self::MissingRequiredField(format!("{statement}.{field}"))
            }
            other => Self::InvalidInput(other.to_string()),
        }
    }
}

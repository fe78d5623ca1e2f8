//! Financial statement records.
//!
//! This module holds the three statements the auditor reads:
//! - Balance sheet (assets, liabilities, equity)
//! - Income statement
//! - Cash-flow statement, whose supplementary lines default to zero
//! - Statement sets and their fail-fast loading from JSON

mod amount;
pub mod balance_sheet;
pub mod cash_flow;
pub mod error;
pub mod income_statement;
pub mod set;

pub use amount::AMOUNT_LIMIT;
pub use balance_sheet::{Assets, BalanceSheet, Equity, Liabilities};
pub use cash_flow::CashFlowStatement;
pub use error::StatementError;
pub use income_statement::IncomeStatement;
pub use set::{StatementSet, load_statement_sets};

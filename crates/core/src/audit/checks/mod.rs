//! The battery of statement checks.
//!
//! Every check is an independent observation over the raw statements: a
//! failure in one check never changes the inputs another check sees.

mod balance_sheet;
mod cash_flow;
mod cross_statement;
mod income_statement;
mod ratios;

use rust_decimal::Decimal;

use super::log::AuditLog;
use super::policy::AuditPolicy;
use crate::statements::StatementSet;

pub use balance_sheet::{BalanceSheetEquation, CurrentAssetComposition, LiabilityEquityStructure};
pub use cash_flow::{
    CashFlowReconciliation, FinancingCashFlowComponents, InvestingCashFlowComponents,
};
pub use cross_statement::{BalanceSheetConsistency, NetIncomeToOperatingCashFlow};
pub use income_statement::{IncomeStatementBounds, IncomeStatementFlow};
pub use ratios::RatioReasonableness;

/// A rule evaluated against one statement set.
pub trait AuditCheck: Send + Sync {
    /// Name of the check.
    fn name(&self) -> &'static str;

    /// Evaluates the rule, recording zero or more findings.
    ///
    /// Returns `false` when a blocking violation was recorded, signalling that
    /// the values involved are unreliable.
    fn evaluate(
        &self,
        statements: &StatementSet,
        policy: &AuditPolicy,
        log: &mut AuditLog,
    ) -> bool;
}

/// The full battery in execution order.
#[must_use]
pub fn standard_checks() -> Vec<Box<dyn AuditCheck>> {
    vec![
        Box::new(BalanceSheetEquation),
        Box::new(CurrentAssetComposition),
        Box::new(LiabilityEquityStructure),
        Box::new(IncomeStatementFlow),
        Box::new(IncomeStatementBounds),
        Box::new(CashFlowReconciliation),
        Box::new(InvestingCashFlowComponents),
        Box::new(FinancingCashFlowComponents),
        Box::new(NetIncomeToOperatingCashFlow),
        Box::new(BalanceSheetConsistency),
        Box::new(RatioReasonableness),
    ]
}

/// Formats an amount as `$1,234,567.89` (negative: `-$1,234.00`).
pub(crate) fn format_currency(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.abs().round_dp(2));
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{cents}")
}

/// `numerator / denominator * 100`, or `None` when it cannot be represented.
pub(crate) fn percent_of(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    numerator
        .checked_div(denominator)?
        .checked_mul(Decimal::ONE_HUNDRED)
}

//! Income statement checks.

use rust_decimal::Decimal;

use super::{AuditCheck, format_currency};
use crate::audit::finding::{Finding, Severity};
use crate::audit::log::AuditLog;
use crate::audit::policy::AuditPolicy;
use crate::statements::StatementSet;

/// Gross profit, operating income and net income must follow from their components.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncomeStatementFlow;

impl IncomeStatementFlow {
    /// Revenue - COGS = gross profit.
    pub const GROSS_PROFIT: &'static str = "Gross Profit Calculation (Revenue - COGS)";
    /// Gross profit - OpEx = operating income.
    pub const OPERATING_INCOME: &'static str = "Operating Income Calculation (GP - OpEx)";
    /// Operating income - interest - taxes = net income.
    pub const NET_INCOME: &'static str = "Net Income Calculation (OI - Interest - Taxes)";
}

/// Records one reconciliation step and reports whether it held.
fn reconcile(
    log: &mut AuditLog,
    policy: &AuditPolicy,
    check_name: &str,
    label: &str,
    severity: Severity,
    reported: Decimal,
    calculated: Decimal,
) -> bool {
    let finding = if policy.agrees(reported, calculated) {
        Finding::pass(check_name, format!("{label} reconciles"))
    } else {
        Finding::fail(
            check_name,
            severity,
            format!(
                "{label} mismatch: actual {} vs calculated {}",
                format_currency(reported),
                format_currency(calculated)
            ),
        )
    };

    let held = !finding.is_blocking();
    log.record(
        finding
            .with("actual", reported)
            .with("calculated", calculated)
            .with("difference", reported - calculated),
    );
    held
}

impl AuditCheck for IncomeStatementFlow {
    fn name(&self) -> &'static str {
        "Income Statement Flow"
    }

    fn evaluate(
        &self,
        statements: &StatementSet,
        policy: &AuditPolicy,
        log: &mut AuditLog,
    ) -> bool {
        let inc = &statements.income_statement;

        let gross_profit = reconcile(
            log,
            policy,
            Self::GROSS_PROFIT,
            "Gross Profit",
            Severity::Critical,
            inc.gross_profit,
            inc.revenue - inc.cost_of_goods_sold,
        );

        let operating_income = reconcile(
            log,
            policy,
            Self::OPERATING_INCOME,
            "Operating Income",
            Severity::High,
            inc.operating_income,
            inc.gross_profit - inc.operating_expenses,
        );

        let net_income = reconcile(
            log,
            policy,
            Self::NET_INCOME,
            "Net Income",
            Severity::Critical,
            inc.net_income,
            inc.operating_income - inc.interest_expense - inc.income_tax_expense,
        );

        gross_profit && operating_income && net_income
    }
}

/// Revenue and expense lines must lie within their natural bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncomeStatementBounds;

impl AuditCheck for IncomeStatementBounds {
    fn name(&self) -> &'static str {
        "Income Statement Logic"
    }

    fn evaluate(
        &self,
        statements: &StatementSet,
        _policy: &AuditPolicy,
        log: &mut AuditLog,
    ) -> bool {
        let inc = &statements.income_statement;

        if inc.revenue < Decimal::ZERO {
            log.record(
                Finding::fail(self.name(), Severity::Critical, "Revenue cannot be negative")
                    .with("item", "Revenue")
                    .with("value", inc.revenue),
            );
            return false;
        }

        if inc.cost_of_goods_sold > inc.revenue {
            log.record(
                Finding::warning(
                    self.name(),
                    "COGS exceeds Revenue (possible data quality issue)",
                )
                .with("item", "COGS > Revenue")
                .with("cogs", inc.cost_of_goods_sold)
                .with("revenue", inc.revenue),
            );
        }

        if inc.operating_expenses < Decimal::ZERO {
            log.record(
                Finding::fail(
                    self.name(),
                    Severity::High,
                    "Operating Expenses cannot be negative",
                )
                .with("item", "Operating Expenses")
                .with("value", inc.operating_expenses),
            );
            return false;
        }

        if inc.interest_expense < Decimal::ZERO {
            log.record(
                Finding::fail(self.name(), Severity::High, "Interest Expense cannot be negative")
                    .with("item", "Interest Expense")
                    .with("value", inc.interest_expense),
            );
            return false;
        }

        if inc.income_tax_expense < Decimal::ZERO {
            log.record(
                Finding::warning(
                    self.name(),
                    "Negative tax provision (possible tax benefit/carryforward)",
                )
                .with("item", "Tax Provision")
                .with("value", inc.income_tax_expense),
            );
        }

        log.record(Finding::pass(
            self.name(),
            "Revenue and expense lines are within bounds",
        ));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::tests::fixtures::sample_set;
    use rust_decimal_macros::dec;

    fn run(check: &dyn AuditCheck, set: &StatementSet) -> (bool, AuditLog) {
        let mut log = AuditLog::new();
        let ok = check.evaluate(set, &AuditPolicy::default(), &mut log);
        (ok, log)
    }

    #[test]
    fn test_all_three_flows_pass() {
        let (ok, log) = run(&IncomeStatementFlow, &sample_set());
        assert!(ok);
        let names: Vec<_> = log.passed().iter().map(|f| f.check_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                IncomeStatementFlow::GROSS_PROFIT,
                IncomeStatementFlow::OPERATING_INCOME,
                IncomeStatementFlow::NET_INCOME
            ]
        );
    }

    #[test]
    fn test_operating_income_mismatch_is_high() {
        let mut set = sample_set();
        set.income_statement.operating_income = dec!(410000);

        let (ok, log) = run(&IncomeStatementFlow, &set);
        assert!(!ok);
        // the net income step now also disagrees, since it starts from reported OI
        assert_eq!(log.errors().len(), 2);
        assert_eq!(log.errors()[0].check_name, IncomeStatementFlow::OPERATING_INCOME);
        assert_eq!(log.errors()[0].severity, Some(Severity::High));
        assert_eq!(log.errors()[0].amount("difference"), Some(dec!(10000)));
        assert_eq!(log.errors()[1].severity, Some(Severity::Critical));
        assert_eq!(log.passed().len(), 1);
    }

    #[test]
    fn test_gross_profit_mismatch_message() {
        let mut set = sample_set();
        set.income_statement.gross_profit = dec!(999000);

        let (_, log) = run(&IncomeStatementFlow, &set);
        let error = &log.errors()[0];
        assert_eq!(error.check_name, IncomeStatementFlow::GROSS_PROFIT);
        assert_eq!(
            error.message,
            "Gross Profit mismatch: actual $999,000.00 vs calculated $1,000,000.00"
        );
    }

    #[test]
    fn test_negative_revenue_short_circuits() {
        let mut set = sample_set();
        set.income_statement.revenue = dec!(-1);
        set.income_statement.operating_expenses = dec!(-1);

        let (ok, log) = run(&IncomeStatementBounds, &set);
        assert!(!ok);
        assert_eq!(log.len(), 1);
        assert_eq!(log.errors()[0].severity, Some(Severity::Critical));
    }

    #[test]
    fn test_cogs_above_revenue_and_tax_benefit_warn() {
        let mut set = sample_set();
        set.income_statement.cost_of_goods_sold = dec!(3000000);
        set.income_statement.income_tax_expense = dec!(-5000);

        let (ok, log) = run(&IncomeStatementBounds, &set);
        assert!(ok);
        assert_eq!(log.warnings().len(), 2);
        assert_eq!(log.passed().len(), 1);
    }

    #[test]
    fn test_negative_interest_fails_high() {
        let mut set = sample_set();
        set.income_statement.interest_expense = dec!(-30000);

        let (ok, log) = run(&IncomeStatementBounds, &set);
        assert!(!ok);
        assert_eq!(log.errors()[0].text("item"), Some("Interest Expense"));
        assert_eq!(log.errors()[0].severity, Some(Severity::High));
    }
}

//! Checks that read more than one statement.

use rust_decimal::Decimal;

use super::{AuditCheck, format_currency};
use crate::audit::finding::{Finding, Severity};
use crate::audit::log::AuditLog;
use crate::audit::policy::AuditPolicy;
use crate::statements::StatementSet;

/// Operating cash flow should stay within a band around positive net income.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetIncomeToOperatingCashFlow;

impl AuditCheck for NetIncomeToOperatingCashFlow {
    fn name(&self) -> &'static str {
        "Net Income to Operating CF"
    }

    fn evaluate(
        &self,
        statements: &StatementSet,
        policy: &AuditPolicy,
        log: &mut AuditLog,
    ) -> bool {
        let net_income = statements.income_statement.net_income;
        let ocf = statements.cash_flow.operating_activities;

        if net_income <= Decimal::ZERO {
            log.record(
                Finding::pass(self.name(), "Unable to validate when Net Income <= 0")
                    .with("net_income", net_income)
                    .with("operating_cf", ocf),
            );
            return true;
        }

        let lower = net_income.saturating_mul(policy.ocf_lower_multiple);
        let upper = net_income.saturating_mul(policy.ocf_upper_multiple);
        let ratio = ocf
            .checked_div(net_income)
            .map(|r| r.round_dp(2))
            .unwrap_or_default();
        let within_range = lower <= ocf && ocf <= upper;

        let finding = if within_range {
            Finding::pass(
                self.name(),
                "Operating CF is within the expected range relative to NI",
            )
        } else {
            Finding::warning(
                self.name(),
                "Operating CF outside expected range relative to NI (check working capital)",
            )
            .with(
                "expected_range",
                format!("{} to {}", format_currency(lower), format_currency(upper)),
            )
        };

        log.record(
            finding
                .with("net_income", net_income)
                .with("operating_cf", ocf)
                .with("ratio", ratio)
                .with("within_range", within_range),
        );
        true
    }
}

/// Short-term debt and common stock cannot exceed the totals that contain them.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceSheetConsistency;

impl AuditCheck for BalanceSheetConsistency {
    fn name(&self) -> &'static str {
        "Balance Sheet Item Consistency"
    }

    fn evaluate(
        &self,
        statements: &StatementSet,
        _policy: &AuditPolicy,
        log: &mut AuditLog,
    ) -> bool {
        let bs = &statements.balance_sheet;
        let total_liabilities = bs.total_liabilities();
        let total_equity = bs.total_equity();
        let short_term_debt = bs.liabilities.short_term_debt;
        let common_stock = bs.equity.common_stock;

        if short_term_debt > Decimal::ZERO && short_term_debt > total_liabilities {
            log.record(
                Finding::fail(
                    self.name(),
                    Severity::High,
                    "Short-term Debt exceeds Total Liabilities",
                )
                .with("short_term_debt", short_term_debt)
                .with("total_liabilities", total_liabilities),
            );
            return false;
        }

        if common_stock > Decimal::ZERO && common_stock > total_equity {
            log.record(
                Finding::fail(self.name(), Severity::High, "Common Stock exceeds Total Equity")
                    .with("common_stock", common_stock)
                    .with("total_equity", total_equity),
            );
            return false;
        }

        log.record(Finding::pass(
            self.name(),
            "Balance sheet line items fit within their totals",
        ));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::finding::FindingStatus;
    use crate::audit::tests::fixtures::sample_set;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(320000), FindingStatus::Pass, dec!(1.15))]
    #[case(dec!(600000), FindingStatus::Warning, dec!(2.16))]
    #[case(dec!(138750), FindingStatus::Pass, dec!(0.5))]
    #[case(dec!(555000), FindingStatus::Pass, dec!(2))]
    #[case(dec!(100000), FindingStatus::Warning, dec!(0.36))]
    fn test_ocf_band(
        #[case] ocf: Decimal,
        #[case] expected: FindingStatus,
        #[case] ratio: Decimal,
    ) {
        let mut set = sample_set();
        set.cash_flow.operating_activities = ocf;

        let mut log = AuditLog::new();
        assert!(NetIncomeToOperatingCashFlow.evaluate(&set, &AuditPolicy::default(), &mut log));
        assert_eq!(log.len(), 1);

        let finding = log
            .passed()
            .iter()
            .chain(log.warnings())
            .next()
            .unwrap();
        assert_eq!(finding.status, expected);
        assert_eq!(finding.amount("ratio"), Some(ratio));
    }

    #[test]
    fn test_non_positive_net_income_skips_band() {
        let mut set = sample_set();
        set.income_statement.net_income = dec!(-10000);
        set.cash_flow.operating_activities = dec!(5000000);

        let mut log = AuditLog::new();
        assert!(NetIncomeToOperatingCashFlow.evaluate(&set, &AuditPolicy::default(), &mut log));
        assert_eq!(log.passed().len(), 1);
        assert!(log.warnings().is_empty());
    }

    #[test]
    fn test_warning_carries_expected_range() {
        let mut set = sample_set();
        set.cash_flow.operating_activities = dec!(600000);

        let mut log = AuditLog::new();
        NetIncomeToOperatingCashFlow.evaluate(&set, &AuditPolicy::default(), &mut log);
        assert_eq!(
            log.warnings()[0].text("expected_range"),
            Some("$138,750.00 to $555,000.00")
        );
    }

    #[test]
    fn test_short_term_debt_above_liabilities() {
        let mut set = sample_set();
        set.balance_sheet.liabilities.short_term_debt = dec!(800000);

        let mut log = AuditLog::new();
        assert!(!BalanceSheetConsistency.evaluate(&set, &AuditPolicy::default(), &mut log));
        assert_eq!(log.errors()[0].severity, Some(Severity::High));
        assert_eq!(log.errors()[0].amount("short_term_debt"), Some(dec!(800000)));
    }

    #[test]
    fn test_common_stock_above_equity_fails() {
        let mut set = sample_set();
        set.balance_sheet.equity.retained_earnings = dec!(-50000);

        let mut log = AuditLog::new();
        assert!(!BalanceSheetConsistency.evaluate(&set, &AuditPolicy::default(), &mut log));
        assert_eq!(log.errors()[0].message, "Common Stock exceeds Total Equity");
        assert_eq!(log.errors()[0].status, FindingStatus::Fail);
    }
}

//! Property-based tests for the statement validator.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::checks::{AuditCheck, BalanceSheetEquation};
use super::finding::{FindingStatus, Severity};
use super::log::AuditLog;
use super::policy::AuditPolicy;
use super::report::AuditStatus;
use super::tests::fixtures::sample_set;
use super::validator::StatementValidator;
use crate::statements::StatementSet;

/// Strategy to generate an amount in whole cents up to 10,000,000.00.
fn amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a non-zero discrepancy.
fn discrepancy() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2)),
        (1i64..100_000_000i64).prop_map(|cents| Decimal::new(-cents, 2)),
    ]
}

/// Builds a set whose balance sheet totals are the given figures.
fn with_totals(
    current_assets: Decimal,
    non_current_assets: Decimal,
    current_liabilities: Decimal,
    non_current_liabilities: Decimal,
    common_stock: Decimal,
) -> StatementSet {
    let mut set = sample_set();
    let bs = &mut set.balance_sheet;
    bs.assets.current_assets = current_assets;
    bs.assets.non_current_assets = non_current_assets;
    bs.liabilities.current_liabilities = current_liabilities;
    bs.liabilities.non_current_liabilities = non_current_liabilities;
    bs.equity.common_stock = common_stock;
    bs.equity.retained_earnings = current_assets + non_current_assets
        - current_liabilities
        - non_current_liabilities
        - common_stock;
    set
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* balanced sheet, the equation check passes with a zero difference.
    #[test]
    fn prop_balanced_sheet_passes(
        ca in amount(), nca in amount(), cl in amount(), ncl in amount(), cs in amount(),
    ) {
        let set = with_totals(ca, nca, cl, ncl, cs);
        let mut log = AuditLog::new();

        prop_assert!(BalanceSheetEquation.evaluate(&set, &AuditPolicy::default(), &mut log));
        prop_assert_eq!(log.len(), 1);
        prop_assert_eq!(log.passed()[0].status, FindingStatus::Pass);
        prop_assert_eq!(log.passed()[0].amount("difference"), Some(Decimal::ZERO));
    }

    /// *For any* unbalanced sheet, the equation check fails critically and the
    /// reported difference is the exact discrepancy.
    #[test]
    fn prop_unbalanced_sheet_fails(
        ca in amount(), nca in amount(), cl in amount(), ncl in amount(), cs in amount(),
        delta in discrepancy(),
    ) {
        let mut set = with_totals(ca, nca, cl, ncl, cs);
        set.balance_sheet.equity.retained_earnings -= delta;

        let mut log = AuditLog::new();
        prop_assert!(!BalanceSheetEquation.evaluate(&set, &AuditPolicy::default(), &mut log));
        prop_assert_eq!(log.errors().len(), 1);
        prop_assert_eq!(log.errors()[0].severity, Some(Severity::Critical));
        prop_assert_eq!(log.errors()[0].amount("difference"), Some(delta));

        let report = StatementValidator::default().run_all(&set);
        prop_assert_eq!(report.summary.status, AuditStatus::Failed);
    }

    /// *For any* statement set, the verdict is FAILED exactly when errors exist
    /// and the counts agree with the finding lists.
    #[test]
    fn prop_summary_matches_findings(
        revenue in amount(), cogs in amount(), opex in amount(),
        ocf in amount(), depreciation in amount(), cash in amount(),
    ) {
        let mut set = sample_set();
        set.income_statement.revenue = revenue;
        set.income_statement.cost_of_goods_sold = cogs;
        set.income_statement.operating_expenses = opex;
        set.cash_flow.operating_activities = ocf;
        set.cash_flow.depreciation = depreciation;
        set.balance_sheet.assets.cash = cash;

        let report = StatementValidator::default().run_all(&set);
        let s = &report.summary;

        prop_assert_eq!(s.status == AuditStatus::Failed, !report.errors.is_empty());
        prop_assert_eq!(s.passed, report.passed_checks.len());
        prop_assert_eq!(s.failed, report.errors.len());
        prop_assert_eq!(s.warnings, report.warnings.len());
        prop_assert_eq!(s.total_checks, s.passed + s.failed);
        prop_assert!(report.errors.iter().all(|f| f.severity.is_some()));
        prop_assert!(report.passed_checks.iter().all(|f| f.severity.is_none()));
    }

    /// *For any* statement set, auditing twice yields the same findings.
    #[test]
    fn prop_runs_are_independent(ocf in amount(), gross_profit in amount()) {
        let mut set = sample_set();
        set.cash_flow.operating_activities = ocf;
        set.income_statement.gross_profit = gross_profit;

        let validator = StatementValidator::default();
        let first = validator.run_all(&set);
        let second = validator.run_all(&set);

        prop_assert_eq!(first.passed_checks, second.passed_checks);
        prop_assert_eq!(first.warnings, second.warnings);
        prop_assert_eq!(first.errors, second.errors);
    }
}

//! Cash-flow statement checks.

use rust_decimal::Decimal;

use super::{AuditCheck, format_currency};
use crate::audit::finding::{Finding, Severity};
use crate::audit::log::AuditLog;
use crate::audit::policy::AuditPolicy;
use crate::statements::StatementSet;

/// Records the net change in cash implied by the three activity totals.
#[derive(Debug, Clone, Copy, Default)]
pub struct CashFlowReconciliation;

impl AuditCheck for CashFlowReconciliation {
    fn name(&self) -> &'static str {
        "Cash Flow Reconciliation"
    }

    fn evaluate(
        &self,
        statements: &StatementSet,
        _policy: &AuditPolicy,
        log: &mut AuditLog,
    ) -> bool {
        let cf = &statements.cash_flow;
        let net_change = cf.net_change();

        log.record(
            Finding::pass(
                self.name(),
                format!("Net change in cash: {}", format_currency(net_change)),
            )
            .with("ocf", cf.operating_activities)
            .with("icf", cf.investing_activities)
            .with("fcf", cf.financing_activities)
            .with("net_change", net_change),
        );
        true
    }
}

/// Capital expenditure should be an outflow; depreciation cannot be negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvestingCashFlowComponents;

impl AuditCheck for InvestingCashFlowComponents {
    fn name(&self) -> &'static str {
        "Investing CF Components"
    }

    fn evaluate(
        &self,
        statements: &StatementSet,
        _policy: &AuditPolicy,
        log: &mut AuditLog,
    ) -> bool {
        let cf = &statements.cash_flow;

        if cf.capital_expenditure > Decimal::ZERO {
            log.record(
                Finding::warning(
                    self.name(),
                    "CapEx is positive (typically should be negative/outflow)",
                )
                .with("item", "Capital Expenditure")
                .with("value", cf.capital_expenditure),
            );
        }

        if cf.depreciation < Decimal::ZERO {
            log.record(
                Finding::fail(self.name(), Severity::Medium, "Depreciation should be non-negative")
                    .with("item", "Depreciation")
                    .with("value", cf.depreciation),
            );
            return false;
        }

        log.record(Finding::pass(self.name(), "Investing components are plausible"));
        true
    }
}

/// Sign conventions of the financing lines. Informational only.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinancingCashFlowComponents;

impl AuditCheck for FinancingCashFlowComponents {
    fn name(&self) -> &'static str {
        "Financing CF Components"
    }

    fn evaluate(
        &self,
        statements: &StatementSet,
        _policy: &AuditPolicy,
        log: &mut AuditLog,
    ) -> bool {
        let cf = &statements.cash_flow;
        let unusual = [
            (
                cf.debt_issuance < Decimal::ZERO,
                "Debt Issuance",
                cf.debt_issuance,
                "Debt issuance is negative (expected to be positive)",
            ),
            (
                cf.debt_repayment > Decimal::ZERO,
                "Debt Repayment",
                cf.debt_repayment,
                "Debt repayment is positive (typically should be negative)",
            ),
            (
                cf.dividends_paid > Decimal::ZERO,
                "Dividends Paid",
                cf.dividends_paid,
                "Dividends paid is positive (typically should be negative)",
            ),
        ];

        for (_, item, value, message) in unusual.into_iter().filter(|(flagged, ..)| *flagged) {
            log.record(
                Finding::warning(self.name(), message)
                    .with("item", item)
                    .with("value", value),
            );
        }

        log.record(Finding::pass(self.name(), "Financing components reviewed"));
        true
    }
}

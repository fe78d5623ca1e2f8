//! Balance sheet checks.

use rust_decimal::Decimal;

use super::{AuditCheck, format_currency};
use crate::audit::finding::{Finding, Severity};
use crate::audit::log::AuditLog;
use crate::audit::policy::AuditPolicy;
use crate::statements::StatementSet;

/// Assets must equal liabilities plus equity.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceSheetEquation;

impl AuditCheck for BalanceSheetEquation {
    fn name(&self) -> &'static str {
        "Balance Sheet Equation (A = L + E)"
    }

    fn evaluate(
        &self,
        statements: &StatementSet,
        policy: &AuditPolicy,
        log: &mut AuditLog,
    ) -> bool {
        let bs = &statements.balance_sheet;
        let total_assets = bs.total_assets();
        let total_liabilities = bs.total_liabilities();
        let total_equity = bs.total_equity();
        let liabilities_plus_equity = total_liabilities + total_equity;
        let difference = total_assets - liabilities_plus_equity;

        let finding = if policy.agrees(total_assets, liabilities_plus_equity) {
            Finding::pass(self.name(), "Assets equal Liabilities + Equity")
        } else {
            Finding::fail(
                self.name(),
                Severity::Critical,
                format!(
                    "Assets ({}) != Liabilities ({}) + Equity ({})",
                    format_currency(total_assets),
                    format_currency(total_liabilities),
                    format_currency(total_equity)
                ),
            )
        };

        let balanced = !finding.is_blocking();
        log.record(
            finding
                .with("assets", total_assets)
                .with("liabilities_plus_equity", liabilities_plus_equity)
                .with("difference", difference),
        );
        balanced
    }
}

/// Cash, receivables and inventory cannot be negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentAssetComposition;

impl AuditCheck for CurrentAssetComposition {
    fn name(&self) -> &'static str {
        "Current Assets Composition"
    }

    fn evaluate(
        &self,
        statements: &StatementSet,
        _policy: &AuditPolicy,
        log: &mut AuditLog,
    ) -> bool {
        let assets = &statements.balance_sheet.assets;
        let components = [
            ("Cash", assets.cash),
            ("Accounts Receivable", assets.accounts_receivable),
            ("Inventory", assets.inventory),
        ];

        if let Some((item, value)) = components.into_iter().find(|(_, v)| *v < Decimal::ZERO) {
            log.record(
                Finding::fail(
                    self.name(),
                    Severity::High,
                    format!("{item} is negative: {}", format_currency(value)),
                )
                .with("item", item)
                .with("value", value),
            );
            return false;
        }

        log.record(Finding::pass(
            self.name(),
            "Cash, receivables and inventory are non-negative",
        ));
        true
    }
}

/// Liabilities and common stock cannot be negative; negative equity is flagged.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiabilityEquityStructure;

impl AuditCheck for LiabilityEquityStructure {
    fn name(&self) -> &'static str {
        "Liability and Equity Structure"
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

        if total_liabilities < Decimal::ZERO {
            log.record(
                Finding::fail(
                    self.name(),
                    Severity::Critical,
                    "Total Liabilities cannot be negative",
                )
                .with("item", "Total Liabilities")
                .with("value", total_liabilities),
            );
            return false;
        }

        if total_equity < Decimal::ZERO {
            log.record(
                Finding::warning(
                    self.name(),
                    "Negative Equity indicates insolvency (liabilities > assets)",
                )
                .with("item", "Total Equity")
                .with("value", total_equity),
            );
        }

        let common_stock = bs.equity.common_stock;
        if common_stock < Decimal::ZERO {
            log.record(
                Finding::fail(self.name(), Severity::Critical, "Common Stock cannot be negative")
                    .with("item", "Common Stock")
                    .with("value", common_stock),
            );
            return false;
        }

        log.record(Finding::pass(
            self.name(),
            "Liabilities and common stock are non-negative",
        ));
        true
    }
}

//! Plausibility bands for headline ratios.

use rust_decimal::Decimal;

use super::{AuditCheck, percent_of};
use crate::audit::finding::Finding;
use crate::audit::log::AuditLog;
use crate::audit::policy::{AuditPolicy, PercentBand};
use crate::statements::StatementSet;

/// Margins and leverage must fall inside generous plausibility bands.
///
/// Out-of-band ratios only warn.
#[derive(Debug, Clone, Copy, Default)]
pub struct RatioReasonableness;

impl RatioReasonableness {
    fn assess(
        &self,
        log: &mut AuditLog,
        ratio: &str,
        percent: Option<Decimal>,
        band: PercentBand,
        unusual: &str,
    ) {
        let check_name = format!("{} - {ratio}", self.name());

        let finding = match percent {
            Some(value) if band.contains(value) => {
                Finding::pass(check_name, format!("{ratio} within expected range"))
                    .with("value", format!("{:.2}%", value.round_dp(2)))
                    .with("percent", value.round_dp(2))
            }
            Some(value) => Finding::warning(check_name, unusual)
                .with("value", format!("{:.2}%", value.round_dp(2)))
                .with("percent", value.round_dp(2)),
            None => Finding::warning(check_name, format!("{ratio} could not be computed")),
        };

        log.record(
            finding
                .with("min_percent", band.min)
                .with("max_percent", band.max),
        );
    }
}

impl AuditCheck for RatioReasonableness {
    fn name(&self) -> &'static str {
        "Financial Ratios Reasonableness"
    }

    fn evaluate(
        &self,
        statements: &StatementSet,
        policy: &AuditPolicy,
        log: &mut AuditLog,
    ) -> bool {
        let inc = &statements.income_statement;
        let bs = &statements.balance_sheet;

        // zero revenue would divide by zero; margins are taken over one unit instead
        let revenue = if inc.revenue.is_zero() {
            Decimal::ONE
        } else {
            inc.revenue
        };

        self.assess(
            log,
            "Gross Margin",
            percent_of(inc.gross_profit, revenue),
            policy.gross_margin,
            "Unusual gross margin detected",
        );
        self.assess(
            log,
            "Operating Margin",
            percent_of(inc.operating_income, revenue),
            policy.operating_margin,
            "Unusual operating margin detected",
        );
        self.assess(
            log,
            "Net Margin",
            percent_of(inc.net_income, revenue),
            policy.net_margin,
            "Unusual net margin detected",
        );

        let total_assets = bs.total_assets();
        if !total_assets.is_zero() {
            self.assess(
                log,
                "Debt to Assets",
                percent_of(bs.total_liabilities(), total_assets),
                policy.debt_to_assets,
                "Debt to Assets ratio outside normal range",
            );
        }

        true
    }
}

//! Random statement sets with realistic proportions.

use finaudit_core::statements::{
    Assets, BalanceSheet, CashFlowStatement, Equity, IncomeStatement, Liabilities, StatementSet,
};
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Basis points in one whole.
const BASIS: i64 = 10_000;

/// Whether generated balance sheets satisfy the accounting equation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceMode {
    /// Equity is derived from assets minus liabilities.
    Balanced,
    /// Retained earnings carry an injected error of 10,000 to 100,000.
    Unbalanced,
    /// Each set is balanced or unbalanced with equal probability.
    #[default]
    Random,
}

/// Scales `value` by a fraction drawn uniformly from `[low_bp, high_bp]` basis points,
/// truncating toward zero.
fn scale<R: Rng + ?Sized>(rng: &mut R, value: i64, low_bp: i64, high_bp: i64) -> i64 {
    value * rng.random_range(low_bp..=high_bp) / BASIS
}

fn amount(value: i64) -> Decimal {
    Decimal::from(value)
}

fn income_statement<R: Rng + ?Sized>(rng: &mut R) -> IncomeStatement {
    let revenue = rng.random_range(1_500_000..=4_000_000i64);
    let cost_of_goods_sold = scale(rng, revenue, 5_000, 6_500);
    let gross_profit = revenue - cost_of_goods_sold;

    let operating_expenses = scale(rng, revenue, 1_500, 3_000);
    let operating_income = gross_profit - operating_expenses;

    let interest_expense = rng.random_range(20_000..=80_000i64);
    let income_before_tax = operating_income - interest_expense;

    let income_tax_expense = if income_before_tax > 0 {
        scale(rng, income_before_tax, 2_000, 3_000)
    } else {
        0
    };
    let net_income = income_before_tax - income_tax_expense;

    let dividends_paid = if net_income > 0 {
        scale(rng, net_income, 1_000, 3_000)
    } else {
        0
    };
    let prior_year_revenue = scale(rng, revenue, 8_000, 9_500);

    IncomeStatement {
        revenue: amount(revenue),
        cost_of_goods_sold: amount(cost_of_goods_sold),
        gross_profit: amount(gross_profit),
        operating_expenses: amount(operating_expenses),
        operating_income: amount(operating_income),
        interest_expense: amount(interest_expense),
        income_before_tax: amount(income_before_tax),
        income_tax_expense: amount(income_tax_expense),
        net_income: amount(net_income),
        dividends_paid: amount(dividends_paid),
        prior_year_revenue: amount(prior_year_revenue),
    }
}

fn balance_sheet<R: Rng + ?Sized>(rng: &mut R, balanced: bool) -> BalanceSheet {
    let cash = rng.random_range(50_000..=200_000i64);
    let accounts_receivable = rng.random_range(80_000..=300_000i64);
    let inventory = rng.random_range(100_000..=400_000i64);
    let current_assets = cash + accounts_receivable + inventory;

    let property_plant_equipment = rng.random_range(500_000..=1_500_000i64);
    let accumulated_depreciation = -rng.random_range(100_000..=400_000i64);
    let intangible_assets = rng.random_range(50_000..=300_000i64);
    let non_current_assets =
        property_plant_equipment + accumulated_depreciation + intangible_assets;

    let accounts_payable = rng.random_range(80_000..=250_000i64);
    let short_term_debt = rng.random_range(50_000..=200_000i64);
    let accrued_expenses = rng.random_range(30_000..=100_000i64);
    let current_liabilities = accounts_payable + short_term_debt + accrued_expenses;

    let long_term_debt = rng.random_range(200_000..=800_000i64);
    let non_current_liabilities = long_term_debt;

    let total_equity =
        current_assets + non_current_assets - current_liabilities - non_current_liabilities;

    let (common_stock, retained_earnings) = if balanced {
        let common_stock = if total_equity > 0 {
            let min = total_equity * 2 / 10;
            let max = total_equity * 4 / 10;
            if min < max { rng.random_range(min..=max) } else { min }
        } else {
            rng.random_range(100_000..=300_000i64)
        };
        (common_stock, total_equity - common_stock)
    } else {
        let common_stock = rng.random_range(100_000..=300_000i64);
        let magnitude = rng.random_range(10_000..=100_000i64);
        let error = if rng.random_bool(0.5) { magnitude } else { -magnitude };
        let mut retained_earnings = rng.random_range(100_000..=500_000i64) + error;
        // a random draw can land on the balancing figure
        if common_stock + retained_earnings == total_equity {
            retained_earnings += error;
        }
        (common_stock, retained_earnings)
    };

    BalanceSheet {
        assets: Assets {
            current_assets: amount(current_assets),
            cash: amount(cash),
            accounts_receivable: amount(accounts_receivable),
            inventory: amount(inventory),
            non_current_assets: amount(non_current_assets),
            property_plant_equipment: amount(property_plant_equipment),
            accumulated_depreciation: amount(accumulated_depreciation),
            intangible_assets: amount(intangible_assets),
        },
        liabilities: Liabilities {
            current_liabilities: amount(current_liabilities),
            accounts_payable: amount(accounts_payable),
            short_term_debt: amount(short_term_debt),
            accrued_expenses: amount(accrued_expenses),
            non_current_liabilities: amount(non_current_liabilities),
            long_term_debt: amount(long_term_debt),
        },
        equity: Equity {
            common_stock: amount(common_stock),
            retained_earnings: amount(retained_earnings),
        },
    }
}

fn cash_flow<R: Rng + ?Sized>(rng: &mut R, income: &IncomeStatement) -> CashFlowStatement {
    let net_income = income.net_income.to_i64().unwrap_or_default();
    let dividends_paid = income.dividends_paid.to_i64().unwrap_or_default();

    let operating_activities = scale(rng, net_income, 9_000, 13_000);
    let investing_activities = -rng.random_range(100_000..=300_000i64);
    let financing_activities = rng.random_range(-100_000..=200_000i64) - dividends_paid;

    CashFlowStatement {
        operating_activities: amount(operating_activities),
        investing_activities: amount(investing_activities),
        financing_activities: amount(financing_activities),
        ..CashFlowStatement::default()
    }
}

/// Generates `count` statement sets.
///
/// Income statements always satisfy their own arithmetic; only the balance
/// sheet equation depends on `mode`. Component cash-flow lines are left at zero.
pub fn generate_statement_sets<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    mode: BalanceMode,
) -> Vec<StatementSet> {
    let sets: Vec<_> = (0..count)
        .map(|_| {
            let balanced = match mode {
                BalanceMode::Balanced => true,
                BalanceMode::Unbalanced => false,
                BalanceMode::Random => rng.random_bool(0.5),
            };

            let income = income_statement(rng);
            let sheet = balance_sheet(rng, balanced);
            let flows = cash_flow(rng, &income);
            StatementSet::new(sheet, income, flows)
        })
        .collect();

    debug!(count, mode = ?mode, "Generated statement sets");
    sets
}

#[cfg(test)]
mod tests {
    use super::*;
    use finaudit_core::audit::{FindingStatus, run_all};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const EQUATION: &str = "Balance Sheet Equation (A = L + E)";

    fn equation_status(set: &StatementSet) -> FindingStatus {
        run_all(set).finding(EQUATION).expect("equation finding").status
    }

    #[test]
    fn test_balanced_sets_satisfy_equation() {
        let mut rng = StdRng::seed_from_u64(100);
        let sets = generate_statement_sets(&mut rng, 50, BalanceMode::Balanced);

        assert_eq!(sets.len(), 50);
        for set in &sets {
            let bs = &set.balance_sheet;
            assert_eq!(bs.total_assets(), bs.total_liabilities() + bs.total_equity());
            assert_eq!(equation_status(set), FindingStatus::Pass);
        }
    }

    #[test]
    fn test_unbalanced_sets_fail_equation() {
        let mut rng = StdRng::seed_from_u64(7);
        for set in generate_statement_sets(&mut rng, 50, BalanceMode::Unbalanced) {
            assert_eq!(equation_status(&set), FindingStatus::Fail);
        }
    }

    #[test]
    fn test_income_statements_are_internally_consistent() {
        let mut rng = StdRng::seed_from_u64(3);
        for set in generate_statement_sets(&mut rng, 50, BalanceMode::Random) {
            let is = &set.income_statement;
            assert_eq!(is.gross_profit, is.revenue - is.cost_of_goods_sold);
            assert_eq!(is.operating_income, is.gross_profit - is.operating_expenses);
            assert_eq!(
                is.net_income,
                is.operating_income - is.interest_expense - is.income_tax_expense
            );
            assert!(
                is.revenue >= Decimal::from(1_500_000) && is.revenue <= Decimal::from(4_000_000)
            );
            assert_eq!(set.cash_flow.depreciation, Decimal::ZERO);
        }
    }

    #[test]
    fn test_same_seed_same_sets() {
        let first =
            generate_statement_sets(&mut StdRng::seed_from_u64(42), 5, BalanceMode::Random);
        let second =
            generate_statement_sets(&mut StdRng::seed_from_u64(42), 5, BalanceMode::Random);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_statement_sets(&mut rng, 0, BalanceMode::Balanced).is_empty());
    }
}

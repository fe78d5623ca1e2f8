//! Property-based tests for the Benford analyzer.

use std::collections::BTreeMap;

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::analyzer::{BenfordAnalyzer, extract_leading_digit};
use super::types::TransactionId;

/// Strategy to generate a ledger of up to 300 amounts in cents, zeros included.
fn ledger() -> impl Strategy<Value = BTreeMap<TransactionId, Decimal>> {
    prop::collection::btree_map(
        any::<u64>(),
        (-10_000_000_000i64..10_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2)),
        0..300,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* ledger, the MAD stays within [0, 2/9] and the digit counts
    /// account for every non-zero record.
    #[test]
    fn prop_counts_and_mad_bounds(ledger in ledger()) {
        let analysis = BenfordAnalyzer::new().analyze(&ledger);

        prop_assert!(analysis.mad >= 0.0);
        prop_assert!(analysis.mad <= 0.22223);
        prop_assert_eq!(analysis.digits.len(), 9);

        let counted: u64 = analysis.digits.values().map(|d| d.actual_value).sum();
        prop_assert_eq!(counted, analysis.sample_size);
        prop_assert_eq!(analysis.sample_size + analysis.skipped, ledger.len() as u64);
    }

    /// *For any* ledger, analyzing twice yields the same result.
    #[test]
    fn prop_analysis_is_idempotent(ledger in ledger()) {
        let analyzer = BenfordAnalyzer::new();
        prop_assert_eq!(analyzer.analyze(&ledger), analyzer.analyze(&ledger));
    }

    /// *For any* non-zero amount, the leading digit ignores sign and scale.
    #[test]
    fn prop_leading_digit_ignores_sign_and_scale(
        cents in 1i64..10_000_000_000i64,
        scale in 0u32..8,
    ) {
        let amount = Decimal::new(cents, scale);
        let digit = extract_leading_digit(amount);

        prop_assert!(digit.is_some_and(|d| (1..=9).contains(&d)));
        prop_assert_eq!(digit, extract_leading_digit(-amount));
        let first_char = cents
            .to_string()
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .and_then(|d| u8::try_from(d).ok());
        prop_assert_eq!(digit, first_char);
    }
}

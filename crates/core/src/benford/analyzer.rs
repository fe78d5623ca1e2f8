//! Leading-digit distribution analysis.

use std::collections::BTreeMap;

use finaudit_shared::BenfordSettings;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::types::{BenfordAnalysis, Conformity, DigitFrequency, TransactionId};

/// MAD below which data closely conforms.
pub const CLOSE_CONFORMITY_LIMIT: f64 = 0.006;
/// MAD below which conformity is acceptable.
pub const ACCEPTABLE_CONFORMITY_LIMIT: f64 = 0.012;
/// MAD below which conformity is marginally acceptable.
pub const MARGINAL_CONFORMITY_LIMIT: f64 = 0.015;

/// Compares transaction amounts against Benford's Law.
///
/// The expected probabilities are computed once at construction and never
/// change, so one analyzer can serve concurrent analyses.
#[derive(Debug, Clone)]
pub struct BenfordAnalyzer {
    expected: [f64; 9],
    min_sample_size: u64,
}

impl BenfordAnalyzer {
    /// Creates an analyzer with the default minimum sample size.
    #[must_use]
    pub fn new() -> Self {
        Self::with_min_sample_size(BenfordSettings::default().min_sample_size)
    }

    /// Creates an analyzer that flags samples smaller than `min_sample_size`.
    #[must_use]
    pub fn with_min_sample_size(min_sample_size: u64) -> Self {
        let mut expected = [0.0; 9];
        for (slot, digit) in expected.iter_mut().zip(1u8..=9) {
            *slot = (1.0 + 1.0 / f64::from(digit)).log10();
        }

        Self {
            expected,
            min_sample_size,
        }
    }

    /// Probability of `digit` (1-9) leading a number, `log10(1 + 1/d)`.
    #[must_use]
    pub fn expected_probability(&self, digit: u8) -> Option<f64> {
        digit
            .checked_sub(1)
            .and_then(|i| self.expected.get(usize::from(i)))
            .copied()
    }

    /// Analyzes a transaction ledger keyed by id.
    #[must_use]
    pub fn analyze(&self, transactions: &BTreeMap<TransactionId, Decimal>) -> BenfordAnalysis {
        self.analyze_amounts(transactions.values())
    }

    /// Analyzes any collection of amounts.
    ///
    /// Zero amounts have no leading digit and are excluded from the tally.
    /// An empty tally yields all-zero proportions rather than an error.
    pub fn analyze_amounts<'a, I>(&self, amounts: I) -> BenfordAnalysis
    where
        I: IntoIterator<Item = &'a Decimal>,
    {
        let mut counts = [0u64; 9];
        let mut skipped = 0u64;

        for amount in amounts {
            match extract_leading_digit(*amount) {
                Some(digit) => counts[usize::from(digit - 1)] += 1,
                None => skipped += 1,
            }
        }

        let sample_size: u64 = counts.iter().sum();
        let total = sample_size as f64;

        let mut digits = BTreeMap::new();
        let mut deviation_sum = 0.0;
        for ((digit, count), expected) in (1u8..=9).zip(counts).zip(self.expected) {
            let actual_proportion = if sample_size > 0 {
                count as f64 / total
            } else {
                0.0
            };
            deviation_sum += (actual_proportion - expected).abs();

            digits.insert(
                digit,
                DigitFrequency {
                    expected_value: round_to(expected * total, 1),
                    actual_value: count,
                    expected_proportion: expected,
                    actual_proportion,
                },
            );
        }

        let mad = round_to(deviation_sum / 9.0, 5);
        let conformity = interpret_mad(mad);
        let sample_adequate = sample_size >= self.min_sample_size;

        if !sample_adequate {
            warn!(
                sample_size,
                min_sample_size = self.min_sample_size,
                "Sample too small for a reliable Benford verdict"
            );
        }
        debug!(sample_size, skipped, mad, conformity = ?conformity, "Benford analysis complete");

        BenfordAnalysis {
            digits,
            mad,
            conformity,
            sample_size,
            skipped,
            sample_adequate,
        }
    }
}

impl Default for BenfordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&BenfordSettings> for BenfordAnalyzer {
    fn from(settings: &BenfordSettings) -> Self {
        Self::with_min_sample_size(settings.min_sample_size)
    }
}

/// Returns the first non-zero digit of `|amount|`, ignoring sign and decimal point.
///
/// Zero has no leading digit.
#[must_use]
pub fn extract_leading_digit(amount: Decimal) -> Option<u8> {
    amount
        .abs()
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .find(|d| *d != 0)
        .and_then(|d| u8::try_from(d).ok())
}

/// Maps a mean absolute deviation onto a conformity verdict.
///
/// Each band includes its lower bound and excludes its upper bound.
#[must_use]
pub fn interpret_mad(mad: f64) -> Conformity {
    if mad < CLOSE_CONFORMITY_LIMIT {
        Conformity::Close
    } else if mad < ACCEPTABLE_CONFORMITY_LIMIT {
        Conformity::Acceptable
    } else if mad < MARGINAL_CONFORMITY_LIMIT {
        Conformity::Marginal
    } else {
        Conformity::NonConformity
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[rstest]
    #[case(dec!(-0.057), Some(5))]
    #[case(dec!(1000), Some(1))]
    #[case(dec!(0), None)]
    #[case(dec!(0.000), None)]
    #[case(dec!(987.65), Some(9))]
    #[case(dec!(-42), Some(4))]
    #[case(dec!(0.0003), Some(3))]
    fn test_extract_leading_digit(#[case] amount: Decimal, #[case] expected: Option<u8>) {
        assert_eq!(extract_leading_digit(amount), expected);
    }

    #[rstest]
    #[case(0.0, Conformity::Close)]
    #[case(0.00599, Conformity::Close)]
    #[case(0.006, Conformity::Acceptable)]
    #[case(0.01199, Conformity::Acceptable)]
    #[case(0.012, Conformity::Marginal)]
    #[case(0.01499, Conformity::Marginal)]
    #[case(0.015, Conformity::NonConformity)]
    #[case(0.2, Conformity::NonConformity)]
    fn test_interpret_mad(#[case] mad: f64, #[case] expected: Conformity) {
        assert_eq!(interpret_mad(mad), expected);
    }

    #[test]
    fn test_expected_probabilities() {
        let analyzer = BenfordAnalyzer::new();
        assert!(close(analyzer.expected_probability(1).unwrap(), 2f64.log10()));
        assert!(close(analyzer.expected_probability(9).unwrap(), (10.0f64 / 9.0).log10()));
        assert!(analyzer.expected_probability(0).is_none());
        assert!(analyzer.expected_probability(10).is_none());

        let total: f64 = (1..=9).filter_map(|d| analyzer.expected_probability(d)).sum();
        assert!(close(total, 1.0));
    }

    #[test]
    fn test_empty_ledger_is_not_an_error() {
        let analysis = BenfordAnalyzer::new().analyze(&BTreeMap::new());

        assert_eq!(analysis.sample_size, 0);
        assert!(!analysis.sample_adequate);
        assert!(analysis.digits.values().all(|d| d.actual_value == 0));
        assert!(analysis.digits.values().all(|d| close(d.actual_proportion, 0.0)));
        // every expected probability counts in full: sum / 9 = 1 / 9
        assert!(close(analysis.mad, 0.11111));
        assert_eq!(analysis.conformity, Conformity::NonConformity);
    }

    #[test]
    fn test_zero_amounts_are_skipped() {
        let ledger: BTreeMap<TransactionId, Decimal> =
            [(1, dec!(0)), (2, dec!(150.25)), (3, dec!(-2400))].into_iter().collect();

        let analysis = BenfordAnalyzer::new().analyze(&ledger);
        assert_eq!(analysis.sample_size, 2);
        assert_eq!(analysis.skipped, 1);
        assert_eq!(analysis.digit(1).unwrap().actual_value, 1);
        assert_eq!(analysis.digit(2).unwrap().actual_value, 1);
        assert!(close(analysis.digit(1).unwrap().actual_proportion, 0.5));
    }

    #[test]
    fn test_expected_counts_rounded_to_one_place() {
        let ledger: BTreeMap<TransactionId, Decimal> =
            (1..=1000u64).map(|id| (id, Decimal::from(id))).collect();

        let analysis = BenfordAnalyzer::new().analyze(&ledger);
        assert!(close(analysis.digit(1).unwrap().expected_value, 301.0));
        assert!(close(analysis.digit(2).unwrap().expected_value, 176.1));
        assert!(close(analysis.digit(9).unwrap().expected_value, 45.8));
        assert_eq!(analysis.digit(1).unwrap().actual_value, 112);
        assert!(analysis.sample_adequate);
    }

    #[test]
    fn test_min_sample_size_from_settings() {
        let analyzer = BenfordAnalyzer::from(&BenfordSettings { min_sample_size: 2 });
        let ledger: BTreeMap<TransactionId, Decimal> =
            [(1, dec!(1)), (2, dec!(2))].into_iter().collect();
        assert!(analyzer.analyze(&ledger).sample_adequate);
    }
}

//! Random transaction ledgers for leading-digit screening.

use std::collections::BTreeMap;

use finaudit_core::benford::TransactionId;
use rand::Rng;
use rust_decimal::Decimal;
use tracing::debug;

/// Cumulative Benford probabilities of digits 1 through 8, in permille.
const BENFORD_CUMULATIVE_PERMILLE: [u32; 8] = [301, 477, 602, 699, 778, 845, 903, 954];

/// Draws a leading digit with Benford's probabilities by inverse transform.
fn benford_digit<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    let draw = rng.random_range(0..1000u32);
    let below = BENFORD_CUMULATIVE_PERMILLE
        .iter()
        .take_while(|cutoff| draw >= **cutoff)
        .count();
    // at most 8 cutoffs are passed
    u8::try_from(below).map_or(9, |b| b + 1)
}

/// Builds an amount starting with `digit`: `digit × 10^k + m × 10^(k-1)`,
/// with `k` in 2..=5 and `m` in [1.00, 9.99], rounded to cents.
fn amount_with_digit<R: Rng + ?Sized>(rng: &mut R, digit: u8) -> Decimal {
    let magnitude = Decimal::from(10i64.pow(rng.random_range(2..=5u32)));
    let multiplier = Decimal::new(rng.random_range(100..=999i64), 2);
    (Decimal::from(digit) * magnitude + multiplier * magnitude / Decimal::TEN).round_dp(2)
}

fn ledger<R, F>(rng: &mut R, n: usize, mut digit: F) -> BTreeMap<TransactionId, Decimal>
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> u8,
{
    (1..=n as TransactionId)
        .map(|id| {
            let d = digit(&mut *rng);
            (id, amount_with_digit(&mut *rng, d))
        })
        .collect()
}

/// Generates `n` transactions, keyed 1..=n, whose leading digits follow Benford's Law.
pub fn generate_benford_transactions<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
) -> BTreeMap<TransactionId, Decimal> {
    let transactions = ledger(rng, n, benford_digit);
    debug!(n, "Generated Benford-distributed transactions");
    transactions
}

/// Generates `n` transactions, keyed 1..=n, whose leading digits are uniform over 1-9.
///
/// Serves as a non-conforming control set.
pub fn generate_uniform_transactions<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
) -> BTreeMap<TransactionId, Decimal> {
    let transactions = ledger(rng, n, |rng| rng.random_range(1..=9u8));
    debug!(n, "Generated uniformly distributed transactions");
    transactions
}

//! Synthetic data for Finaudit.
//!
//! Generators for statement sets and transaction ledgers, used by the demo
//! driver and by tests. Every generator takes a caller-supplied RNG, so a
//! seeded `StdRng` reproduces the same data.
//!
//! # Modules
//!
//! - `statements` - Balanced or unbalanced statement sets
//! - `transactions` - Benford-distributed and uniform ledgers

pub mod statements;
pub mod transactions;

pub use statements::{BalanceMode, generate_statement_sets};
pub use transactions::{generate_benford_transactions, generate_uniform_transactions};

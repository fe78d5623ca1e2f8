//! Leading-digit (Benford's Law) screening of transaction amounts.
//!
//! Digit statistics are proportions rather than money, so this module works in
//! `f64`; amounts themselves stay `Decimal` until their leading digit is read.

#![allow(clippy::float_arithmetic, clippy::cast_precision_loss)]

pub mod analyzer;
pub mod types;

#[cfg(test)]
mod analyzer_props;

pub use analyzer::{BenfordAnalyzer, extract_leading_digit, interpret_mad};
pub use types::{BenfordAnalysis, Conformity, DigitFrequency, TransactionId};

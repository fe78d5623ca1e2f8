//! Core audit logic for Finaudit.
//!
//! This crate contains pure audit logic with ZERO file or CLI dependencies.
//! Statement types, consistency checks, report compilation and
//! leading-digit screening all live here.
//!
//! # Modules
//!
//! - `statements` - Balance sheet, income statement and cash flow types
//! - `audit` - Consistency checks, findings and audit reports
//! - `benford` - Leading-digit distribution analysis

pub mod audit;
pub mod benford;
pub mod statements;

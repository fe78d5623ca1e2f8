//! CLI command implementations
//!
//! Each submodule implements one subcommand.

pub mod audit;
pub mod benford;
pub mod demo;
pub mod generate;

//! Shared configuration and error types for Finaudit.
//!
//! This crate provides common pieces used across all other crates:
//! - Application-wide error types
//! - Configuration management (audit policy, Benford screening, reporting)

pub mod config;
pub mod error;


pub use config::{AppConfig, AuditSettings, BenfordSettings, ReportSettings};
pub use error::{AppError, AppResult};

//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Statement audit configuration.
    #[serde(default)]
    pub audit: AuditSettings,
    /// Leading-digit screening configuration.
    #[serde(default)]
    pub benford: BenfordSettings,
    /// Report export configuration.
    #[serde(default)]
    pub report: ReportSettings,
}

/// Statement audit configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditSettings {
    /// Largest absolute discrepancy still accepted by the equality checks.
    #[serde(default = "default_tolerance")]
    pub tolerance: Decimal,
    /// Lower bound of operating cash flow as a multiple of net income.
    #[serde(default = "default_ocf_lower_multiple")]
    pub ocf_lower_multiple: Decimal,
    /// Upper bound of operating cash flow as a multiple of net income.
    #[serde(default = "default_ocf_upper_multiple")]
    pub ocf_upper_multiple: Decimal,
}

fn default_tolerance() -> Decimal {
    Decimal::ZERO
}

fn default_ocf_lower_multiple() -> Decimal {
    Decimal::new(5, 1)
}

fn default_ocf_upper_multiple() -> Decimal {
    Decimal::TWO
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            ocf_lower_multiple: default_ocf_lower_multiple(),
            ocf_upper_multiple: default_ocf_upper_multiple(),
        }
    }
}

/// Leading-digit screening configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BenfordSettings {
    /// Smallest sample for which the conformity verdict is considered meaningful.
    #[serde(default = "default_min_sample_size")]
    pub min_sample_size: u64,
}

fn default_min_sample_size() -> u64 {
    500
}

impl Default for BenfordSettings {
    fn default() -> Self {
        Self {
            min_sample_size: default_min_sample_size(),
        }
    }
}

/// Report export configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    /// Directory that receives exported reports without an explicit path.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with_file(None)
    }

    /// Loads configuration, layering an explicit file over the defaults.
    ///
    /// Sources in increasing priority: `config/default`, `config/{RUN_MODE}`,
    /// the explicit file (must exist when given), then `FINAUDIT__*` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value has the wrong type.
    pub fn load_with_file(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false));

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        let config = builder
            .add_source(config::Environment::with_prefix("FINAUDIT").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

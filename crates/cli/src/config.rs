//! Runtime configuration from environment variables.

use std::path::PathBuf;

use quickbill_observability::LogFormat;
use quickbill_presentation::Issuer;

pub const ENV_ISSUER_NAME: &str = "QUICKBILL_ISSUER_NAME";
pub const ENV_ISSUER_ADDRESS: &str = "QUICKBILL_ISSUER_ADDRESS";
pub const ENV_OUTPUT: &str = "QUICKBILL_OUTPUT";
pub const ENV_LOG_FORMAT: &str = "QUICKBILL_LOG_FORMAT";

/// Settings read once at startup. Command-line flags override them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub issuer: Issuer,
    pub output: PathBuf,
    pub log_format: LogFormat,
    /// Problems found while reading the environment, logged once tracing is up.
    pub warnings: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            issuer: Issuer::default(),
            output: PathBuf::from("invoice.pdf"),
            log_format: LogFormat::default(),
            warnings: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(name) = lookup(ENV_ISSUER_NAME).filter(|n| !n.trim().is_empty()) {
            config.issuer = Issuer::new(name.trim());
        }
        if let Some(address) = lookup(ENV_ISSUER_ADDRESS) {
            config.issuer = config.issuer.with_address(&address);
        }
        if let Some(output) = lookup(ENV_OUTPUT).filter(|o| !o.trim().is_empty()) {
            config.output = PathBuf::from(output.trim());
        }
        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(e) => config
                    .warnings
                    .push(format!("{ENV_LOG_FORMAT}: {e}; using {:?}", config.log_format)),
            }
        }

        config
    }
}

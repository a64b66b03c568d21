//! Configuration for the Donner workspace.
//!
//! A single TOML file with `[analysis]`, `[fetch]`, `[server]` and `[logging]`
//! tables. Every field is optional; `effective_*` accessors supply defaults.

pub mod analysis_config;
pub mod fetch_config;
pub mod logging_config;
pub mod server_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use analysis_config::AnalysisConfig;
pub use fetch_config::FetchConfig;
pub use logging_config::{LogFormat, LoggingConfig};
pub use server_config::ServerConfig;

pub const ENV_BIND_ADDR: &str = "DONNER_BIND_ADDR";
pub const ENV_BASE_URL: &str = "DONNER_BASE_URL";
pub const ENV_LOG_LEVEL: &str = "DONNER_LOG_LEVEL";

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DonnerConfig {
    pub analysis: AnalysisConfig,
    pub fetch: FetchConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

impl DonnerConfig {
    /// Parse configuration from a TOML string and validate it.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load from `path` if given (defaults otherwise), then apply env overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in production).
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_BIND_ADDR).filter(|v| !v.is_empty()) {
            self.server.bind_addr = Some(v);
        }
        if let Some(v) = lookup(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            self.fetch.base_url = Some(v);
        }
        if let Some(v) = lookup(ENV_LOG_LEVEL).filter(|v| !v.is_empty()) {
            self.logging.level = Some(v);
        }
    }

    /// Reject values that would make the engine or client meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let windows = [
            ("analysis.closure_lookahead", self.analysis.effective_closure_lookahead()),
            ("analysis.directional_lookahead", self.analysis.effective_directional_lookahead()),
            ("analysis.score_lookahead", self.analysis.effective_score_lookahead()),
        ];
        for (field, value) in windows {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: "window must be greater than 0".to_string(),
                });
            }
        }
        if self.fetch.effective_timeout_ms() == 0 {
            return Err(ConfigError::InvalidValue {
                field: "fetch.timeout_ms".to_string(),
                message: "timeout must be greater than 0".to_string(),
            });
        }
        if self.server.effective_timezone().trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.timezone".to_string(),
                message: "timezone must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Output format for the fmt subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "donner=debug". Default: "info".
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

impl LoggingConfig {
    pub fn effective_level(&self) -> String {
        self.level.clone().unwrap_or_else(|| "info".to_string())
    }

    pub fn effective_format(&self) -> LogFormat {
        self.format.unwrap_or_default()
    }
}

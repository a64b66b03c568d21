//! Signal pack loading errors.

use std::path::PathBuf;

use super::error_code::DonnerErrorCode;

/// Errors raised while loading or compiling a signal pack.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("Failed to read signal pack {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse signal pack: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid regex in pattern '{id}': {message}")]
    InvalidRegex { id: String, message: String },

    #[error("Pattern '{id}' has weight 0; weights must be positive")]
    ZeroWeight { id: String },

    #[error("Signal pack table '{table}' is empty")]
    EmptyTable { table: &'static str },
}

impl DonnerErrorCode for PatternError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "PATTERN_IO_ERROR",
            Self::Parse(_) => "PATTERN_PARSE_ERROR",
            Self::InvalidRegex { .. } => "PATTERN_INVALID_REGEX",
            Self::ZeroWeight { .. } => "PATTERN_ZERO_WEIGHT",
            Self::EmptyTable { .. } => "PATTERN_EMPTY_TABLE",
        }
    }
}

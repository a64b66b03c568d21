//! Error types for retrieval and the HTTP service.
//!
//! Retrieval failures are recovered inside the fetch client. Everything else
//! surfaces as a [`ServerError`], which the status handler turns into an
//! `unknown` response rather than an HTTP error.

use donner_core::errors::{ConfigError, DonnerErrorCode, PatternError};

/// One failed retrieval attempt.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Caltrans returned HTTP {status}")]
    Status { status: u16 },

    #[error("Response body too short: {len} chars (need more than {min})")]
    TooShort { len: usize, min: usize },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl DonnerErrorCode for FetchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Http(e) if e.is_timeout() => "FETCH_TIMEOUT",
            Self::Http(_) => "FETCH_HTTP_ERROR",
            Self::Status { .. } => "FETCH_BAD_STATUS",
            Self::TooShort { .. } => "FETCH_BODY_TOO_SHORT",
            Self::ClientBuild(_) => "FETCH_CLIENT_BUILD",
        }
    }
}

/// Service-level errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Unknown timezone '{0}'")]
    Timezone(String),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Analysis task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl DonnerErrorCode for ServerError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Pattern(e) => e.error_code(),
            Self::Fetch(e) => e.error_code(),
            Self::Timezone(_) => "SERVER_UNKNOWN_TIMEZONE",
            Self::Bind { .. } => "SERVER_BIND_ERROR",
            Self::Io(_) => "SERVER_IO_ERROR",
            Self::Join(_) => "SERVER_TASK_FAILED",
        }
    }
}

//! Error types for the Donner workspace.
//!
//! Each concern gets its own `thiserror` enum; all of them implement
//! [`DonnerErrorCode`] so the server can log stable codes.

pub mod config_error;
pub mod error_code;
pub mod pattern_error;

pub use config_error::ConfigError;
pub use error_code::DonnerErrorCode;
pub use pattern_error::PatternError;

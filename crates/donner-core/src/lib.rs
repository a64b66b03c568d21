//! # donner-core
//!
//! Foundation crate for the Donner Summit road-status service.
//! Defines the status types, errors, config, tracing setup, and the window
//! and threshold constants shared by the analysis engine and the server.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::DonnerConfig;
pub use errors::error_code::DonnerErrorCode;
pub use types::status::{RoadStatus, Scores, Verdict};

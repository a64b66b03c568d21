//! Stable, machine-readable error codes.

/// Implemented by every error enum in the workspace.
pub trait DonnerErrorCode {
    /// A `SCREAMING_SNAKE` code that does not change between releases.
    fn error_code(&self) -> &'static str;
}

//! Shared domain types.

pub mod status;

pub use status::{RoadStatus, Scores, Verdict};

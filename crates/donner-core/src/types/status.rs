//! Road status verdict types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Terminal classification of the corridor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadStatus {
    Open,
    Restrictions,
    Closed,
    Unknown,
}

impl RoadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Restrictions => "restrictions",
            Self::Closed => "closed",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Independent evidence tallies. Unsigned, so never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub restriction: u32,
    pub open: u32,
}

impl Scores {
    pub fn new(restriction: u32, open: u32) -> Self {
        Self { restriction, open }
    }
}

/// Final engine output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub status: RoadStatus,
    pub scores: Scores,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Verdict {
    pub fn new(status: RoadStatus, scores: Scores) -> Self {
        Self { status, scores, note: None }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Verdict used when no advisory text could be obtained at all.
    pub fn unknown() -> Self {
        Self::new(RoadStatus::Unknown, Scores::default())
    }
}

//! Verdict resolution as a fixed priority cascade. The first matching rule wins.

use donner_core::config::AnalysisConfig;
use donner_core::constants;
use donner_core::types::{RoadStatus, Scores, Verdict};
use serde::{Deserialize, Serialize};

use crate::closure::ClosureSummary;

pub const NOTE_FULL_CLOSURE: &str = "Full closure — road closed to all traffic.";
pub const NOTE_ONE_DIRECTION: &str = "One direction closed to all traffic.";
pub const NOTE_NO_CAR_NOTICES: &str = "Only truck-specific or no notices found for regular vehicles.";

/// Which cascade rule produced the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionRule {
    FullClosure,
    RestrictionScore,
    DirectionalClosure,
    OpenScore,
    KnownPlaceNames,
    UnrecognizedContent,
    NoContent,
}

/// Everything the resolver looks at.
#[derive(Debug, Clone, Copy)]
pub struct ResolverInput<'a> {
    /// Normalised section text.
    pub section: &'a str,
    pub closures: ClosureSummary,
    pub scores: Scores,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverThresholds {
    pub restriction: u32,
    pub open: u32,
    pub min_content_len: usize,
}

impl Default for ResolverThresholds {
    fn default() -> Self {
        Self {
            restriction: constants::RESTRICTION_THRESHOLD,
            open: constants::OPEN_THRESHOLD,
            min_content_len: constants::MIN_CONTENT_LEN,
        }
    }
}

impl From<&AnalysisConfig> for ResolverThresholds {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            restriction: config.effective_restriction_threshold(),
            open: config.effective_open_threshold(),
            min_content_len: config.effective_min_content_len(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct VerdictResolver {
    place_names: Vec<String>,
    thresholds: ResolverThresholds,
}

impl VerdictResolver {
    /// `place_names` must already be uppercased.
    pub fn new(place_names: Vec<String>, thresholds: ResolverThresholds) -> Self {
        Self { place_names, thresholds }
    }

    /// Total: every input reaches exactly one terminal status.
    pub fn resolve(&self, input: &ResolverInput<'_>) -> (Verdict, ResolutionRule) {
        let scores = input.scores;
        let closures = &input.closures;

        if closures.is_full_closure() {
            return (
                Verdict::new(RoadStatus::Closed, scores).with_note(NOTE_FULL_CLOSURE),
                ResolutionRule::FullClosure,
            );
        }
        if scores.restriction >= self.thresholds.restriction {
            return (
                Verdict::new(RoadStatus::Restrictions, scores),
                ResolutionRule::RestrictionScore,
            );
        }
        if closures.any_direction_closed() {
            return (
                Verdict::new(RoadStatus::Restrictions, scores).with_note(NOTE_ONE_DIRECTION),
                ResolutionRule::DirectionalClosure,
            );
        }
        if scores.open >= self.thresholds.open {
            return (Verdict::new(RoadStatus::Open, scores), ResolutionRule::OpenScore);
        }
        if self.mentions_known_place(input.section) {
            return (
                Verdict::new(RoadStatus::Open, scores).with_note(NOTE_NO_CAR_NOTICES),
                ResolutionRule::KnownPlaceNames,
            );
        }
        if input.section.chars().count() > self.thresholds.min_content_len {
            return (
                Verdict::new(RoadStatus::Open, scores),
                ResolutionRule::UnrecognizedContent,
            );
        }
        (Verdict::new(RoadStatus::Unknown, scores), ResolutionRule::NoContent)
    }

    fn mentions_known_place(&self, section: &str) -> bool {
        self.place_names.iter().any(|p| section.contains(p.as_str()))
    }
}

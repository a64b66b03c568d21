//! Structured record of every intermediate decision in one analysis run.

use serde::Serialize;

use crate::closure::{ClosureFinding, ClosureSummary};
use crate::scoring::SignalHit;
use crate::section::SectionBounds;
use crate::statements::Statement;
use crate::verdict::ResolutionRule;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisTrace {
    pub pack: String,
    pub section: SectionBounds,
    pub section_chars: usize,
    pub statements: Vec<Statement>,
    pub closures: Vec<ClosureFinding>,
    pub closure_summary: ClosureSummary,
    pub counted_restrictions: Vec<SignalHit>,
    pub skipped_truck_restrictions: Vec<SignalHit>,
    pub open_signals: Vec<SignalHit>,
    pub directional_bonus: u32,
    pub rule: ResolutionRule,
}

//! Restriction/open scoring with per-statement truck filtering.

use donner_core::config::AnalysisConfig;
use donner_core::constants;
use donner_core::types::Scores;
use serde::Serialize;

use crate::closure::ClosureSummary;
use crate::pack::{CompiledSignal, CompiledSignalPack};
use crate::text::{floor_char_boundary, window_after, window_before};
use crate::vehicle_scope::{TruckClassifier, VehicleScope};

/// A single signal occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignalHit {
    pub id: String,
    pub weight: u32,
    pub offset: usize,
    pub scope: VehicleScope,
}

/// Scorer output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub scores: Scores,
    /// Restriction hits that contributed to the score.
    pub counted: Vec<SignalHit>,
    /// Restriction hits discarded as truck-only.
    pub skipped: Vec<SignalHit>,
    pub open_hits: Vec<SignalHit>,
    /// Bonus added for a single-direction full closure (0 when not applied).
    pub directional_bonus: u32,
}

/// Window sizes and bonus for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWindows {
    pub lookbehind: usize,
    pub fallback_lookbehind: usize,
    pub lookahead: usize,
    pub directional_bonus: u32,
}

impl Default for ScoreWindows {
    fn default() -> Self {
        Self {
            lookbehind: constants::SCORE_LOOKBEHIND,
            fallback_lookbehind: constants::SCORE_FALLBACK_LOOKBEHIND,
            lookahead: constants::SCORE_LOOKAHEAD,
            directional_bonus: constants::DIRECTIONAL_CLOSURE_BONUS,
        }
    }
}

impl From<&AnalysisConfig> for ScoreWindows {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            lookbehind: config.effective_score_lookbehind(),
            fallback_lookbehind: config.effective_score_fallback_lookbehind(),
            lookahead: config.effective_score_lookahead(),
            directional_bonus: config.effective_directional_closure_bonus(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SignalScorer {
    restriction: Vec<CompiledSignal>,
    open: Vec<CompiledSignal>,
    trucks: TruckClassifier,
    windows: ScoreWindows,
}

impl SignalScorer {
    pub fn new(pack: &CompiledSignalPack, windows: ScoreWindows) -> Self {
        Self {
            restriction: pack.restriction.clone(),
            open: pack.open.clone(),
            trucks: pack.trucks.clone(),
            windows,
        }
    }

    /// Score the normalised section. `closures` only feeds the directional bonus.
    pub fn score(&self, section: &str, closures: &ClosureSummary) -> ScoreReport {
        let mut report = ScoreReport::default();

        if closures.single_direction_closed() {
            report.directional_bonus = self.windows.directional_bonus;
            report.scores.restriction = self.windows.directional_bonus;
        }

        for signal in &self.restriction {
            for m in signal.regex.find_iter(section) {
                let context = self.statement_context(section, m.start(), m.end());
                let scope = self.trucks.classify(context);
                let hit = SignalHit {
                    id: signal.id.clone(),
                    weight: signal.weight,
                    offset: m.start(),
                    scope,
                };
                if scope == VehicleScope::TruckOnly {
                    tracing::debug!(
                        target: "donner::analysis",
                        signal = %signal.id,
                        offset = m.start(),
                        "skipping truck-only restriction"
                    );
                    report.skipped.push(hit);
                } else {
                    report.scores.restriction = report.scores.restriction.saturating_add(signal.weight);
                    report.counted.push(hit);
                }
            }
        }

        for signal in &self.open {
            for m in signal.regex.find_iter(section) {
                report.scores.open = report.scores.open.saturating_add(signal.weight);
                report.open_hits.push(SignalHit {
                    id: signal.id.clone(),
                    weight: signal.weight,
                    offset: m.start(),
                    scope: VehicleScope::AllVehicles,
                });
            }
        }

        tracing::debug!(
            target: "donner::analysis",
            restriction = report.scores.restriction,
            open = report.scores.open,
            counted = report.counted.len(),
            skipped = report.skipped.len(),
            "signal scores"
        );

        report
    }

    /// The statement surrounding a match, used as its truck-scope window.
    ///
    /// Starts at the nearest statement boundary within `lookbehind` (or
    /// `fallback_lookbehind` bytes back when none is found) and ends at the
    /// first statement end after the match, at most `lookahead` bytes on.
    fn statement_context<'a>(&self, section: &'a str, start: usize, end: usize) -> &'a str {
        let (lookback_start, _) = window_before(section, start, self.windows.lookbehind);
        let ctx_start = nearest_boundary(section, lookback_start, start)
            .unwrap_or_else(|| window_before(section, start, self.windows.fallback_lookbehind).0);

        let ahead = window_after(section, start, self.windows.lookahead);
        let limit = start + ahead.len();
        let scan_from = floor_char_boundary(section, end.min(limit));
        let ctx_end = statement_end(section, scan_from, limit);

        &section[ctx_start..ctx_end]
    }
}

/// A `.` or line break ends a statement only when what follows it is blank
/// or starts with a letter after optional whitespace. `3.4 MI` does not.
fn breaks_statement(rest: &str) -> bool {
    rest.trim_start().chars().next().map_or(true, char::is_alphabetic)
}

fn break_offsets(text: &str) -> impl DoubleEndedIterator<Item = (usize, usize)> + '_ {
    text.char_indices()
        .filter(|&(_, c)| c == '.' || c == '\n')
        .map(|(i, c)| (i, i + c.len_utf8()))
}

/// Offset of the first statement break in `section[from..to]`, or `to`.
fn statement_end(section: &str, from: usize, to: usize) -> usize {
    break_offsets(&section[from..to])
        .find(|&(_, after)| breaks_statement(&section[from + after..]))
        .map_or(to, |(at, _)| from + at)
}

/// Offset just past the last statement break in `section[from..to]`.
///
/// The text after a break is checked up to the end of the section, so a break
/// right before the match itself is found. Offset 0 counts as a boundary when
/// the window reaches the start of the section.
fn nearest_boundary(section: &str, from: usize, to: usize) -> Option<usize> {
    let found = break_offsets(&section[from..to])
        .rev()
        .map(|(_, after)| from + after)
        .find(|&after| breaks_statement(&section[after..]));

    match found {
        Some(offset) => Some(offset),
        None if from == 0 => Some(0),
        None => None,
    }
}

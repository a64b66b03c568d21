//! Closure detection for full, directional and truck-only closures.
//!
//! General closure phrases ("IS CLOSED FROM/AT/BETWEEN/DUE TO") close the road
//! to everyone unless a direction immediately precedes them or truck wording
//! follows them. "Both directions" phrasing always counts. Eastbound and
//! westbound phrases set per-direction flags unless they are truck-only.

use donner_core::config::AnalysisConfig;
use donner_core::constants;
use serde::{Deserialize, Serialize};

use crate::pack::{ClosureKind, CompiledClosure, CompiledSignalPack};
use crate::text::{ends_with_word, window_after, window_before};
use crate::vehicle_scope::{TruckClassifier, VehicleScope};

/// Direction a closure applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Eastbound,
    Westbound,
    Unspecified,
}

/// One closure phrase occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClosureFinding {
    pub family: String,
    pub kind: ClosureKind,
    pub direction: Direction,
    pub scope: VehicleScope,
    /// Byte offset of the phrase inside the section.
    pub offset: usize,
    /// Whether this occurrence set any closure flag.
    pub counted: bool,
}

/// Folded closure flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureSummary {
    pub has_unscoped_full_closure: bool,
    pub east_fully_closed: bool,
    pub west_fully_closed: bool,
}

impl ClosureSummary {
    /// Closed to everyone in both directions.
    pub fn is_full_closure(&self) -> bool {
        self.has_unscoped_full_closure || (self.east_fully_closed && self.west_fully_closed)
    }

    pub fn any_direction_closed(&self) -> bool {
        self.east_fully_closed || self.west_fully_closed
    }

    /// Exactly one direction closed to all traffic.
    pub fn single_direction_closed(&self) -> bool {
        self.east_fully_closed != self.west_fully_closed
    }
}

/// Detector output: the summary plus every occurrence inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClosureReport {
    pub summary: ClosureSummary,
    pub findings: Vec<ClosureFinding>,
}

/// Context window sizes for closure phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosureWindows {
    pub lookbehind: usize,
    pub lookahead: usize,
    pub scope_window: usize,
    pub directional_lookahead: usize,
}

impl Default for ClosureWindows {
    fn default() -> Self {
        Self {
            lookbehind: constants::CLOSURE_LOOKBEHIND,
            lookahead: constants::CLOSURE_LOOKAHEAD,
            scope_window: constants::CLOSURE_SCOPE_WINDOW,
            directional_lookahead: constants::DIRECTIONAL_LOOKAHEAD,
        }
    }
}

impl From<&AnalysisConfig> for ClosureWindows {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            lookbehind: config.effective_closure_lookbehind(),
            lookahead: config.effective_closure_lookahead(),
            scope_window: config.effective_closure_scope_window(),
            directional_lookahead: config.effective_directional_lookahead(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClosureDetector {
    families: Vec<CompiledClosure>,
    trucks: TruckClassifier,
    windows: ClosureWindows,
}

impl ClosureDetector {
    pub fn new(pack: &CompiledSignalPack, windows: ClosureWindows) -> Self {
        Self {
            families: pack.closures.clone(),
            trucks: pack.trucks.clone(),
            windows,
        }
    }

    /// Scan every closure family over the normalised section.
    pub fn detect(&self, section: &str) -> ClosureReport {
        let mut report = ClosureReport::default();

        for family in &self.families {
            for m in family.regex.find_iter(section) {
                let finding = match family.kind {
                    ClosureKind::General => self.general(family, section, m.start()),
                    ClosureKind::BothDirections => ClosureFinding {
                        family: family.id.clone(),
                        kind: family.kind,
                        direction: Direction::Unspecified,
                        scope: VehicleScope::AllVehicles,
                        offset: m.start(),
                        counted: true,
                    },
                    ClosureKind::Eastbound | ClosureKind::Westbound => {
                        self.directional(family, section, m.start())
                    }
                };
                apply(&mut report.summary, &finding);
                report.findings.push(finding);
            }
        }

        if report.summary.east_fully_closed && report.summary.west_fully_closed {
            report.summary.has_unscoped_full_closure = true;
            tracing::debug!(
                target: "donner::analysis",
                "both directions independently closed to all traffic"
            );
        }

        report
    }

    fn general(&self, family: &CompiledClosure, section: &str, at: usize) -> ClosureFinding {
        let (_, before) = window_before(section, at, self.windows.lookbehind);
        let context = window_after(section, at, self.windows.lookahead);
        let scope_span = window_after(context, 0, self.windows.scope_window);

        let direction = qualifier_direction(before);
        let scope = self.trucks.classify(scope_span);
        let counted = direction == Direction::Unspecified && scope == VehicleScope::AllVehicles;

        tracing::debug!(
            target: "donner::analysis",
            family = %family.id,
            offset = at,
            ?direction,
            ?scope,
            counted,
            "general closure phrase"
        );

        ClosureFinding {
            family: family.id.clone(),
            kind: family.kind,
            direction,
            scope,
            offset: at,
            counted,
        }
    }

    fn directional(&self, family: &CompiledClosure, section: &str, at: usize) -> ClosureFinding {
        let after = window_after(section, at, self.windows.directional_lookahead);
        let scope = self.trucks.classify(after);
        let direction = if family.kind == ClosureKind::Eastbound {
            Direction::Eastbound
        } else {
            Direction::Westbound
        };
        let counted = scope == VehicleScope::AllVehicles;

        tracing::debug!(
            target: "donner::analysis",
            family = %family.id,
            offset = at,
            ?direction,
            ?scope,
            counted,
            "directional closure phrase"
        );

        ClosureFinding {
            family: family.id.clone(),
            kind: family.kind,
            direction,
            scope,
            offset: at,
            counted,
        }
    }
}

fn apply(summary: &mut ClosureSummary, finding: &ClosureFinding) {
    if !finding.counted {
        return;
    }
    match finding.kind {
        ClosureKind::General | ClosureKind::BothDirections => {
            summary.has_unscoped_full_closure = true;
        }
        ClosureKind::Eastbound => summary.east_fully_closed = true,
        ClosureKind::Westbound => summary.west_fully_closed = true,
    }
}

/// Direction named immediately before a closure verb, if any.
fn qualifier_direction(lookbehind: &str) -> Direction {
    if ends_with_word(lookbehind, "EASTBOUND") {
        Direction::Eastbound
    } else if ends_with_word(lookbehind, "WESTBOUND") {
        Direction::Westbound
    } else {
        Direction::Unspecified
    }
}

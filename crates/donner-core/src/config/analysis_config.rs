//! Analysis engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Tunable windows and thresholds for the advisory engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Bytes before a closure phrase checked for a direction. Default: 80.
    pub closure_lookbehind: Option<usize>,
    /// Closure context window length. Default: 300.
    pub closure_lookahead: Option<usize>,
    /// Part of the closure lookahead checked for truck wording. Default: 200.
    pub closure_scope_window: Option<usize>,
    /// Lookahead for "is closed eastbound/westbound" phrases. Default: 250.
    pub directional_lookahead: Option<usize>,
    /// Statement boundary search distance for scored matches. Default: 150.
    pub score_lookbehind: Option<usize>,
    /// Fallback lookback when no boundary is found. Default: 100.
    pub score_fallback_lookbehind: Option<usize>,
    /// Lookahead for scored matches. Default: 200.
    pub score_lookahead: Option<usize>,
    /// Default: 3.
    pub restriction_threshold: Option<u32>,
    /// Default: 5.
    pub open_threshold: Option<u32>,
    /// Default: 100.
    pub min_content_len: Option<usize>,
    /// Default: 15.
    pub directional_closure_bonus: Option<u32>,
    /// Default: 20.
    pub terminator_min_offset: Option<usize>,
    /// Path to a custom signal pack TOML. Default: the embedded I-80 pack.
    pub pack_path: Option<String>,
}

impl AnalysisConfig {
    pub fn effective_closure_lookbehind(&self) -> usize {
        self.closure_lookbehind.unwrap_or(constants::CLOSURE_LOOKBEHIND)
    }

    pub fn effective_closure_lookahead(&self) -> usize {
        self.closure_lookahead.unwrap_or(constants::CLOSURE_LOOKAHEAD)
    }

    /// Never larger than the closure lookahead itself.
    pub fn effective_closure_scope_window(&self) -> usize {
        self.closure_scope_window
            .unwrap_or(constants::CLOSURE_SCOPE_WINDOW)
            .min(self.effective_closure_lookahead())
    }

    pub fn effective_directional_lookahead(&self) -> usize {
        self.directional_lookahead.unwrap_or(constants::DIRECTIONAL_LOOKAHEAD)
    }

    pub fn effective_score_lookbehind(&self) -> usize {
        self.score_lookbehind.unwrap_or(constants::SCORE_LOOKBEHIND)
    }

    pub fn effective_score_fallback_lookbehind(&self) -> usize {
        self.score_fallback_lookbehind
            .unwrap_or(constants::SCORE_FALLBACK_LOOKBEHIND)
    }

    pub fn effective_score_lookahead(&self) -> usize {
        self.score_lookahead.unwrap_or(constants::SCORE_LOOKAHEAD)
    }

    pub fn effective_restriction_threshold(&self) -> u32 {
        self.restriction_threshold.unwrap_or(constants::RESTRICTION_THRESHOLD)
    }

    pub fn effective_open_threshold(&self) -> u32 {
        self.open_threshold.unwrap_or(constants::OPEN_THRESHOLD)
    }

    pub fn effective_min_content_len(&self) -> usize {
        self.min_content_len.unwrap_or(constants::MIN_CONTENT_LEN)
    }

    pub fn effective_directional_closure_bonus(&self) -> u32 {
        self.directional_closure_bonus
            .unwrap_or(constants::DIRECTIONAL_CLOSURE_BONUS)
    }

    pub fn effective_terminator_min_offset(&self) -> usize {
        self.terminator_min_offset.unwrap_or(constants::TERMINATOR_MIN_OFFSET)
    }
}

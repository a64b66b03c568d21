//! Named window sizes and thresholds for the advisory engine.
//!
//! All offsets are byte offsets into the normalised (uppercased) section text.
//! Config values under `[analysis]` override these at runtime.

/// Bytes inspected before a closure phrase when looking for a direction qualifier.
pub const CLOSURE_LOOKBEHIND: usize = 80;

/// Bytes captured after a closure phrase as its context window.
pub const CLOSURE_LOOKAHEAD: usize = 300;

/// Leading part of the closure lookahead that is checked for truck-only wording.
pub const CLOSURE_SCOPE_WINDOW: usize = 200;

/// Bytes inspected after an "is closed eastbound/westbound" phrase.
pub const DIRECTIONAL_LOOKAHEAD: usize = 250;

/// Maximum lookback when searching for the start of a scored statement.
pub const SCORE_LOOKBEHIND: usize = 150;

/// Lookback used when no statement boundary is found.
pub const SCORE_FALLBACK_LOOKBEHIND: usize = 100;

/// Maximum lookahead after a scored match.
pub const SCORE_LOOKAHEAD: usize = 200;

/// Restriction score at or above which the road is reported as restricted.
pub const RESTRICTION_THRESHOLD: u32 = 3;

/// Open score at or above which the road is reported as explicitly open.
pub const OPEN_THRESHOLD: u32 = 5;

/// Sections longer than this (in chars) with no signal resolve to OPEN.
pub const MIN_CONTENT_LEN: usize = 100;

/// Added to the restriction score when exactly one direction is fully closed.
pub const DIRECTIONAL_CLOSURE_BONUS: u32 = 15;

/// Terminators are searched at least this many bytes after the region anchor.
pub const TERMINATOR_MIN_OFFSET: usize = 20;

/// Responses shorter than this are treated as a failed fetch.
pub const MIN_BODY_LEN: usize = 200;

/// Per-attempt fetch timeout.
pub const FETCH_TIMEOUT_MS: u64 = 15_000;

/// Timeout for the connectivity probe's reference request.
pub const PROBE_TIMEOUT_MS: u64 = 10_000;

/// Number of plain-text chars echoed back in debug responses.
pub const DEBUG_SAMPLE_LEN: usize = 3_000;

//! # donner-analysis
//!
//! Advisory engine for the Donner Summit road-status service.
//! Turns the plain text of a Caltrans road-conditions bulletin into an
//! OPEN / RESTRICTIONS / CLOSED / UNKNOWN verdict with score breakdown.
//!
//! The whole pipeline is a pure function of its input text.

pub mod analyzer;
pub mod closure;
pub mod pack;
pub mod scoring;
pub mod section;
pub mod statements;
pub mod text;
pub mod trace;
pub mod vehicle_scope;
pub mod verdict;

pub use analyzer::{analyze_text, AdvisoryAnalyzer};
pub use closure::{ClosureDetector, ClosureReport, ClosureSummary, Direction};
pub use pack::CompiledSignalPack;
pub use scoring::{ScoreReport, SignalScorer};
pub use section::SectionExtractor;
pub use trace::AnalysisTrace;
pub use vehicle_scope::{TruckClassifier, VehicleScope};
pub use verdict::{ResolutionRule, VerdictResolver};

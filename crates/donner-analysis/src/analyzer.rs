//! AdvisoryAnalyzer runs the full pipeline over one bulletin.
//!
//! normalise → section → {closures, scores} → verdict. The analyzer is
//! immutable after construction and can be shared across threads.

use std::sync::OnceLock;

use donner_core::config::AnalysisConfig;
use donner_core::errors::PatternError;
use donner_core::types::Verdict;

use crate::closure::{ClosureDetector, ClosureWindows};
use crate::pack::{self, CompiledSignalPack};
use crate::scoring::{ScoreWindows, SignalScorer};
use crate::section::SectionExtractor;
use crate::statements::StatementSplitter;
use crate::text::normalize;
use crate::trace::AnalysisTrace;
use crate::verdict::{ResolverInput, ResolverThresholds, VerdictResolver};

static DEFAULT_ANALYZER: OnceLock<Option<AdvisoryAnalyzer>> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct AdvisoryAnalyzer {
    pack_name: String,
    extractor: SectionExtractor,
    splitter: StatementSplitter,
    closures: ClosureDetector,
    scorer: SignalScorer,
    resolver: VerdictResolver,
}

impl AdvisoryAnalyzer {
    /// Build from a compiled pack and analysis config.
    pub fn new(pack: &CompiledSignalPack, config: &AnalysisConfig) -> Self {
        Self {
            pack_name: pack.name.clone(),
            extractor: SectionExtractor::new(&pack.region, config.effective_terminator_min_offset()),
            splitter: StatementSplitter::new(pack),
            closures: ClosureDetector::new(pack, ClosureWindows::from(config)),
            scorer: SignalScorer::new(pack, ScoreWindows::from(config)),
            resolver: VerdictResolver::new(
                pack.region.place_names.clone(),
                ResolverThresholds::from(config),
            ),
        }
    }

    /// Built-in pack with default windows and thresholds.
    pub fn with_defaults() -> Result<Self, PatternError> {
        Ok(Self::new(&pack::builtin()?, &AnalysisConfig::default()))
    }

    /// Load the configured pack (or the built-in one) and apply the config.
    pub fn from_config(config: &AnalysisConfig) -> Result<Self, PatternError> {
        Ok(Self::new(&pack::load_for_config(config)?, config))
    }

    pub fn pack_name(&self) -> &str {
        &self.pack_name
    }

    /// Classify a plain-text bulletin.
    pub fn analyze_text(&self, document: &str) -> Verdict {
        self.run(document, false).0
    }

    /// Classify and return the decision trace alongside the verdict.
    pub fn analyze_with_trace(&self, document: &str) -> (Verdict, AnalysisTrace) {
        self.run(document, true)
    }

    fn run(&self, document: &str, with_statements: bool) -> (Verdict, AnalysisTrace) {
        let upper = normalize(document);
        let bounds = self.extractor.locate(&upper);
        let section = &upper[bounds.range()];
        let section_chars = section.chars().count();

        if bounds.anchor_found {
            tracing::debug!(target: "donner::analysis", chars = section_chars, "extracted region section");
        } else {
            tracing::debug!(target: "donner::analysis", "region anchor not found, using full text");
        }

        let statements = if with_statements
            || tracing::enabled!(target: "donner::analysis", tracing::Level::DEBUG)
        {
            self.splitter.split(section)
        } else {
            Vec::new()
        };
        for (i, stmt) in statements.iter().enumerate() {
            tracing::debug!(
                target: "donner::analysis",
                index = i,
                scope = ?stmt.scope,
                text = %crate::text::truncate_chars(&stmt.text, 120),
                "statement"
            );
        }

        let closure_report = self.closures.detect(section);
        let score_report = self.scorer.score(section, &closure_report.summary);

        let (verdict, rule) = self.resolver.resolve(&ResolverInput {
            section,
            closures: closure_report.summary,
            scores: score_report.scores,
        });

        tracing::debug!(
            target: "donner::analysis",
            status = %verdict.status,
            ?rule,
            restriction = verdict.scores.restriction,
            open = verdict.scores.open,
            "verdict"
        );

        let trace = AnalysisTrace {
            pack: self.pack_name.clone(),
            section: bounds,
            section_chars,
            statements: if with_statements { statements } else { Vec::new() },
            closures: closure_report.findings,
            closure_summary: closure_report.summary,
            counted_restrictions: score_report.counted,
            skipped_truck_restrictions: score_report.skipped,
            open_signals: score_report.open_hits,
            directional_bonus: score_report.directional_bonus,
            rule,
        };

        (verdict, trace)
    }
}

/// Classify with the process-wide default analyzer (built-in pack).
///
/// Returns an UNKNOWN verdict if the built-in pack failed to compile.
pub fn analyze_text(document: &str) -> Verdict {
    let analyzer = DEFAULT_ANALYZER.get_or_init(|| match AdvisoryAnalyzer::with_defaults() {
        Ok(a) => Some(a),
        Err(e) => {
            tracing::error!(error = %e, "built-in signal pack failed to compile");
            None
        }
    });
    match analyzer {
        Some(a) => a.analyze_text(document),
        None => Verdict::unknown(),
    }
}

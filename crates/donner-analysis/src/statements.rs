//! Statement splitting for diagnostics.
//!
//! Caltrans separates conditions into sentence-like chunks that usually start
//! with phrases such as "IS CLOSED", "CHAINS ARE REQUIRED" or "ALL WESTBOUND".
//! The split is only logged and traced; verdicts never depend on it.

use regex::Regex;
use serde::Serialize;

use crate::pack::CompiledSignalPack;
use crate::vehicle_scope::{TruckClassifier, VehicleScope};

/// Chunks with this many trimmed chars or fewer are dropped.
const MIN_STATEMENT_CHARS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    pub offset: usize,
    pub text: String,
    pub scope: VehicleScope,
}

#[derive(Debug, Clone)]
pub struct StatementSplitter {
    breakers: Vec<Regex>,
    trucks: TruckClassifier,
}

impl StatementSplitter {
    pub fn new(pack: &CompiledSignalPack) -> Self {
        Self {
            breakers: pack.breakers.clone(),
            trucks: pack.trucks.clone(),
        }
    }

    /// Split before every breaker occurrence and tag each chunk's scope.
    pub fn split(&self, section: &str) -> Vec<Statement> {
        let mut cuts: Vec<usize> = self
            .breakers
            .iter()
            .flat_map(|b| b.find_iter(section).map(|m| m.start()))
            .collect();
        cuts.push(0);
        cuts.push(section.len());
        cuts.sort_unstable();
        cuts.dedup();

        cuts.windows(2)
            .filter_map(|pair| {
                let raw = &section[pair[0]..pair[1]];
                let text = raw.trim();
                if text.chars().count() <= MIN_STATEMENT_CHARS {
                    return None;
                }
                Some(Statement {
                    offset: pair[0],
                    text: text.to_string(),
                    scope: self.trucks.classify(text),
                })
            })
            .collect()
    }
}

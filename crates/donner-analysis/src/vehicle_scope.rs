//! Vehicle-scope classification.
//!
//! A span is truck-only when any commercial-vehicle indicator appears anywhere
//! in it. There is no weighting or negation: a span mentioning trucks and
//! general traffic together counts as truck-only.

use donner_core::errors::PatternError;
use regex::{RegexSet, RegexSetBuilder};
use serde::{Deserialize, Serialize};

use crate::pack::loader::compile_regex;

/// Which vehicles a statement speaks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleScope {
    AllVehicles,
    TruckOnly,
}

/// OR-combination of truck indicator patterns.
#[derive(Debug, Clone)]
pub struct TruckClassifier {
    ids: Vec<String>,
    set: RegexSet,
}

impl TruckClassifier {
    /// Build from `(id, pattern)` pairs, in order.
    pub fn new<'a, I>(indicators: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut ids = Vec::new();
        let mut patterns = Vec::new();
        for (id, pattern) in indicators {
            // Compile individually first so a bad pattern is reported by id.
            compile_regex(id, pattern)?;
            ids.push(id.to_string());
            patterns.push(pattern);
        }
        let set = RegexSetBuilder::new(&patterns)
            .case_insensitive(true)
            .build()
            .map_err(|e| PatternError::InvalidRegex {
                id: "truck_indicators".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { ids, set })
    }

    pub fn is_truck_only(&self, span: &str) -> bool {
        self.set.is_match(span)
    }

    pub fn classify(&self, span: &str) -> VehicleScope {
        if self.is_truck_only(span) {
            VehicleScope::TruckOnly
        } else {
            VehicleScope::AllVehicles
        }
    }

    /// Ids of every indicator present in `span`, in pack order.
    pub fn matched_indicators(&self, span: &str) -> Vec<&str> {
        self.set
            .matches(span)
            .into_iter()
            .filter_map(|idx| self.ids.get(idx).map(String::as_str))
            .collect()
    }

    pub fn indicator_count(&self) -> usize {
        self.ids.len()
    }
}

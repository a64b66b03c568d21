//! Signal pack loader: TOML parsing → `CompiledSignalPack` (regex pre-compiled).

use std::path::Path;

use donner_core::errors::PatternError;
use regex::{Regex, RegexBuilder};

use super::types::{ClosureKind, SignalDef, SignalPackSpec};
use crate::vehicle_scope::TruckClassifier;

/// A weighted signal with its regex compiled.
#[derive(Debug, Clone)]
pub struct CompiledSignal {
    pub id: String,
    pub weight: u32,
    pub regex: Regex,
    pub description: Option<String>,
}

/// A closure phrase family with its regex compiled.
#[derive(Debug, Clone)]
pub struct CompiledClosure {
    pub id: String,
    pub kind: ClosureKind,
    pub regex: Regex,
}

/// Region anchors compiled as case-insensitive literals.
#[derive(Debug, Clone)]
pub struct CompiledRegion {
    pub start_anchor: Option<Regex>,
    pub terminators: Vec<Regex>,
    /// Uppercased, matched against normalised section text.
    pub place_names: Vec<String>,
}

/// A fully compiled, ready-to-match signal pack.
#[derive(Debug, Clone)]
pub struct CompiledSignalPack {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    pub region: CompiledRegion,
    pub closures: Vec<CompiledClosure>,
    pub trucks: TruckClassifier,
    pub restriction: Vec<CompiledSignal>,
    pub open: Vec<CompiledSignal>,
    pub breakers: Vec<Regex>,
}

impl CompiledSignalPack {
    /// Total number of compiled patterns across all tables.
    pub fn pattern_count(&self) -> usize {
        self.closures.len()
            + self.trucks.indicator_count()
            + self.restriction.len()
            + self.open.len()
            + self.breakers.len()
    }
}

/// Parse and compile a pack from a TOML string.
pub fn load_from_str(toml_str: &str) -> Result<CompiledSignalPack, PatternError> {
    let spec: SignalPackSpec = toml::from_str(toml_str)?;
    compile(spec)
}

/// Read, parse and compile a pack file.
pub fn load_from_file(path: &Path) -> Result<CompiledSignalPack, PatternError> {
    let contents = std::fs::read_to_string(path).map_err(|source| PatternError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents)
}

/// Compile a parsed signal pack.
pub fn compile(spec: SignalPackSpec) -> Result<CompiledSignalPack, PatternError> {
    if spec.closure.is_empty() {
        return Err(PatternError::EmptyTable { table: "closure" });
    }
    if spec.truck_indicators.is_empty() {
        return Err(PatternError::EmptyTable { table: "truck_indicators" });
    }
    if spec.restriction.is_empty() {
        return Err(PatternError::EmptyTable { table: "restriction" });
    }
    if spec.open.is_empty() {
        return Err(PatternError::EmptyTable { table: "open" });
    }

    let region = CompiledRegion {
        start_anchor: spec
            .region
            .start_anchor
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(|a| compile_literal("region.start_anchor", a))
            .transpose()?,
        terminators: spec
            .region
            .terminators
            .iter()
            .map(|t| compile_literal("region.terminators", t))
            .collect::<Result<_, _>>()?,
        place_names: spec
            .region
            .place_names
            .iter()
            .map(|p| p.to_uppercase())
            .collect(),
    };

    let closures = spec
        .closure
        .iter()
        .map(|c| {
            Ok(CompiledClosure {
                id: c.id.clone(),
                kind: c.kind,
                regex: compile_regex(&c.id, &c.pattern)?,
            })
        })
        .collect::<Result<Vec<_>, PatternError>>()?;

    let trucks = TruckClassifier::new(
        spec.truck_indicators
            .iter()
            .map(|i| (i.id.as_str(), i.pattern.as_str())),
    )?;

    let restriction = compile_signals(&spec.restriction)?;
    let open = compile_signals(&spec.open)?;

    let breakers = spec
        .statements
        .breakers
        .iter()
        .map(|b| compile_regex("statements.breakers", b))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CompiledSignalPack {
        name: spec.pack.name,
        version: spec.pack.version,
        description: spec.pack.description,
        region,
        closures,
        trucks,
        restriction,
        open,
        breakers,
    })
}

fn compile_signals(defs: &[SignalDef]) -> Result<Vec<CompiledSignal>, PatternError> {
    defs.iter()
        .map(|def| {
            if def.weight == 0 {
                return Err(PatternError::ZeroWeight { id: def.id.clone() });
            }
            Ok(CompiledSignal {
                id: def.id.clone(),
                weight: def.weight,
                regex: compile_regex(&def.id, &def.pattern)?,
                description: def.description.clone(),
            })
        })
        .collect()
}

/// Compile a pattern case-insensitively, tagging failures with the pattern id.
pub(crate) fn compile_regex(id: &str, pattern: &str) -> Result<Regex, PatternError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| PatternError::InvalidRegex {
            id: id.to_string(),
            message: e.to_string(),
        })
}

fn compile_literal(id: &str, literal: &str) -> Result<Regex, PatternError> {
    compile_regex(id, &regex::escape(literal))
}

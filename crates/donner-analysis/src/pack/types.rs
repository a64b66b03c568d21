//! Serde types for the signal pack TOML schema.

use serde::{Deserialize, Serialize};

/// Top-level signal pack definition (one per TOML file).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalPackSpec {
    pub pack: PackMeta,
    #[serde(default)]
    pub region: RegionSpec,
    #[serde(default)]
    pub closure: Vec<ClosureDef>,
    #[serde(default)]
    pub truck_indicators: Vec<IndicatorDef>,
    #[serde(default)]
    pub restriction: Vec<SignalDef>,
    #[serde(default)]
    pub open: Vec<SignalDef>,
    #[serde(default)]
    pub statements: StatementSpec,
}

/// Pack metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackMeta {
    /// Unique pack identifier (e.g., "i80-donner").
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
}

/// Where the corridor's subsection sits inside the bulletin.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegionSpec {
    /// Literal start marker. `None` scores the whole document.
    pub start_anchor: Option<String>,
    /// Literal markers that end the subsection; the nearest one wins.
    #[serde(default)]
    pub terminators: Vec<String>,
    /// Known place names along the corridor.
    #[serde(default)]
    pub place_names: Vec<String>,
}

/// How a closure phrase is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosureKind {
    /// Full closure unless preceded by a direction or followed by truck wording.
    General,
    /// Full closure, unconditionally.
    BothDirections,
    /// Closes eastbound to everyone unless followed by truck wording.
    Eastbound,
    /// Closes westbound to everyone unless followed by truck wording.
    Westbound,
}

/// A closure phrase family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClosureDef {
    pub id: String,
    pub kind: ClosureKind,
    pub pattern: String,
}

/// A truck/commercial indicator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorDef {
    pub id: String,
    pub pattern: String,
}

/// A weighted restriction or open signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalDef {
    pub id: String,
    pub pattern: String,
    /// Must be positive.
    pub weight: u32,
    pub description: Option<String>,
}

/// Phrases that start a new statement, used to split sections for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatementSpec {
    #[serde(default)]
    pub breakers: Vec<String>,
}

//! Signal Pack System: TOML-driven pattern tables for the advisory engine.
//!
//! Architecture:
//! - `types.rs`: SignalPackSpec, ClosureDef, SignalDef serde types
//! - `loader.rs`: TOML parsing → CompiledSignalPack (regex pre-compiled)
//!
//! The built-in I-80 pack is embedded at compile time via `include_str!`.
//! A custom pack can replace it through `analysis.pack_path`.

pub mod loader;
pub mod types;

use std::path::Path;

use donner_core::config::AnalysisConfig;
use donner_core::errors::PatternError;

pub use loader::{CompiledClosure, CompiledRegion, CompiledSignal, CompiledSignalPack};
pub use types::{ClosureKind, SignalPackSpec};

const BUILTIN_PACK: &str = include_str!("packs/i80_donner.toml");

/// Raw TOML of the built-in pack (useful as a template for custom packs).
pub fn builtin_source() -> &'static str {
    BUILTIN_PACK
}

/// Compile the built-in I-80 Donner pack.
pub fn builtin() -> Result<CompiledSignalPack, PatternError> {
    loader::load_from_str(BUILTIN_PACK)
}

/// Load the pack named by `config.pack_path`, or the built-in pack.
pub fn load_for_config(config: &AnalysisConfig) -> Result<CompiledSignalPack, PatternError> {
    match config.pack_path.as_deref() {
        Some(path) => {
            let pack = loader::load_from_file(Path::new(path))?;
            tracing::info!(pack = %pack.name, path, "loaded custom signal pack");
            Ok(pack)
        }
        None => builtin(),
    }
}

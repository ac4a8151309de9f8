use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::LexipixError;

/// How a decode token that is absent from the dictionary is resolved.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LookupMode {
    /// A miss is a `WordNotFound` error.
    #[default]
    Strict,
    /// A miss resolves to its binary-search insertion point.
    Legacy,
}

/// Sizing rule used by the fallback bitmap renderer.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderStrategy {
    /// Grid sized from `len / 2`, pixels cycled over `len / 3`.
    #[default]
    Legacy,
    /// Grid sized and cycled over `len / 3`.
    Consistent,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LexipixConfig {
    pub dictionary_path: PathBuf,
    pub lookup: LookupMode,
    pub render_strategy: RenderStrategy,
    /// Decoded payloads shorter than this are reported instead of rendered.
    pub min_render_len: usize,
}

impl Default for LexipixConfig {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from("assets/words.txt"),
            lookup: LookupMode::Strict,
            render_strategy: RenderStrategy::Legacy,
            min_render_len: 0x100,
        }
    }
}

impl LexipixConfig {
    /// Parses a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, LexipixError> {
        Ok(toml::from_str(raw)?)
    }

    /// Reads and parses a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexipixError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!("Config: loaded {}", path.display());
        Ok(config)
    }
}

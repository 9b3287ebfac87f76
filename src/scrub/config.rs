//! Build-time configuration: the target file list and the pattern parameters.
//!
//! The binary embeds `scrub.toml` from the crate root. Nothing is read from
//! flags, the environment, or the filesystem at runtime.

use std::path::PathBuf;

use serde::Deserialize;

use super::error::ScrubError;
use super::pattern::{CodeRange, EmojiPattern};

const BUILTIN_CONFIG: &str = include_str!("../../scrub.toml");

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScrubConfig {
    /// Files processed, in order.
    pub targets: Vec<PathBuf>,
    pub pattern: PatternConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternConfig {
    pub ranges: Vec<CodeRange>,
    /// Each entry may hold several chars (a symbol plus its variation selector).
    #[serde(default)]
    pub extras: Vec<String>,
}

impl ScrubConfig {
    /// Parse the configuration compiled into the binary.
    pub fn builtin() -> Result<Self, toml::de::Error> {
        Self::from_toml_str(BUILTIN_CONFIG)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Compile the pattern section.
    pub fn build_pattern(&self) -> Result<EmojiPattern, ScrubError> {
        self.pattern.build()
    }
}

impl PatternConfig {
    pub fn extra_chars(&self) -> Vec<char> {
        self.extras.iter().flat_map(|s| s.chars()).collect()
    }

    pub fn build(&self) -> Result<EmojiPattern, ScrubError> {
        EmojiPattern::new(&self.ranges, &self.extra_chars())
    }
}

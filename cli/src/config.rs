//! CLI configuration: an optional TOML file, overridden by flags.
//!
//! ```toml
//! chunk_width = 4
//! format = "chunks"
//! ```

use std::fs;

use anyhow::{Context, Result};
use clap::ValueEnum;
use fatnum::ChunkWidth;
use serde::Deserialize;

/// How results are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Decimal,
    Hex,
    Chunks,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub chunk_width: usize,
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            chunk_width: ChunkWidth::DEFAULT.get(),
            format: OutputFormat::Decimal,
        }
    }
}

impl CliConfig {
    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config {path}"))?;
        let config: CliConfig =
            toml::from_str(&content).with_context(|| format!("Invalid config {path}"))?;
        log::debug!("loaded config from {path}: {config:?}");
        Ok(config)
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(mut self, chunk_width: Option<usize>, format: Option<OutputFormat>) -> Self {
        if let Some(w) = chunk_width {
            self.chunk_width = w;
        }
        if let Some(f) = format {
            self.format = f;
        }
        self
    }

    pub fn chunk_width(&self) -> Result<ChunkWidth> {
        ChunkWidth::new(self.chunk_width).context("Invalid chunk width")
    }
}

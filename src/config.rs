//! Configuration for the unmap CLI.
//!
//! Defaults live in an optional `unmap.toml` in the working directory;
//! CLI flags override whatever is configured here, and a missing file
//! just means built-in defaults:
//!
//! ```toml
//! [output]
//! dir = "blob"
//!
//! [sanitize]
//! replacement = "_"
//! max_bytes = 255
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants;

/// unmap.toml configuration structure.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub sanitize: SanitizeConfig,
}

/// Where extracted sources land.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_out_dir")]
    pub dir: String,
}

/// Sanitizer knobs.
#[derive(Debug, Deserialize)]
pub struct SanitizeConfig {
    #[serde(default = "default_replacement")]
    pub replacement: String,
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_out_dir(),
        }
    }
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            replacement: default_replacement(),
            max_bytes: default_max_bytes(),
        }
    }
}

fn default_out_dir() -> String {
    constants::DEFAULT_OUT_DIR.to_string()
}

fn default_replacement() -> String {
    constants::DEFAULT_REPLACEMENT.to_string()
}

fn default_max_bytes() -> usize {
    constants::MAX_NAME_BYTES
}

impl Config {
    /// Load configuration from unmap.toml in the current directory.
    ///
    /// A missing file yields the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if unmap.toml exists but cannot be read or
    /// contains invalid TOML.
    pub fn load() -> Result<Self> {
        Self::load_from(constants::CONFIG_FILE)
    }

    /// Load configuration from the specified path, defaulting if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read (IO
    /// error), contains invalid TOML syntax, or has fields of the wrong
    /// type.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }
}

//! unmap - extract the original sources embedded in JavaScript source maps.
//!
//! Bundlers record the paths and (optionally) the full text of every
//! original file inside the `.map` file they emit. unmap reads such a
//! map and writes those files back to disk, rewriting each recorded
//! path so it is safe to create on Windows, macOS, and Linux.
//!
//! The interesting part is the path hygiene, not the I/O:
//!
//! - [`sanitize`] - forbidden-character rewriting and byte-bounded
//!   truncation for untrusted, cross-platform path strings
//! - [`sourcemap`] - the source-map container model
//! - [`commands`] - the `extract` and `list` CLI commands
//! - [`config`] - optional `unmap.toml` defaults
//!
//! # Examples
//!
//! ```
//! use unmap::sanitize_and_truncate;
//!
//! let safe = sanitize_and_truncate("webpack:///src/a?.js", "_", 255);
//! assert_eq!(safe, "webpack_/src/a_.js");
//! ```

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

pub mod commands;
pub mod config;
pub mod constants;
pub mod sanitize;
pub mod sourcemap;

pub use sanitize::{sanitize_and_truncate, sanitize_and_truncate_with};

/// Command-line interface definition.
#[derive(Parser)]
#[command(
    name = "unmap",
    version,
    about = "Extract the original sources embedded in a JavaScript source map"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract embedded sources into an output directory
    Extract {
        /// Path to the .map file
        map: PathBuf,

        /// Output directory (default: blob, or [output].dir from unmap.toml)
        #[arg(short, long)]
        out: Option<String>,

        /// Replacement for forbidden path characters
        #[arg(short, long)]
        replacement: Option<String>,

        /// Byte budget for each extracted path
        #[arg(long)]
        max_bytes: Option<usize>,
    },

    /// Show the raw-to-sanitized path mapping without writing anything
    List {
        /// Path to the .map file
        map: PathBuf,

        /// Replacement for forbidden path characters
        #[arg(short, long)]
        replacement: Option<String>,

        /// Byte budget for each extracted path
        #[arg(long)]
        max_bytes: Option<usize>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

//! Preview what an extraction would write, without touching disk.
//!
//! Prints one line per map entry showing the recorded path and the
//! sanitized target it would become, plus markers for entries that
//! would be skipped.

use anyhow::Result;
use std::path::Path;

use super::extract::{PlannedPath, plan_path};
use crate::sourcemap::SourceMap;

/// List every source in `map_path` with its write target.
///
/// # Errors
///
/// Returns an error if the map cannot be loaded.
pub fn execute(map_path: &Path, replacement: &str, max_bytes: usize) -> Result<()> {
    let map = SourceMap::load_from(map_path)?;

    let mut writable = 0;

    for entry in map.entries() {
        let marker = if entry.content.is_some() {
            ""
        } else {
            "  (no content)"
        };

        match plan_path(entry.source, replacement, max_bytes, entry.index) {
            PlannedPath::File(target) => {
                if entry.content.is_some() {
                    writable += 1;
                }
                println!("  {} -> {}{marker}", entry.source, target.display());
            },
            PlannedPath::Escapes => {
                println!("  {} -> (escapes output root, skipped){marker}", entry.source);
            },
        }
    }

    println!();
    println!("{writable} of {} sources would be written", map.sources.len());

    Ok(())
}

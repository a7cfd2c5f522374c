//! Extract embedded sources from a source map to disk.
//!
//! Every recorded path goes through the sanitizer before it touches the
//! filesystem, so a hostile or merely cross-platform map cannot name a
//! device, smuggle control characters, or overflow a filename limit.
//! Because `..` survives sanitization as an ordinary segment, the
//! planner additionally walks the cleaned path's components and refuses
//! any entry that would climb out of the output root.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::sanitize::sanitize_and_truncate;
use crate::sourcemap::SourceMap;

/// Counters reported after an extraction run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Files written under the output root.
    pub written: usize,
    /// Entries skipped because the map carried no content for them.
    pub missing_content: usize,
    /// Entries skipped because their path would escape the output root.
    pub escaping: usize,
}

/// Where a map entry may be written, relative to the output root.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum PlannedPath {
    /// Safe relative target.
    File(PathBuf),
    /// The entry's `..` segments climb past the root; never written.
    Escapes,
}

/// Turn a recorded source path into a write target under the root.
///
/// Sanitizes and truncates the raw path, substitutes a generated
/// `source-<index>` name when nothing survives (the sanitizer never
/// guesses a fallback), then resolves the segments lexically: `.` and
/// empty segments drop, `..` pops, and popping past the root marks the
/// entry as escaping.
pub(crate) fn plan_path(
    raw: &str,
    replacement: &str,
    max_bytes: usize,
    index: usize,
) -> PlannedPath {
    let cleaned = sanitize_and_truncate(raw, replacement, max_bytes);
    let name = if cleaned.is_empty() {
        warn!(source = %raw, index, "path sanitized to nothing, using placeholder");
        placeholder(index)
    } else {
        cleaned
    };

    let mut target = PathBuf::new();
    for segment in name.split('/') {
        match segment {
            "" | "." => {},
            ".." => {
                if !target.pop() {
                    return PlannedPath::Escapes;
                }
            },
            normal => target.push(normal),
        }
    }

    // e.g. "./" resolves to no segments; still write the entry somewhere.
    if target.as_os_str().is_empty() {
        target.push(placeholder(index));
    }

    PlannedPath::File(target)
}

fn placeholder(index: usize) -> String {
    format!("source-{index}")
}

/// Extract every embedded source in `map_path` into `out_dir`.
///
/// # Errors
///
/// Returns an error if the map cannot be loaded or a file/directory
/// under the output root cannot be created. Entries without content or
/// with escaping paths are skipped and counted, not treated as errors.
pub fn execute(
    map_path: &Path,
    out_dir: &Path,
    replacement: &str,
    max_bytes: usize,
) -> Result<ExtractStats> {
    let map = SourceMap::load_from(map_path)?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    println!(
        "Extracting {} sources into {}/",
        map.sources.len(),
        out_dir.display()
    );
    println!();

    let progress = ProgressBar::new(map.sources.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut stats = ExtractStats::default();

    for entry in map.entries() {
        progress.inc(1);

        let Some(content) = entry.content else {
            warn!(source = %entry.source, index = entry.index, "no embedded content, skipping");
            stats.missing_content += 1;
            continue;
        };

        let relative = match plan_path(entry.source, replacement, max_bytes, entry.index) {
            PlannedPath::File(path) => path,
            PlannedPath::Escapes => {
                warn!(source = %entry.source, index = entry.index, "path escapes output root, skipping");
                stats.escaping += 1;
                continue;
            },
        };

        let target = out_dir.join(&relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&target, content)
            .with_context(|| format!("Failed to write source file: {}", target.display()))?;

        debug!(source = %entry.source, target = %relative.display(), "wrote source");
        stats.written += 1;
    }

    progress.finish_and_clear();

    println!("Extracted {} files", stats.written);
    if stats.missing_content > 0 {
        println!("  Skipped (no embedded content): {}", stats.missing_content);
    }
    if stats.escaping > 0 {
        println!("  Skipped (escapes output root):  {}", stats.escaping);
    }

    Ok(stats)
}

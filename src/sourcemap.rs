//! Source-map container parsing.
//!
//! A source map is a JSON document whose `sources` array names the
//! original files and whose optional `sourcesContent` array carries
//! their text. Only those two fields drive extraction; the rest of the
//! format (`mappings`, `names`, and any vendor extensions) is accepted
//! and ignored. Index maps (`sections`) are not supported.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for loading a source map from disk.
#[derive(Debug, thiserror::Error)]
pub enum SourceMapError {
    /// The map file could not be read.
    #[error("failed to read source map {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The map file is not valid source-map JSON.
    #[error("failed to parse source map {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Deserialized source-map container.
///
/// `sources` is the only required field; everything else is optional in
/// the wild even when the format revision says otherwise, so parsing is
/// deliberately lenient.
#[derive(Debug, Deserialize)]
pub struct SourceMap {
    /// Format revision, `3` for every map seen in practice. Passive.
    #[serde(default)]
    pub version: Option<u32>,
    /// Name of the generated file the map describes. Passive.
    #[serde(default)]
    pub file: Option<String>,
    /// Prefix the producer stripped from `sources`. Passive; extraction
    /// works on the recorded strings as-is.
    #[serde(default, rename = "sourceRoot")]
    pub source_root: Option<String>,
    /// Paths of the original files, in mapping order.
    pub sources: Vec<String>,
    /// Embedded text of each original file; entries may be `null`, and
    /// the array may be shorter than `sources` or absent entirely.
    #[serde(default, rename = "sourcesContent")]
    pub sources_content: Option<Vec<Option<String>>>,
}

/// One `(path, content)` pair from a map, by position.
#[derive(Debug)]
pub struct SourceEntry<'a> {
    /// Position in the `sources` array.
    pub index: usize,
    /// Recorded path, untrusted.
    pub source: &'a str,
    /// Embedded text, if the producer included it.
    pub content: Option<&'a str>,
}

impl SourceMap {
    /// Load and parse a source map from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceMapError::Io`] if the file cannot be read and
    /// [`SourceMapError::Json`] if it is not a valid map document.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SourceMapError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SourceMapError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| SourceMapError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Iterate the map's sources zipped with their embedded content.
    ///
    /// Holes in `sourcesContent` (a `null` entry, a short array, or no
    /// array at all) surface as `content: None`.
    pub fn entries(&self) -> impl Iterator<Item = SourceEntry<'_>> {
        self.sources.iter().enumerate().map(|(index, source)| {
            let content = self
                .sources_content
                .as_ref()
                .and_then(|all| all.get(index))
                .and_then(|entry| entry.as_deref());
            SourceEntry {
                index,
                source,
                content,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> SourceMap {
        serde_json::from_str(json).expect("test map should parse")
    }

    #[test]
    fn test_parse_minimal_map() {
        let map = parse(r#"{"sources": ["a.js"]}"#);
        assert_eq!(map.sources, vec!["a.js"]);
        assert!(map.sources_content.is_none());
    }

    #[test]
    fn test_parse_full_map_ignores_mappings() {
        let map = parse(
            r#"{
                "version": 3,
                "file": "bundle.js",
                "sourceRoot": "webpack://",
                "sources": ["a.js", "b.js"],
                "sourcesContent": ["let a;", null],
                "names": ["a"],
                "mappings": "AAAA"
            }"#,
        );
        assert_eq!(map.version, Some(3));
        assert_eq!(map.file.as_deref(), Some("bundle.js"));
        assert_eq!(map.sources.len(), 2);
    }

    #[test]
    fn test_entries_zip_content_by_index() {
        let map = parse(
            r#"{"sources": ["a.js", "b.js"], "sourcesContent": ["let a;", "let b;"]}"#,
        );
        let entries: Vec<_> = map.entries().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].source, "a.js");
        assert_eq!(entries[0].content, Some("let a;"));
        assert_eq!(entries[1].index, 1);
        assert_eq!(entries[1].content, Some("let b;"));
    }

    #[test]
    fn test_entries_tolerate_null_and_short_content() {
        let map = parse(
            r#"{"sources": ["a.js", "b.js", "c.js"], "sourcesContent": ["let a;", null]}"#,
        );
        let entries: Vec<_> = map.entries().collect();
        assert_eq!(entries[0].content, Some("let a;"));
        assert_eq!(entries[1].content, None);
        assert_eq!(entries[2].content, None);
    }

    #[test]
    fn test_entries_without_content_array() {
        let map = parse(r#"{"sources": ["a.js"]}"#);
        let entries: Vec<_> = map.entries().collect();
        assert_eq!(entries[0].content, None);
    }

    #[test]
    fn test_missing_sources_is_a_parse_error() {
        let result: Result<SourceMap, _> = serde_json::from_str(r#"{"version": 3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = SourceMap::load_from("does/not/exist.js.map").unwrap_err();
        assert!(matches!(err, SourceMapError::Io { .. }));
    }

    #[test]
    fn test_load_from_invalid_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.js.map");
        std::fs::write(&path, "not json").expect("write");

        let err = SourceMap::load_from(&path).unwrap_err();
        assert!(matches!(err, SourceMapError::Json { .. }));
        assert!(err.to_string().contains("broken.js.map"));
    }
}

//! Fuzz target for source-map parsing.
//!
//! This fuzzer tests that:
//! 1. No byte sequence makes the parser panic
//! 2. A successfully parsed map always yields one entry per source
//!
//! Run with: `cargo +nightly fuzz run fuzz_sourcemap_parsing`

#![no_main]

use libfuzzer_sys::fuzz_target;
use unmap::sourcemap::SourceMap;

fuzz_target!(|data: &[u8]| {
    // The parser must never panic, only return errors
    let Ok(map) = serde_json::from_slice::<SourceMap>(data) else {
        return;
    };

    // A parsed map yields exactly one entry per source, in order
    let entries: Vec<_> = map.entries().collect();
    assert_eq!(entries.len(), map.sources.len());
    for (position, entry) in entries.iter().enumerate() {
        assert_eq!(entry.index, position);
    }
});

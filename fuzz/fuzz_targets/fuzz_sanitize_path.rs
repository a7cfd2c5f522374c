//! Fuzz target for `sanitize_and_truncate` - cross-platform path hygiene.
//!
//! This fuzzer tests that:
//! 1. No input causes a panic
//! 2. Output always fits the byte budget
//! 3. Forbidden characters, controls, and separator runs never survive
//!
//! Run with: `cargo +nightly fuzz run fuzz_sanitize_path`

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use unmap::sanitize::{sanitize, sanitize_and_truncate};

/// Structured input for more targeted fuzzing.
#[derive(Arbitrary, Debug)]
struct PathInput {
    /// Raw path string to test
    path: String,
    /// Byte budget to apply
    budget: u16,
    /// Whether to prepend path traversal patterns
    inject_traversal: bool,
    /// Number of `..` components to inject
    traversal_depth: u8,
    /// Whether to append a trailing dot run
    inject_trailing_dots: bool,
}

impl PathInput {
    /// Build the final path string for testing.
    fn build(&self) -> String {
        let mut result = self.path.clone();

        if self.inject_traversal {
            let traversal = "../".repeat(self.traversal_depth as usize);
            result = format!("{traversal}{result}");
        }

        if self.inject_trailing_dots {
            result.push_str("...");
        }

        result
    }
}

fuzz_target!(|data: PathInput| {
    let path = data.build();
    let budget = data.budget as usize;

    // The function must never panic
    let out = sanitize_and_truncate(&path, "_", budget);

    // INVARIANT 1: output fits the byte budget
    assert!(
        out.len() <= budget,
        "output {} bytes exceeds budget {} for input {:?}",
        out.len(),
        budget,
        path
    );

    // INVARIANT 2: forbidden and control characters never survive
    for ch in out.chars() {
        assert!(
            !matches!(ch, '?' | '<' | '>' | ':' | '*' | '|' | '"'),
            "forbidden char {:?} survived in {:?} from input {:?}",
            ch,
            out,
            path
        );
        assert!(
            !matches!(ch, '\u{0000}'..='\u{001f}' | '\u{0080}'..='\u{009f}'),
            "control char {:?} survived in {:?} from input {:?}",
            ch,
            out,
            path
        );
    }

    // INVARIANT 3: separators are normalized
    assert!(
        !out.contains('\\') && !out.contains("//"),
        "separator run survived in {:?} from input {:?}",
        out,
        path
    );

    // INVARIANT 4: the result is a prefix of the untruncated sanitized form
    let sanitized = sanitize(&path, "_");
    assert!(
        sanitized.starts_with(&out),
        "output {:?} is not a prefix of sanitized {:?}",
        out,
        sanitized
    );

    // INVARIANT 5: deterministic
    assert_eq!(out, sanitize_and_truncate(&path, "_", budget));
});

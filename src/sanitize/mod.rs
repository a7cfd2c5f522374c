//! Path sanitization and byte-bounded truncation.
//!
//! Paths recorded in a source map are untrusted input: they may carry
//! absolute prefixes, drive letters, `..` runs, reserved device names,
//! control characters, or names longer than any filesystem accepts. This
//! module turns such a string into one that is safe to use as a relative
//! path on Windows, macOS, and Linux and that fits a fixed byte budget.
//!
//! The module is organized into two separately testable stages composed
//! by a thin orchestrator:
//!
//! - [`rules`] - ordered rewrite rules ([`sanitize`])
//! - [`truncate`] - code-point-boundary truncation ([`truncate_to_bytes`])
//!
//! The whole pipeline is a pure function of (input, replacement, budget):
//! no state, no I/O, safely reentrant, and linear in input length. It
//! never fails; inputs that sanitize to nothing produce the empty string,
//! and callers that need a non-empty name must substitute their own
//! fallback.

mod rules;
mod truncate;

pub use rules::{WINDOWS_RESERVED_NAMES, sanitize};
pub use truncate::truncate_to_bytes;

use tracing::debug;

/// Sanitize `raw` and trim the result to at most `max_bytes` UTF-8 bytes.
///
/// Equivalent to [`sanitize_and_truncate_with`] with `str::len` as the
/// byte-length function, which is correct for anything persisted as
/// UTF-8. The conventional arguments are `"_"` and
/// [`MAX_NAME_BYTES`](crate::constants::MAX_NAME_BYTES).
///
/// # Examples
///
/// ```
/// use unmap::sanitize::sanitize_and_truncate;
///
/// assert_eq!(sanitize_and_truncate("src/app*.js", "_", 255), "src/app_.js");
/// assert_eq!(sanitize_and_truncate("con.js", "_", 255), "_");
/// assert_eq!(sanitize_and_truncate("", "_", 255), "");
/// ```
pub fn sanitize_and_truncate(raw: &str, replacement: &str, max_bytes: usize) -> String {
    sanitize_and_truncate_with(raw, replacement, max_bytes, str::len)
}

/// Sanitize `raw` and trim the result to at most `max_bytes` as measured
/// by `byte_len`.
///
/// `byte_len` maps a one-code-point segment to its encoded byte count
/// and must be consistent with the encoding the caller persists names
/// in; see [`truncate_to_bytes`] for the truncation contract.
pub fn sanitize_and_truncate_with<F>(
    raw: &str,
    replacement: &str,
    max_bytes: usize,
    byte_len: F,
) -> String
where
    F: Fn(&str) -> usize,
{
    let sanitized = sanitize(raw, replacement);
    let truncated = truncate_to_bytes(&sanitized, max_bytes, byte_len);
    if truncated.len() == sanitized.len() {
        if sanitized != raw {
            debug!(raw = %raw, sanitized = %sanitized, "rewrote unsafe path");
        }
        sanitized
    } else {
        debug!(raw = %raw, truncated = %truncated, "trimmed path to byte budget");
        truncated.to_string()
    }
}

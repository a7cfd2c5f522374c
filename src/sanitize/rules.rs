//! Ordered rewrite rules for cross-platform path strings.
//!
//! Source maps record paths from whatever machine produced the bundle:
//! absolute Unix paths, Windows drive letters, webpack pseudo-URLs with
//! `?` query suffixes, and occasionally garbage. These rules rewrite such
//! a string into one that is usable as a relative path on Windows, macOS,
//! and Linux at the same time (the conservative intersection of their
//! constraints).
//!
//! The rules run in a fixed order; later rules must never reintroduce
//! characters banned by earlier ones, and the final separator collapse
//! must see the fully-replaced string.

/// Reserved Windows device names.
///
/// Windows treats these as device names regardless of extension:
/// - `CON`, `PRN`, `AUX`, `NUL`
/// - `COM0` through `COM9`
/// - `LPT0` through `LPT9`
pub const WINDOWS_RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM0", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7",
    "COM8", "COM9", "LPT0", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8",
    "LPT9",
];

/// Rewrite an arbitrary string into one safe for use as a relative path on
/// Windows, macOS, and Linux simultaneously.
///
/// Applies, in order:
/// 1. A run of leading `.` characters collapses to a single `.`
///    (dotfiles like `.env` keep their dot, `...rc` becomes `.rc`).
/// 2. Each of `? < > : * | "` is replaced by `replacement`.
/// 3. Each control character (U+0000–U+001F, U+0080–U+009F) is replaced
///    by `replacement`.
/// 4. A string consisting solely of dots is replaced by `replacement`.
/// 5. A string that is exactly a reserved Windows device name, optionally
///    followed by `.` and an extension, is replaced whole by `replacement`
///    (the extension is dropped with it; see the module tests).
/// 6. A trailing run of `.` or whitespace is replaced by a single
///    `replacement` (significant on Windows, silently dropped by some
///    tools).
/// 7. Every run of `/` or `\` collapses to a single `/`.
///
/// Never fails: the empty string passes through empty, and callers that
/// need a non-empty name must handle that themselves. `replacement` is
/// not itself cleansed; callers are expected to pass something safe,
/// conventionally `"_"`.
///
/// # Examples
///
/// ```
/// use unmap::sanitize::sanitize;
///
/// assert_eq!(sanitize("webpack:///src/app.js?1a2b", "_"), "webpack_/src/app.js_1a2b");
/// assert_eq!(sanitize("src\\lib\\mod.rs", "_"), "src/lib/mod.rs");
/// assert_eq!(sanitize("con.js", "_"), "_");
/// ```
pub fn sanitize(raw: &str, replacement: &str) -> String {
    let s = collapse_leading_dots(raw);
    let s = replace_matching(&s, replacement, is_illegal);
    let s = replace_matching(&s, replacement, is_control);
    let s = replace_all_dots(&s, replacement);
    let s = replace_reserved_device(&s, replacement);
    let s = replace_trailing_junk(&s, replacement);
    collapse_separators(&s)
}

/// Characters that are illegal in file names on at least one target OS.
fn is_illegal(ch: char) -> bool {
    matches!(ch, '?' | '<' | '>' | ':' | '*' | '|' | '"')
}

/// C0 and C1 control characters.
fn is_control(ch: char) -> bool {
    matches!(ch, '\u{0000}'..='\u{001f}' | '\u{0080}'..='\u{009f}')
}

/// Rule 1: collapse a leading run of dots to a single dot.
fn collapse_leading_dots(s: &str) -> String {
    let rest = s.trim_start_matches('.');
    if s.len() - rest.len() > 1 {
        format!(".{rest}")
    } else {
        s.to_string()
    }
}

/// Rules 2 and 3: replace every character matching `matches` individually.
fn replace_matching(s: &str, replacement: &str, matches: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if matches(ch) {
            out.push_str(replacement);
        } else {
            out.push(ch);
        }
    }
    out
}

/// Rule 4: a string that is nothing but dots would resolve to the current
/// or parent directory, so it is replaced whole.
fn replace_all_dots(s: &str, replacement: &str) -> String {
    if !s.is_empty() && s.chars().all(|c| c == '.') {
        replacement.to_string()
    } else {
        s.to_string()
    }
}

/// Rule 5: replace a whole-string reserved device name match.
///
/// The optional-extension part mirrors the original tooling exactly: the
/// stem is everything before the first dot, and a match consumes the
/// entire string including any extension.
fn replace_reserved_device(s: &str, replacement: &str) -> String {
    let stem = s.split('.').next().unwrap_or(s).to_ascii_uppercase();
    if WINDOWS_RESERVED_NAMES.contains(&stem.as_str()) {
        replacement.to_string()
    } else {
        s.to_string()
    }
}

/// Rule 6: replace a trailing run of dots/whitespace with one `replacement`.
fn replace_trailing_junk(s: &str, replacement: &str) -> String {
    let trimmed = s.trim_end_matches(|c: char| c == '.' || c.is_whitespace());
    if trimmed.len() < s.len() {
        format!("{trimmed}{replacement}")
    } else {
        s.to_string()
    }
}

/// Rule 7: collapse every run of `/` or `\` to a single `/`.
fn collapse_separators(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for ch in s.chars() {
        if ch == '/' || ch == '\\' {
            if !in_run {
                out.push('/');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

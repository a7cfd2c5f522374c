//! Byte-bounded truncation on code-point boundaries.
//!
//! Filesystems limit name length in bytes, not characters. Cutting a
//! UTF-8 string at a raw byte offset can split a multi-byte code point
//! and produce an invalid name, so truncation walks the string one code
//! point at a time and stops before the budget overflows. A Rust `char`
//! is a whole Unicode scalar value, which subsumes the surrogate-pair
//! reassembly UTF-16-based tooling has to do by hand: an astral
//! character is one indivisible segment here.
//!
//! The byte-length function is injected so the budget can be measured in
//! whatever encoding the caller persists the string in; UTF-8 callers
//! pass `str::len`.

/// Return the longest prefix of `s` whose encoded length does not exceed
/// `max_bytes`, never cutting a code point in half.
///
/// `byte_len` maps a one-code-point segment to its encoded byte count.
/// The walk keeps a running total: a segment that lands exactly on the
/// budget is included, a segment that overflows it is excluded along with
/// everything after it, and a string that never reaches the budget is
/// returned unchanged (borrowed, no reallocation).
///
/// # Examples
///
/// ```
/// use unmap::sanitize::truncate_to_bytes;
///
/// // "é" is two bytes in UTF-8, so the budget of 3 lands exactly on it.
/// assert_eq!(truncate_to_bytes("héllo", 3, str::len), "hé");
///
/// // A budget of 0 always yields the empty prefix.
/// assert_eq!(truncate_to_bytes("abc", 0, str::len), "");
///
/// // Already-fitting strings come back untouched.
/// assert_eq!(truncate_to_bytes("abc", 255, str::len), "abc");
/// ```
pub fn truncate_to_bytes<F>(s: &str, max_bytes: usize, byte_len: F) -> &str
where
    F: Fn(&str) -> usize,
{
    let mut total = 0usize;
    for (start, ch) in s.char_indices() {
        let end = start + ch.len_utf8();
        total += byte_len(&s[start..end]);
        if total == max_bytes {
            return &s[..end];
        }
        if total > max_bytes {
            return &s[..start];
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Byte length of a segment when persisted as UTF-16.
    fn utf16_len(segment: &str) -> usize {
        segment.encode_utf16().count() * 2
    }

    #[test]
    fn test_ascii_exact_budget() {
        let input = "a".repeat(300);
        let out = truncate_to_bytes(&input, 255, str::len);
        assert_eq!(out.len(), 255);
        assert_eq!(out, &input[..255]);
    }

    #[test]
    fn test_under_budget_is_identity() {
        let input = "short.js";
        let out = truncate_to_bytes(input, 255, str::len);
        assert_eq!(out, input);
        // Borrowed prefix of the same allocation, not a copy.
        assert_eq!(out.as_ptr(), input.as_ptr());
    }

    #[test]
    fn test_zero_budget_yields_empty() {
        assert_eq!(truncate_to_bytes("anything", 0, str::len), "");
        assert_eq!(truncate_to_bytes("", 0, str::len), "");
    }

    #[test]
    fn test_first_segment_wider_than_budget_yields_empty() {
        // U+1F600 is four bytes; budgets 1-3 cannot fit it.
        assert_eq!(truncate_to_bytes("\u{1f600}", 3, str::len), "");
    }

    #[test]
    fn test_astral_segment_never_split() {
        // 252 ASCII bytes then a 4-byte astral char: including it would
        // need 256 bytes, so it is dropped whole along with the tail.
        let input = format!("{}\u{1f600}tail", "a".repeat(252));
        let out = truncate_to_bytes(&input, 255, str::len);
        assert_eq!(out.len(), 252);
        assert!(out.chars().all(|c| c == 'a'));
    }

    #[test]
    fn test_multibyte_exact_boundary_included() {
        // 253 ASCII bytes then "é" (2 bytes) lands exactly on 255.
        let input = format!("{}\u{00e9}tail", "a".repeat(253));
        let out = truncate_to_bytes(&input, 255, str::len);
        assert_eq!(out.len(), 255);
        assert!(out.ends_with('\u{00e9}'));
    }

    #[test]
    fn test_injected_utf16_length() {
        // In UTF-16, "abc" is 6 bytes; a budget of 4 keeps two chars.
        assert_eq!(truncate_to_bytes("abc", 4, utf16_len), "ab");
        // An astral char is a surrogate pair: 4 bytes, kept or dropped whole.
        assert_eq!(truncate_to_bytes("\u{1f600}", 4, utf16_len), "\u{1f600}");
        assert_eq!(truncate_to_bytes("\u{1f600}", 3, utf16_len), "");
    }

    #[test]
    fn test_result_is_char_prefix() {
        let input = "αβγδε";
        for budget in 0..=input.len() {
            let out = truncate_to_bytes(input, budget, str::len);
            assert!(input.starts_with(out));
            assert!(out.len() <= budget);
        }
    }
}

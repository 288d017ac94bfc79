//! Utility functions for string processing.

/// Index of the first code point where `a` and `b` differ.
///
/// `None` when the strings are equal. When one is a strict prefix of the
/// other, the answer is the shorter length.
pub fn diff_index(a: &[char], b: &[char]) -> Option<usize> {
    if a == b {
        return None;
    }
    Some(
        a.iter()
            .zip(b.iter())
            .position(|(ca, cb)| ca != cb)
            .unwrap_or_else(|| a.len().min(b.len())),
    )
}

/// Length of the common prefix of two strings (in characters).
///
/// Counts Unicode scalar values, not bytes. Empty when either side is empty.
pub fn common_prefix_len_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    diff_index(a, b).unwrap_or(a.len())
}

/// The common prefix of two strings, borrowed from `a`.
pub fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let len = common_prefix_len_chars(&a_chars, &b_chars);
    &a[..byte_offset(a, len)]
}

/// Keep at most `limit` characters of `value`.
pub fn truncate_chars(value: &str, limit: usize) -> &str {
    &value[..byte_offset(value, limit)]
}

/// Byte offset of the `n`th character, or the string length past the end.
fn byte_offset(value: &str, n: usize) -> usize {
    value
        .char_indices()
        .nth(n)
        .map_or(value.len(), |(offset, _)| offset)
}

/// Round to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

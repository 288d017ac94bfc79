// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Longest common substring (contiguous, not subsequence).
//!
//! Cell `(i, j)` holds the length of the common run ending at `a[i-1]` and
//! `b[j-1]`; a mismatch resets it to zero. Only the previous row is ever read,
//! so two rows are enough.

/// Length of the longest run of characters appearing contiguously in both.
pub fn longest_common_substring(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    longest_common_substring_chars(&a, &b)
}

/// [`longest_common_substring`] over pre-split characters.
pub(crate) fn longest_common_substring_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    let mut best = 0;

    for ac in a {
        for (j, bc) in b.iter().enumerate() {
            curr[j + 1] = if ac == bc { prev[j] + 1 } else { 0 };
            best = best.max(curr[j + 1]);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Jaro-Winkler similarity, the "phonetic" ranking mode.
//!
//! Jaro rewards characters that appear in both strings within a window of each
//! other, penalizes the ones that appear out of order, and Winkler adds a bonus
//! for a shared prefix of up to four characters.
//!
//! This flavour has a few details that matter for reproducing stored rankings:
//!
//! - Matching runs on case-folded text, but the prefix bonus compares the
//!   original strings. "Hello" vs "hello" matches fully and gets no bonus.
//! - Matching is greedy in both directions (shorter → longer and longer →
//!   shorter). If the two passes disagree on the match count the score is 0.
//! - Which string is the shorter one is decided by the original lengths, the
//!   window is then `len(shorter) / 2 + 1` over its folded form and its upper
//!   end is exclusive. Lowercasing can lengthen a string ('İ' folds to two
//!   characters), so the two lengths do not always agree.
//! - Transpositions stay fractional (`3 / 2 = 1.5`) until the final result,
//!   which is rounded to two decimals.

use crate::utils::{common_prefix_len_chars, round2};

/// Winkler scaling factor per shared prefix character.
pub const PREFIX_SCALE: f64 = 0.1;

/// Longest prefix that earns the Winkler bonus.
pub const MAX_PREFIX_LEN: usize = 4;

/// Jaro-Winkler similarity in `[0.0, 1.0]`, rounded to two decimals.
pub fn jaro_winkler(first: &str, second: &str) -> f64 {
    let first = FoldedText::new(first);
    let second = FoldedText::new(second);
    jaro_winkler_folded(&first, &second)
}

/// A string split into characters, alongside its lowercase form.
///
/// The engine prepares every field once at construction so searches do not
/// lowercase the whole pool again per query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FoldedText {
    pub original: Vec<char>,
    pub folded: Vec<char>,
}

impl FoldedText {
    pub fn new(text: &str) -> Self {
        Self {
            original: text.chars().collect(),
            folded: text.to_lowercase().chars().collect(),
        }
    }
}

pub(crate) fn jaro_winkler_folded(first: &FoldedText, second: &FoldedText) -> f64 {
    let Some(jaro) = jaro(first, second) else {
        return 0.0;
    };
    let prefix_len =
        common_prefix_len_chars(&first.original, &second.original).min(MAX_PREFIX_LEN);
    round2(jaro + PREFIX_SCALE * prefix_len as f64 * (1.0 - jaro))
}

/// Unrounded Jaro distance, `None` when the strings share no usable matches.
fn jaro(first: &FoldedText, second: &FoldedText) -> Option<f64> {
    let (shorter, longer) = if first.original.len() > second.original.len() {
        (&second.folded, &first.folded)
    } else {
        (&first.folded, &second.folded)
    };

    let half_len = shorter.len() / 2 + 1;

    let forward = char_matches(shorter, longer, half_len);
    let backward = char_matches(longer, shorter, half_len);

    if forward.is_empty() || backward.is_empty() || forward.len() != backward.len() {
        return None;
    }

    let matches = forward.len() as f64;
    let trans = transpositions(&forward, &backward);

    Some(
        (matches / shorter.len() as f64
            + matches / longer.len() as f64
            + (matches - trans) / matches)
            / 3.0,
    )
}

/// Characters of `source` that find an unused equal character in `target`
/// within `limit` positions, in `source` order.
///
/// A matched target position is consumed and cannot match again.
pub(crate) fn char_matches(source: &[char], target: &[char], limit: usize) -> Vec<char> {
    let mut consumed = vec![false; target.len()];
    let mut common = Vec::with_capacity(source.len().min(target.len()));

    for (i, &c) in source.iter().enumerate() {
        let start = i.saturating_sub(limit);
        let end = (i + limit).min(target.len());
        for j in start..end {
            if !consumed[j] && target[j] == c {
                consumed[j] = true;
                common.push(c);
                break;
            }
        }
    }

    common
}

/// Half the number of positions where two equal-length match strings differ.
pub(crate) fn transpositions(first: &[char], second: &[char]) -> f64 {
    let mismatches = first.iter().zip(second).filter(|(a, b)| a != b).count();
    mismatches as f64 / 2.0
}

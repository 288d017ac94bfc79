// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Similarity metrics: the three ways two strings are compared.
//!
//! Edit distance for typo tolerance, Jaro-Winkler for short fuzzy matches like
//! titles and names, and longest common substring for "how much of the query
//! appears verbatim". All three are total: any pair of strings, including
//! empty ones, produces a defined value. All three count characters, not bytes.

mod jaro;
mod lcs;
mod levenshtein;

pub use jaro::{jaro_winkler, MAX_PREFIX_LEN, PREFIX_SCALE};
pub use lcs::longest_common_substring;
pub use levenshtein::{levenshtein, levenshtein_within};

pub(crate) use jaro::{jaro_winkler_folded, FoldedText};
pub(crate) use lcs::longest_common_substring_chars;
pub(crate) use levenshtein::{levenshtein_bounded_chars, levenshtein_chars};

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how accepted records get sorted.
//!
//! Ascending by combined score, nothing else. Two records with the same score
//! keep the order they had in the pool, which is why ranking must use a stable
//! sort: the score alone cannot say which of two equally good pages comes
//! first, the pool order can.

use crate::types::SearchHit;
use std::cmp::Ordering;

/// Compare two hits for ranking. Lower score first.
///
/// `-0.0` and `0.0` compare equal, so records with zero similarity stay in
/// pool order.
pub fn compare_hits(a: &SearchHit, b: &SearchHit) -> Ordering {
    a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal)
}

/// Sort hits into ranked order, ties kept in their current order.
pub fn rank(hits: &mut [SearchHit]) {
    hits.sort_by(compare_hits);
}

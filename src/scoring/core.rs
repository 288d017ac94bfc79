// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind a record's score.
//!
//! Each field of a record is compared to the query independently, then the
//! record keeps the best value per metric: the lowest edit distance, the
//! highest Jaro-Winkler similarity, the longest common substring. Those best
//! values fold into one signed number where lower is better:
//!
//! ```text
//! EditDistance:  score = bestDistance
//! Phonetic:      score = -|bestSimilarity|
//! + overlap:     score = score - bestOverlap
//! ```
//!
//! A perfect phonetic match scores -1.0 and lands ahead of weak matches near 0.
//! A long verbatim overlap pushes either mode further negative.

use crate::config::{EngineConfig, SimilarityMode};

/// Per-call bounds on which records are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Reject records whose best overlap is below this. Overlap mode only.
    pub min_overlap: Option<usize>,
    /// Reject records whose best distance is above this. EditDistance mode only.
    pub max_distance: Option<usize>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_overlap(mut self, min_overlap: usize) -> Self {
        self.min_overlap = Some(min_overlap);
        self
    }

    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = Some(max_distance);
        self
    }

    /// Drop the bounds that mean nothing under `config`.
    ///
    /// `min_overlap` survives only with overlap enabled, `max_distance` only in
    /// edit-distance mode. Whatever the caller passed otherwise is ignored.
    pub fn effective(self, config: &EngineConfig) -> Self {
        Self {
            min_overlap: self.min_overlap.filter(|_| config.use_overlap),
            max_distance: self
                .max_distance
                .filter(|_| config.mode == SimilarityMode::EditDistance),
        }
    }
}

/// Best per-metric values across a record's fields.
///
/// Only the metrics the config asks for are filled in.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FieldScores {
    pub best_distance: Option<usize>,
    pub best_similarity: Option<f64>,
    pub best_overlap: Option<usize>,
}

impl FieldScores {
    pub fn observe_distance(&mut self, distance: usize) {
        self.best_distance = Some(self.best_distance.map_or(distance, |d| d.min(distance)));
    }

    pub fn observe_similarity(&mut self, similarity: f64) {
        self.best_similarity = Some(
            self.best_similarity
                .map_or(similarity, |s| s.max(similarity)),
        );
    }

    pub fn observe_overlap(&mut self, overlap: usize) {
        self.best_overlap = Some(self.best_overlap.map_or(overlap, |o| o.max(overlap)));
    }

    /// The single lower-is-better number used for ranking.
    pub fn combined_score(&self, config: &EngineConfig) -> f64 {
        let mut score = match config.mode {
            SimilarityMode::EditDistance => self.best_distance.unwrap_or(0) as f64,
            SimilarityMode::Phonetic => -self.best_similarity.unwrap_or(0.0).abs(),
        };
        if config.use_overlap {
            score -= self.best_overlap.unwrap_or(0) as f64;
        }
        score
    }

    /// Both bounds hold. An unset bound holds vacuously.
    ///
    /// `params` must already be [`SearchParams::effective`].
    pub fn accepted_by(&self, params: &SearchParams) -> bool {
        let within_distance = params
            .max_distance
            .map_or(true, |max| self.best_distance.is_some_and(|d| d <= max));
        let enough_overlap = params
            .min_overlap
            .map_or(true, |min| self.best_overlap.unwrap_or(0) >= min);
        within_distance && enough_overlap
    }
}

/// Full breakdown of one record against one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub scores: FieldScores,
    pub score: f64,
    pub accepted: bool,
}

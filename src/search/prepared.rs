// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Records split into characters once, at engine construction.
//!
//! Every metric works on `&[char]`, and Jaro-Winkler also needs the lowercase
//! form. Doing that per query would re-split the whole pool on every search.

use crate::config::{EngineConfig, SimilarityMode};
use crate::fuzzy::{
    jaro_winkler_folded, levenshtein_bounded_chars, levenshtein_chars,
    longest_common_substring_chars, FoldedText,
};
use crate::scoring::{FieldScores, SearchParams};
use crate::types::{Record, RecordKey, SearchHit};

/// The field values of one record, ready for comparison.
#[derive(Debug, Clone)]
pub(crate) struct PreparedFields {
    fields: Vec<FoldedText>,
}

impl PreparedFields {
    /// A record without fields is compared as if it had one empty field, so
    /// every record gets a defined distance, similarity and overlap.
    pub fn new(record: &Record) -> Self {
        let mut fields: Vec<FoldedText> = record.values().map(FoldedText::new).collect();
        if fields.is_empty() {
            fields.push(FoldedText::default());
        }
        Self { fields }
    }

    /// Best per-metric values against `query`.
    ///
    /// With `distance_bound` set, fields further than the bound are not
    /// measured exactly and do not contribute a distance.
    pub fn scores(
        &self,
        query: &FoldedText,
        config: &EngineConfig,
        distance_bound: Option<usize>,
    ) -> FieldScores {
        let mut scores = FieldScores::default();

        for field in &self.fields {
            match config.mode {
                SimilarityMode::EditDistance => match distance_bound {
                    Some(max) => {
                        if let Some(d) =
                            levenshtein_bounded_chars(&field.original, &query.original, max)
                        {
                            scores.observe_distance(d);
                        }
                    }
                    None => {
                        scores.observe_distance(levenshtein_chars(&field.original, &query.original))
                    }
                },
                SimilarityMode::Phonetic => {
                    scores.observe_similarity(jaro_winkler_folded(field, query));
                }
            }

            if config.use_overlap {
                scores.observe_overlap(longest_common_substring_chars(
                    &field.original,
                    &query.original,
                ));
            }
        }

        scores
    }
}

/// A pool entry: its key plus prepared fields.
#[derive(Debug, Clone)]
pub(crate) struct PreparedRecord {
    pub key: RecordKey,
    pub fields: PreparedFields,
}

impl PreparedRecord {
    pub fn new(key: RecordKey, record: &Record) -> Self {
        Self {
            key,
            fields: PreparedFields::new(record),
        }
    }

    /// A hit if the record passes the (effective) bounds.
    pub fn hit(
        &self,
        query: &FoldedText,
        config: &EngineConfig,
        params: &SearchParams,
    ) -> Option<SearchHit> {
        let scores = self.fields.scores(query, config, params.max_distance);
        scores.accepted_by(params).then(|| SearchHit {
            key: self.key.clone(),
            score: scores.combined_score(config),
        })
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The similarity engine: a linear scan over an immutable record pool.
//!
//! No index, no tokenizer. Every field of every record is compared to the
//! query directly, which is the right trade for a single site's pages: a few
//! hundred records, rebuilt whenever content changes.
//!
//! The engine owns its pool (the constructor takes it by value) and never
//! mutates it, so `search` takes `&self` and any number of threads can search
//! one engine concurrently. Each call allocates its own DP rows and match
//! buffers.
//!
//! With the `parallel` feature, pools at or above
//! [`EngineConfig::parallel_threshold`] are scanned on the rayon pool. Hits are
//! collected in pool order before the stable sort, so the output is the same
//! either way.

mod prepared;

use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::config::{EngineConfig, SimilarityMode};
use crate::error::{Error, Result};
use crate::fuzzy::FoldedText;
use crate::scoring::{ranking, Assessment, SearchParams};
use crate::types::{Record, RecordKey, RecordPool, ResultSet, SearchHit};

use prepared::{PreparedFields, PreparedRecord};

/// Ranks a fixed record pool against queries.
#[derive(Debug, Clone)]
pub struct SimilarityEngine {
    records: Vec<PreparedRecord>,
    config: EngineConfig,
}

impl SimilarityEngine {
    /// Build an engine that owns `pool`. `max_results` is clamped to ≥ 1.
    pub fn new(pool: RecordPool, config: EngineConfig) -> Self {
        let config = config.normalized();
        let records: Vec<PreparedRecord> = pool
            .into_iter()
            .map(|(key, record)| PreparedRecord::new(key, &record))
            .collect();

        debug!(
            records = records.len(),
            mode = %config.mode,
            use_overlap = config.use_overlap,
            "similarity engine ready"
        );

        Self { records, config }
    }

    /// Build from raw stored settings, where the mode is a numeric code.
    ///
    /// Fails with [`Error::Configuration`] when `mode` is not 0 or 1; no
    /// engine is produced. `max_results` below 1 is raised to 1.
    pub fn from_settings(
        pool: RecordPool,
        max_results: i64,
        mode: i64,
        use_overlap: bool,
    ) -> Result<Self> {
        let mode = SimilarityMode::try_from(mode)?;
        let max_results = usize::try_from(max_results.max(1)).unwrap_or(usize::MAX);
        Ok(Self::new(pool, EngineConfig::new(max_results, mode, use_overlap)))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Keys in pool order.
    pub fn keys(&self) -> impl Iterator<Item = &RecordKey> {
        self.records.iter().map(|r| &r.key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Score every record against `query` and return the accepted ones, best first.
    ///
    /// Bounds in `params` that do not apply to the configured mode are ignored.
    /// `max_results` is not applied; use [`ResultSet::truncated`].
    pub fn search(&self, query: &str, params: SearchParams) -> ResultSet {
        // Nobody else holds this flag, so the scan below runs to completion.
        let never = AtomicBool::new(false);
        self.search_cancellable(query, params, &never)
            .unwrap_or_default()
    }

    /// [`search`](Self::search) that stops with [`Error::Cancelled`] once
    /// `cancel` is raised. The flag is checked before each record.
    pub fn search_cancellable(
        &self,
        query: &str,
        params: SearchParams,
        cancel: &AtomicBool,
    ) -> Result<ResultSet> {
        let params = params.effective(&self.config);
        let query = FoldedText::new(query);

        let mut hits = self.scan(&query, &params, cancel)?;
        ranking::rank(&mut hits);

        debug!(
            query_chars = query.original.len(),
            records = self.records.len(),
            accepted = hits.len(),
            "search complete"
        );

        Ok(ResultSet::from_ranked(hits))
    }

    /// Full score breakdown of an arbitrary record, accepted or not.
    ///
    /// Distances are always exact here, even when `params` carries a bound.
    pub fn assess(&self, query: &str, record: &Record, params: SearchParams) -> Assessment {
        let params = params.effective(&self.config);
        let query = FoldedText::new(query);
        let scores = PreparedFields::new(record).scores(&query, &self.config, None);
        Assessment {
            scores,
            score: scores.combined_score(&self.config),
            accepted: scores.accepted_by(&params),
        }
    }

    fn visit(
        &self,
        record: &PreparedRecord,
        query: &FoldedText,
        params: &SearchParams,
        cancel: &AtomicBool,
    ) -> Option<Result<SearchHit>> {
        if cancel.load(Ordering::Relaxed) {
            return Some(Err(Error::Cancelled));
        }
        record.hit(query, &self.config, params).map(Ok)
    }

    fn scan_sequential(
        &self,
        query: &FoldedText,
        params: &SearchParams,
        cancel: &AtomicBool,
    ) -> Result<Vec<SearchHit>> {
        self.records
            .iter()
            .filter_map(|record| self.visit(record, query, params, cancel))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn scan(
        &self,
        query: &FoldedText,
        params: &SearchParams,
        cancel: &AtomicBool,
    ) -> Result<Vec<SearchHit>> {
        if self.records.len() >= self.config.parallel_threshold {
            self.records
                .par_iter()
                .filter_map(|record| self.visit(record, query, params, cancel))
                .collect()
        } else {
            self.scan_sequential(query, params, cancel)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn scan(
        &self,
        query: &FoldedText,
        params: &SearchParams,
        cancel: &AtomicBool,
    ) -> Result<Vec<SearchHit>> {
        self.scan_sequential(query, params, cancel)
    }
}

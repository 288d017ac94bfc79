// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Site search: one request in, one page of keys out.
//!
//! The adapter between a site's `/search/<query>` route and the engine. It
//! trims the URL segment, refuses queries shorter than `minChars`, ranks the
//! cached pages, and slices out the requested results page. Nothing is kept
//! between requests; a [`SearchOutcome`] carries everything the paginator and
//! the page renderer need.

use serde::Serialize;
use tracing::debug;

use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::scoring::SearchParams;
use crate::search::SimilarityEngine;
use crate::types::{Record, RecordKey, RecordPool};

/// A search as it arrives from the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Raw query, possibly still wrapped in `/` from the URL.
    pub query: String,
    /// 1-based results page.
    pub page_number: usize,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, page_number: usize) -> Self {
        Self {
            query: query.into(),
            page_number,
        }
    }

    /// The query with surrounding slashes and whitespace removed.
    pub fn search_text(&self) -> &str {
        self.query
            .trim_matches(|c: char| c == '/' || c.is_whitespace())
    }
}

/// Result of one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    /// Matches across all pages.
    pub total_items: usize,
    pub page_number: usize,
    /// Keys on the requested page, best first.
    pub keys: Vec<RecordKey>,
}

/// Looks up the page behind a result key.
pub trait PageResolver {
    type Page;

    fn resolve(&self, key: &RecordKey) -> Result<Self::Page>;
}

impl PageResolver for RecordPool {
    type Page = Record;

    fn resolve(&self, key: &RecordKey) -> Result<Record> {
        self.get(key)
            .cloned()
            .ok_or_else(|| Error::MissingRecord(key.clone()))
    }
}

/// Engine plus site settings.
#[derive(Debug, Clone)]
pub struct SiteSearch {
    engine: SimilarityEngine,
    config: SiteConfig,
}

impl SiteSearch {
    /// Build the engine from `config.engine` over the cached pool.
    pub fn new(pool: RecordPool, config: SiteConfig) -> Self {
        let engine = SimilarityEngine::new(pool, config.engine.clone());
        Self { engine, config }
    }

    pub fn engine(&self) -> &SimilarityEngine {
        &self.engine
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Rank the pool for `request` and cut out its page.
    ///
    /// `minChars` doubles as the overlap bound handed to the engine, so with
    /// overlap enabled a page must share at least that many consecutive
    /// characters with the query.
    pub fn search(&self, request: &SearchRequest) -> SearchOutcome {
        let text = request.search_text();
        let min_chars = self.config.min_chars;

        if text.chars().count() < min_chars {
            debug!(query = text, min_chars, "query below minimum length");
            return SearchOutcome {
                total_items: 0,
                page_number: request.page_number,
                keys: Vec::new(),
            };
        }

        let params = SearchParams::new().with_min_overlap(min_chars);
        let keys = self.engine.search(text, params).keys();
        let page = paginate(&keys, self.config.items_per_page, request.page_number);

        debug!(
            query = text,
            total = keys.len(),
            page = request.page_number,
            on_page = page.len(),
            "site search"
        );

        SearchOutcome {
            total_items: keys.len(),
            page_number: request.page_number,
            keys: page.to_vec(),
        }
    }
}

/// Page `page_number` (1-based) of `items` split into `items_per_page` chunks.
///
/// With `items_per_page ≤ 0` everything is on page 1. Page 0 and pages past
/// the end are empty.
pub fn paginate<T>(items: &[T], items_per_page: i64, page_number: usize) -> &[T] {
    let Some(index) = page_number.checked_sub(1) else {
        return &[];
    };
    if items_per_page <= 0 {
        return if index == 0 { items } else { &[] };
    }
    let per_page = usize::try_from(items_per_page).unwrap_or(usize::MAX);
    items.chunks(per_page).nth(index).unwrap_or(&[])
}

/// Look up every key of `outcome`, in order. Keys that no longer resolve are
/// skipped.
pub fn resolve<R: PageResolver>(outcome: &SearchOutcome, resolver: &R) -> Vec<R::Page> {
    outcome
        .keys
        .iter()
        .filter_map(|key| match resolver.resolve(key) {
            Ok(page) => Some(page),
            Err(err) => {
                debug!(%key, error = %err, "skipping unresolvable result");
                None
            }
        })
        .collect()
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy similarity search over a small, fixed pool of site pages.
//!
//! Given a query and a pool of keyed records (each a few text fields), rank
//! the records by how closely any of their fields resembles the query. No
//! index, no tokenizer: every field is compared to the whole query with edit
//! distance or Jaro-Winkler similarity, optionally boosted by the longest
//! run of characters the two share.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   build/     │────▶│   types.rs   │────▶│   search/    │
//! │ (pages.json  │     │ (RecordPool, │     │ (Similarity- │
//! │  → cache)    │     │  Record)     │     │  Engine)     │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                                                  │
//!                      ┌──────────────┐     ┌──────▼───────┐
//!                      │   fuzzy/     │◀────│  scoring/    │
//!                      │ (levenshtein,│     │ (best-of-    │
//!                      │  lcs, jaro)  │     │  fields)     │
//!                      └──────────────┘     └──────────────┘
//!                                                  │
//!                                           ┌──────▼───────┐
//!                                           │   site/      │
//!                                           │ (paging,     │
//!                                           │  resolving)  │
//!                                           └──────────────┘
//! ```
//!
//! # Scores
//!
//! Lower is better. Edit-distance mode scores the smallest distance across a
//! record's fields; phonetic mode scores the negated highest similarity, so a
//! perfect match is `-1.0`. With overlap on, the longest common substring is
//! subtracted from either. Ties keep pool order.
//!
//! # Usage
//!
//! ```
//! use pagesift::{
//!     EngineConfig, Record, RecordPool, SearchParams, SimilarityEngine, SimilarityMode,
//! };
//!
//! let mut pool = RecordPool::new();
//! pool.insert(1, Record::new().with_field("title", "Hello World"));
//! pool.insert(2, Record::new().with_field("title", "Goodbye Moon"));
//!
//! let config = EngineConfig::new(10, SimilarityMode::EditDistance, false);
//! let engine = SimilarityEngine::new(pool, config);
//! let results = engine.search("hello", SearchParams::new());
//! assert_eq!(results.keys()[0].to_string(), "1");
//! ```

pub mod build;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod logging;
pub mod scoring;
pub mod search;
pub mod site;
pub mod testing;
mod types;
mod utils;

pub use build::{
    build_cache, inspect_cache, load_cache, load_pages, write_cache, CacheStats, CacheSummary,
    PageSource, PageStatus,
};
pub use config::{EngineConfig, SimilarityMode, SiteConfig, SiteConfigOverrides};
pub use error::{Error, Result};
pub use fuzzy::{jaro_winkler, levenshtein, levenshtein_within, longest_common_substring};
pub use scoring::{Assessment, FieldScores, SearchParams};
pub use search::SimilarityEngine;
pub use site::{paginate, PageResolver, SearchOutcome, SearchRequest, SiteSearch};
pub use types::{
    Record, RecordKey, RecordPool, ResultSet, SearchHit, CONTENT_FIELD, DESCRIPTION_FIELD,
    TITLE_FIELD,
};
pub use utils::{common_prefix, diff_index};

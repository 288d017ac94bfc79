//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use pagesift::{
    EngineConfig, PageSource, RecordPool, ResultSet, SimilarityEngine, SimilarityMode,
};

// Re-export canonical test utilities from pagesift::testing
pub use pagesift::testing::{generated_pool, make_page, make_pool, make_record, sample_blog};

/// Engine over `pool` in the given mode, parallel scan off.
pub fn engine(pool: RecordPool, mode: SimilarityMode, use_overlap: bool) -> SimilarityEngine {
    let config = EngineConfig {
        parallel_threshold: usize::MAX,
        ..EngineConfig::new(10, mode, use_overlap)
    };
    SimilarityEngine::new(pool, config)
}

pub fn edit_engine(pool: RecordPool) -> SimilarityEngine {
    engine(pool, SimilarityMode::EditDistance, false)
}

pub fn phonetic_engine(pool: RecordPool) -> SimilarityEngine {
    engine(pool, SimilarityMode::Phonetic, false)
}

/// Result keys as strings, in rank order.
pub fn keys(results: &ResultSet) -> Vec<String> {
    results.iter().map(|hit| hit.key.to_string()).collect()
}

/// Result scores in rank order.
pub fn scores(results: &ResultSet) -> Vec<f64> {
    results.iter().map(|hit| hit.score).collect()
}

/// Write `pages` as `pages.json` into `dir`.
pub fn write_pages(dir: &Path, pages: &[PageSource]) {
    let json = serde_json::to_string_pretty(pages).expect("pages serialize");
    fs::write(dir.join("pages.json"), json).expect("write pages.json");
}

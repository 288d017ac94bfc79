// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cache building: site pages in, `cache.json` out.
//!
//! ```text
//! pages.json ──► filter searchable ──► strip HTML ──► truncate ──► RecordPool
//!                                                                      │
//!                                   cache.json ◄── atomic rename ◄── JSON
//! ```
//!
//! The cache is what the engine searches. It is rebuilt whenever content
//! changes and never edited in place: a new file is written next to the old
//! one and renamed over it, so a reader sees either the old cache or the new
//! one, never half of each.

pub mod document;
pub mod parallel;
pub mod stats;

use std::fs;
use std::io::Write;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::types::{Record, RecordKey, RecordPool};

pub use document::*;
pub use parallel::*;
pub use stats::*;

/// Input file name inside the pages directory.
pub const PAGES_FILE: &str = "pages.json";

/// Conventional cache file name.
pub const CACHE_FILE: &str = "cache.json";

/// What a cache write produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheSummary {
    pub records: usize,
    pub bytes: usize,
    /// CRC32 of the serialized cache.
    pub checksum: u32,
    /// The file on disk already held these exact bytes; nothing was written.
    pub unchanged: bool,
}

/// CRC32 of cache bytes, as reported in [`CacheSummary::checksum`].
pub fn checksum(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}

/// Read `pages.json` from `input_dir`.
pub fn load_pages(input_dir: &Path) -> Result<Vec<PageSource>> {
    let path = input_dir.join(PAGES_FILE);
    let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    let pages: Vec<PageSource> =
        serde_json::from_str(&content).map_err(|e| Error::json(&path, e))?;
    debug!(pages = pages.len(), path = %path.display(), "loaded pages");
    Ok(pages)
}

/// Turn pages into the record pool that gets cached.
///
/// Only published, static and sticky pages are kept, in input order. Content
/// is cut to [`SiteConfig::content_char_budget`] characters.
pub fn build_cache(pages: &[PageSource], config: &SiteConfig) -> RecordPool {
    let prepared = prepare_pages(pages, config.content_char_budget());
    collect_pool(prepared, pages.len())
}

fn collect_pool(prepared: Vec<(RecordKey, Record)>, total_pages: usize) -> RecordPool {
    let mut pool = RecordPool::new();
    for (key, record) in prepared {
        // Keys must survive the JSON object the cache is written as.
        let key = key.canonical();
        if pool.contains_key(&key) {
            warn!(%key, "duplicate page key, later page replaces earlier one");
        }
        pool.insert(key, record);
    }
    debug!(
        records = pool.len(),
        skipped = total_pages.saturating_sub(pool.len()),
        "built cache records"
    );
    pool
}

/// Serialize `pool` and atomically replace `path` with it.
///
/// When `path` already holds identical bytes nothing is written. On failure
/// the previous file is left as it was.
pub fn write_cache(pool: &RecordPool, path: &Path) -> Result<CacheSummary> {
    let bytes = serde_json::to_vec(pool).map_err(|e| Error::json(path, e))?;
    let mut summary = CacheSummary {
        records: pool.len(),
        bytes: bytes.len(),
        checksum: checksum(&bytes),
        unchanged: false,
    };

    if fs::read(path).is_ok_and(|existing| existing == bytes) {
        summary.unchanged = true;
        info!(path = %path.display(), checksum = summary.checksum, "cache unchanged");
        return Ok(summary);
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    tmp.write_all(&bytes).map_err(|e| Error::io(path, e))?;
    tmp.as_file().sync_all().map_err(|e| Error::io(path, e))?;
    tmp.persist(path).map_err(|e| Error::io(path, e.error))?;

    info!(
        path = %path.display(),
        records = summary.records,
        bytes = summary.bytes,
        checksum = summary.checksum,
        "cache written"
    );
    Ok(summary)
}

/// Read a cache file back into a pool, keeping its record order.
pub fn load_cache(path: &Path) -> Result<RecordPool> {
    let content = fs::read(path).map_err(|e| Error::io(path, e))?;
    let pool: RecordPool = serde_json::from_slice(&content).map_err(|e| Error::json(path, e))?;
    debug!(records = pool.len(), path = %path.display(), "loaded cache");
    Ok(pool)
}

#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .map(|style| style.progress_chars("━━╸"))
    .unwrap_or_else(|_| ProgressStyle::default_bar())
}

/// Load pages from `input_dir`, build the cache, and write it to `output`.
///
/// With the `parallel` feature a progress bar is drawn on stderr while pages
/// are processed (hidden when stderr is not a terminal).
pub fn run_cache(input_dir: &Path, output: &Path, config: &SiteConfig) -> Result<CacheSummary> {
    let pages = load_pages(input_dir)?;

    #[cfg(feature = "parallel")]
    let pool = {
        let progress = ProgressBar::new(pages.len() as u64);
        progress.set_style(create_progress_style());
        progress.set_prefix("Processing");
        progress.set_message("pages...");
        let prepared =
            prepare_pages_with_progress(&pages, config.content_char_budget(), &progress);
        progress.finish_and_clear();
        collect_pool(prepared, pages.len())
    };

    #[cfg(not(feature = "parallel"))]
    let pool = build_cache(&pages, config);

    if pool.is_empty() {
        warn!(pages = pages.len(), "no searchable pages; writing an empty cache");
    }

    write_cache(&pool, output)
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Page preparation, on the rayon pool when the `parallel` feature is on.
//!
//! Stripping markup from a few hundred page bodies is embarrassingly parallel.
//! `par_iter().filter().map().collect()` keeps input order, so the cache comes
//! out identical either way and record order stays the tie-break order.

#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::types::{Record, RecordKey};

use super::PageSource;

/// Searchable pages turned into cache records, in input order.
#[cfg(feature = "parallel")]
pub fn prepare_pages(pages: &[PageSource], char_budget: usize) -> Vec<(RecordKey, Record)> {
    pages
        .par_iter()
        .filter(|page| page.status.is_searchable())
        .map(|page| (page.key.clone(), page.to_record(char_budget)))
        .collect()
}

/// Searchable pages turned into cache records, in input order.
#[cfg(not(feature = "parallel"))]
pub fn prepare_pages(pages: &[PageSource], char_budget: usize) -> Vec<(RecordKey, Record)> {
    pages
        .iter()
        .filter(|page| page.status.is_searchable())
        .map(|page| (page.key.clone(), page.to_record(char_budget)))
        .collect()
}

/// [`prepare_pages`] that advances `progress` once per input page.
#[cfg(feature = "parallel")]
pub fn prepare_pages_with_progress(
    pages: &[PageSource],
    char_budget: usize,
    progress: &ProgressBar,
) -> Vec<(RecordKey, Record)> {
    let counter = AtomicUsize::new(0);
    let total = pages.len();

    pages
        .par_iter()
        .filter_map(|page| {
            let record = page
                .status
                .is_searchable()
                .then(|| (page.key.clone(), page.to_record(char_budget)));

            progress.inc(1);
            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            if count % 50 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            record
        })
        .collect()
}

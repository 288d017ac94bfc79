// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What is inside a cache file, for `pagesift inspect`.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::types::RecordPool;

use super::checksum;

/// Per-field totals across all records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldStats {
    pub name: String,
    /// Records carrying this field.
    pub present: usize,
    /// Mean length in characters over the records that carry it.
    pub avg_chars: f64,
    pub max_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub records: usize,
    pub bytes: usize,
    pub checksum: u32,
    /// Fields in order of first appearance.
    pub fields: Vec<FieldStats>,
}

impl CacheStats {
    pub fn from_pool(pool: &RecordPool, bytes: &[u8]) -> Self {
        let mut totals: Vec<(String, usize, usize, usize)> = Vec::new();

        for (_, record) in pool.iter() {
            for (name, value) in record.fields() {
                let chars = value.chars().count();
                match totals.iter_mut().find(|(n, ..)| n == name) {
                    Some((_, present, sum, max)) => {
                        *present += 1;
                        *sum += chars;
                        *max = (*max).max(chars);
                    }
                    None => totals.push((name.to_string(), 1, chars, chars)),
                }
            }
        }

        let fields = totals
            .into_iter()
            .map(|(name, present, sum, max_chars)| FieldStats {
                name,
                present,
                avg_chars: sum as f64 / present as f64,
                max_chars,
            })
            .collect();

        Self {
            records: pool.len(),
            bytes: bytes.len(),
            checksum: checksum(bytes),
            fields,
        }
    }
}

/// Read and summarize the cache at `path`.
pub fn inspect_cache(path: &Path) -> Result<CacheStats> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let pool: RecordPool = serde_json::from_slice(&bytes).map_err(|e| Error::json(path, e))?;
    Ok(CacheStats::from_pool(&pool, &bytes))
}

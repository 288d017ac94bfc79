// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ranking arbitrary queries against arbitrary pools.
//!
//! Search must never panic, must return results sorted by score, and must
//! honor the acceptance bounds it was given.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pagesift::{EngineConfig, Record, RecordPool, SearchParams, SimilarityEngine, SimilarityMode};

#[derive(Debug, Arbitrary)]
struct SearchInput {
    records: Vec<Vec<String>>,
    query: String,
    phonetic: bool,
    use_overlap: bool,
    min_overlap: Option<u8>,
    max_distance: Option<u8>,
}

fuzz_target!(|input: SearchInput| {
    let pool: RecordPool = input
        .records
        .iter()
        .take(32)
        .enumerate()
        .map(|(i, fields)| {
            let record = fields.iter().take(4).enumerate().fold(Record::new(), |r, (f, text)| {
                let text: String = text.chars().take(48).collect();
                r.with_field(&format!("f{}", f), &text)
            });
            (i as i64, record)
        })
        .collect();
    let pool_len = pool.len();

    let mode = if input.phonetic {
        SimilarityMode::Phonetic
    } else {
        SimilarityMode::EditDistance
    };
    let engine = SimilarityEngine::new(pool, EngineConfig::new(10, mode, input.use_overlap));

    let query: String = input.query.chars().take(48).collect();
    let params = SearchParams {
        min_overlap: input.min_overlap.map(usize::from),
        max_distance: input.max_distance.map(usize::from),
    };
    let results = engine.search(&query, params);

    assert!(results.len() <= pool_len);
    for pair in results.hits().windows(2) {
        assert!(pair[0].score <= pair[1].score, "results out of order");
    }

    // Every hit must pass the bounds on re-assessment
    for hit in results.iter() {
        let Some(record) = engine_record(&input.records, &hit.key.to_string()) else {
            continue;
        };
        let assessment = engine.assess(&query, &record, params);
        assert!(assessment.accepted, "hit {} fails its own bounds", hit.key);
        assert_eq!(assessment.score, hit.score);
    }
});

fn engine_record(records: &[Vec<String>], key: &str) -> Option<Record> {
    let index: usize = key.parse().ok()?;
    let fields = records.get(index)?;
    Some(fields.iter().take(4).enumerate().fold(Record::new(), |r, (f, text)| {
        let text: String = text.chars().take(48).collect();
        r.with_field(&format!("f{}", f), &text)
    }))
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the three string metrics.
//!
//! Every metric must return for any pair of strings, stay inside its range,
//! and agree with the others where their definitions overlap.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pagesift::{jaro_winkler, levenshtein, levenshtein_within, longest_common_substring};

#[derive(Debug, Arbitrary)]
struct MetricInput {
    first: String,
    second: String,
    bound: u8,
}

fuzz_target!(|input: MetricInput| {
    // Cap lengths to avoid timeouts in the quadratic metrics
    let first: String = input.first.chars().take(64).collect();
    let second: String = input.second.chars().take(64).collect();
    let (la, lb) = (first.chars().count(), second.chars().count());

    let distance = levenshtein(&first, &second);
    assert_eq!(distance, levenshtein(&second, &first), "distance not symmetric");
    assert!(distance >= la.abs_diff(lb), "distance below length difference");
    assert!(distance <= la.max(lb), "distance above longer length");

    let bound = usize::from(input.bound % 70);
    assert_eq!(
        levenshtein_within(&first, &second, bound),
        distance <= bound,
        "bounded check disagrees: distance={} bound={}",
        distance,
        bound
    );

    let overlap = longest_common_substring(&first, &second);
    assert!(overlap <= la.min(lb), "overlap longer than shorter string");
    if first == second {
        assert_eq!(distance, 0);
        assert_eq!(overlap, la);
    }

    let similarity = jaro_winkler(&first, &second);
    assert!(
        (0.0..=1.0).contains(&similarity),
        "similarity {} out of range for {:?} / {:?}",
        similarity,
        first,
        second
    );
    assert_eq!(similarity, (similarity * 100.0).round() / 100.0, "not rounded");
});

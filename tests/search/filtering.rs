//! Acceptance bounds: which records make it into the result set.

use crate::common::{edit_engine, engine, keys, make_pool, phonetic_engine};
use pagesift::{SearchParams, SimilarityMode};

fn overlap_pool() -> pagesift::RecordPool {
    make_pool(&[
        (1, "the rust book"),
        (2, "rusty nails"),
        (3, "trust issues"),
        (4, "gardening"),
    ])
}

#[test]
fn test_max_distance_keeps_close_records() {
    let engine = edit_engine(make_pool(&[
        (1, "color"),
        (2, "colour"),
        (3, "colours"),
        (4, "dolor"),
    ]));
    let results = engine.search("color", SearchParams::new().with_max_distance(1));
    assert_eq!(keys(&results), vec!["1", "2", "4"]);
}

#[test]
fn test_max_distance_is_inclusive() {
    let engine = edit_engine(make_pool(&[(1, "kitten")]));
    assert_eq!(engine.search("sitting", SearchParams::new().with_max_distance(3)).len(), 1);
    assert!(engine.search("sitting", SearchParams::new().with_max_distance(2)).is_empty());
}

#[test]
fn test_max_distance_ignored_in_phonetic_mode() {
    let engine = phonetic_engine(make_pool(&[(1, "color"), (2, "unrelated text")]));
    let results = engine.search("color", SearchParams::new().with_max_distance(0));
    assert_eq!(results.len(), 2);
}

#[test]
fn test_min_overlap_with_overlap_enabled() {
    let engine = engine(overlap_pool(), SimilarityMode::EditDistance, true);
    let results = engine.search("rust", SearchParams::new().with_min_overlap(4));
    // Scores: "rusty nails" 7 - 4, "trust issues" 8 - 4, "the rust book" 9 - 4
    assert_eq!(keys(&results), vec!["2", "3", "1"]);

    let results = engine.search("rust book", SearchParams::new().with_min_overlap(6));
    assert_eq!(keys(&results), vec!["1"]);
}

#[test]
fn test_min_overlap_ignored_without_overlap() {
    let engine = edit_engine(overlap_pool());
    let results = engine.search("rust", SearchParams::new().with_min_overlap(100));
    assert_eq!(results.len(), 4);
}

#[test]
fn test_min_overlap_zero_accepts_all() {
    let engine = engine(overlap_pool(), SimilarityMode::Phonetic, true);
    assert_eq!(engine.search("zzz", SearchParams::new().with_min_overlap(0)).len(), 4);
}

#[test]
fn test_both_bounds_must_hold() {
    let engine = engine(
        make_pool(&[(1, "rust"), (2, "rusty rust"), (3, "bust")]),
        SimilarityMode::EditDistance,
        true,
    );
    let params = SearchParams::new().with_max_distance(1).with_min_overlap(4);
    // 1: distance 0, overlap 4. 2: distance 6. 3: overlap 3.
    let results = engine.search("rust", params);
    assert_eq!(keys(&results), vec!["1"]);
}

#[test]
fn test_bound_uses_best_field() {
    let mut pool = pagesift::RecordPool::new();
    pool.insert(
        "page",
        pagesift::Record::page("Far away title", "colour", "long content"),
    );
    let engine = edit_engine(pool);
    let results = engine.search("color", SearchParams::new().with_max_distance(1));
    assert_eq!(keys(&results), vec!["page"]);
    assert_eq!(results.hits()[0].score, 1.0);
}

#[test]
fn test_limit_is_left_to_the_caller() {
    let engine = edit_engine(make_pool(&[(1, "a"), (2, "b"), (3, "c"), (4, "d")]));
    let results = engine.search("a", SearchParams::new());
    assert_eq!(results.len(), 4);
    assert_eq!(keys(&results.clone().truncated(2)), vec!["1", "2"]);
    assert_eq!(results.truncated(10).len(), 4);
}

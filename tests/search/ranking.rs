//! Ordering of accepted records.

use crate::common::{edit_engine, engine, keys, make_pool, phonetic_engine, scores};
use pagesift::{Record, RecordPool, SearchParams, SimilarityMode};

#[test]
fn test_scores_ascend() {
    let engine = edit_engine(make_pool(&[
        (1, "completely different"),
        (2, "rust"),
        (3, "trust"),
        (4, "rusty nail"),
    ]));
    let results = engine.search("rust", SearchParams::new());
    assert_eq!(keys(&results), vec!["2", "3", "4", "1"]);

    let scores = scores(&results);
    assert!(scores.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_ties_keep_pool_order() {
    // All three are one substitution away
    let engine = edit_engine(make_pool(&[("z", "cat"), ("a", "bat"), ("m", "hat")]));
    let results = engine.search("rat", SearchParams::new());
    assert_eq!(keys(&results), vec!["z", "a", "m"]);
}

#[test]
fn test_zero_similarity_records_keep_pool_order() {
    // Nothing in common: every score is -0.0 and must tie with each other
    let engine = phonetic_engine(make_pool(&[(3, "xyz"), (1, "qqq"), (2, "www")]));
    let results = engine.search("abc", SearchParams::new());
    assert_eq!(keys(&results), vec!["3", "1", "2"]);
    assert!(scores(&results).iter().all(|s| *s == 0.0));
}

#[test]
fn test_phonetic_higher_similarity_first() {
    let engine = phonetic_engine(make_pool(&[
        ("weak", "DIXON"),
        ("strong", "MARHTA"),
        ("exact", "MARTHA"),
    ]));
    let results = engine.search("MARTHA", SearchParams::new());
    assert_eq!(keys(&results)[..2], ["exact", "strong"]);
    assert_eq!(scores(&results)[..2], [-1.0, -0.96]);
}

#[test]
fn test_overlap_outweighs_distance() {
    // "search engine tuning" is far by edit distance but shares 13 characters
    let engine = engine(
        make_pool(&[("near", "seed"), ("overlap", "search engine tuning")]),
        SimilarityMode::EditDistance,
        true,
    );
    let results = engine.search("search engine", SearchParams::new());
    assert_eq!(keys(&results), vec!["overlap", "near"]);
    assert_eq!(scores(&results)[0], 7.0 - 13.0);
}

#[test]
fn test_phonetic_overlap_combines() {
    let engine = engine(
        make_pool(&[("a", "MARHTA")]),
        SimilarityMode::Phonetic,
        true,
    );
    let results = engine.search("MARTHA", SearchParams::new());
    // 0.96 similarity, "MAR" shared
    assert_eq!(scores(&results), vec![-0.96 - 3.0]);
}

#[test]
fn test_duplicate_insert_keeps_first_position() {
    let mut pool = RecordPool::new();
    pool.insert("first", Record::new().with_field("title", "abc"));
    pool.insert("second", Record::new().with_field("title", "abc"));
    pool.insert("first", Record::new().with_field("title", "abd"));

    let results = edit_engine(pool).search("abd", SearchParams::new());
    assert_eq!(keys(&results), vec!["first", "second"]);
}

#[test]
fn test_repeat_searches_identical() {
    let engine = phonetic_engine(make_pool(&[(1, "alpha"), (2, "alps"), (3, "lap")]));
    let first = engine.search("alp", SearchParams::new());
    for _ in 0..5 {
        assert_eq!(engine.search("alp", SearchParams::new()), first);
    }
}

//! End-to-end scenarios on small, hand-checked pools.

use crate::common::{edit_engine, engine, keys, make_pool, phonetic_engine, sample_blog, scores};
use pagesift::{
    jaro_winkler, longest_common_substring, EngineConfig, Record, RecordKey, RecordPool,
    SearchParams, SimilarityEngine, SimilarityMode,
};

#[test]
fn test_hello_world_ranks_before_goodbye_moon() {
    let engine = edit_engine(make_pool(&[(1, "Hello World"), (2, "Goodbye Moon")]));
    let results = engine.search("hello", SearchParams::new());

    assert_eq!(keys(&results), vec!["1", "2"]);
    // Case matters for edit distance: "Hello World" → "hello" is 7 edits
    assert_eq!(results.hits()[0].score, 7.0);
    assert!(results.hits()[1].score > 7.0);
}

#[test]
fn test_kitten_sitting() {
    let engine = edit_engine(make_pool(&[(1, "kitten")]));
    assert_eq!(scores(&engine.search("sitting", SearchParams::new())), vec![3.0]);
}

#[test]
fn test_substring_examples() {
    assert_eq!(longest_common_substring("abcdef", "zabcf"), 3);
    assert_eq!(longest_common_substring("GeeksforGeeks", "GeeksQuiz"), 5);
}

#[test]
fn test_martha_marhta() {
    assert_eq!(jaro_winkler("MARTHA", "MARHTA"), 0.96);
}

#[test]
fn test_empty_pool_returns_nothing() {
    for mode in [SimilarityMode::EditDistance, SimilarityMode::Phonetic] {
        let engine = engine(RecordPool::new(), mode, true);
        assert!(engine.search("query", SearchParams::new()).is_empty());
    }
}

#[test]
fn test_max_distance_zero_is_exact_match_only() {
    let engine = edit_engine(make_pool(&[
        ("a", "rust"),
        ("b", "Rust"),
        ("c", "rusty"),
        ("d", "rust"),
    ]));
    let results = engine.search("rust", SearchParams::new().with_max_distance(0));
    assert_eq!(keys(&results), vec!["a", "d"]);
    assert_eq!(scores(&results), vec![0.0, 0.0]);
}

#[test]
fn test_default_config_finds_search_page() {
    let engine = SimilarityEngine::new(sample_blog(), EngineConfig::default());
    let results = engine.search("search", SearchParams::new());
    assert_eq!(results.len(), 5);
    assert_eq!(results.keys()[0], RecordKey::from("search-plugin"));
    // Overlap of 6 ("search" in the body) plus a positive similarity
    assert!(results.hits()[0].score < -6.0);
}

#[test]
fn test_phonetic_exact_title_scores_minus_one() {
    let engine = phonetic_engine(sample_blog());
    let results = engine.search("Contact", SearchParams::new());
    assert_eq!(results.keys()[0], RecordKey::from("contact"));
    assert_eq!(results.hits()[0].score, -1.0);
}

#[test]
fn test_any_field_can_win() {
    let mut pool = RecordPool::new();
    pool.insert("title-match", Record::page("ownership", "x", "y"));
    pool.insert("content-match", Record::page("x", "y", "ownership"));
    pool.insert("no-match", Record::page("x", "y", "z"));

    let results = edit_engine(pool).search("ownership", SearchParams::new());
    assert_eq!(keys(&results), vec!["title-match", "content-match", "no-match"]);
    assert_eq!(scores(&results)[..2], [0.0, 0.0]);
}

#[test]
fn test_custom_field_names() {
    let mut pool = RecordPool::new();
    pool.insert(1, Record::new().with_field("name", "Jon").with_field("city", "Oslo"));
    pool.insert(2, Record::new().with_field("name", "Jane").with_field("city", "Bergen"));

    let results = edit_engine(pool).search("Oslo", SearchParams::new());
    assert_eq!(keys(&results), vec!["1", "2"]);
    assert_eq!(results.hits()[0].score, 0.0);
}

#[test]
fn test_fieldless_record_is_scored() {
    let mut pool = RecordPool::new();
    pool.insert("empty", Record::new());
    pool.insert("close", Record::new().with_field("title", "abd"));

    let results = edit_engine(pool).search("abc", SearchParams::new());
    assert_eq!(keys(&results), vec!["close", "empty"]);
    assert_eq!(scores(&results), vec![1.0, 3.0]);
}

#[test]
fn test_unicode_is_compared_by_character() {
    let engine = edit_engine(make_pool(&[(1, "café"), (2, "cafe")]));
    let results = engine.search("café", SearchParams::new());
    assert_eq!(keys(&results), vec!["1", "2"]);
    assert_eq!(scores(&results), vec![0.0, 1.0]);
}

#[test]
fn test_empty_query() {
    let engine = engine(make_pool(&[(1, "ab"), (2, "")]), SimilarityMode::EditDistance, true);
    let results = engine.search("", SearchParams::new());
    assert_eq!(keys(&results), vec!["2", "1"]);
    assert_eq!(scores(&results), vec![0.0, 2.0]);
}

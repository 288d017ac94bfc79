//! Writing, rewriting, reading and inspecting cache files.

use std::fs;

use crate::common::{generated_pool, make_page, make_pool, sample_blog};
use pagesift::build::checksum;
use pagesift::{
    build_cache, inspect_cache, load_cache, write_cache, Error, RecordKey, RecordPool, SiteConfig,
};
use tempfile::tempdir;

#[test]
fn test_write_then_load_keeps_records_and_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cache.json");
    let pool = sample_blog();

    let summary = write_cache(&pool, &path).unwrap();
    assert_eq!(summary.records, 5);
    assert!(!summary.unchanged);

    let loaded = load_cache(&path).unwrap();
    assert_eq!(loaded, pool);
}

#[test]
fn test_second_identical_write_is_skipped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cache.json");
    let pool = generated_pool(20);

    let first = write_cache(&pool, &path).unwrap();
    let second = write_cache(&pool, &path).unwrap();

    assert!(!first.unchanged);
    assert!(second.unchanged);
    assert_eq!(first.checksum, second.checksum);
    assert_eq!(first.bytes, second.bytes);
}

#[test]
fn test_changed_pool_rewrites_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cache.json");

    write_cache(&make_pool(&[(1, "old title")]), &path).unwrap();
    let summary = write_cache(&make_pool(&[(1, "new title")]), &path).unwrap();

    assert!(!summary.unchanged);
    let loaded = load_cache(&path).unwrap();
    assert_eq!(
        loaded.get(&RecordKey::Int(1)).and_then(|r| r.get("title")),
        Some("new title")
    );
}

#[test]
fn test_checksum_is_crc32_of_file_bytes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cache.json");

    let summary = write_cache(&sample_blog(), &path).unwrap();
    let bytes = fs::read(&path).unwrap();

    assert_eq!(summary.bytes, bytes.len());
    assert_eq!(summary.checksum, checksum(&bytes));
    assert_eq!(summary.checksum, crc32fast::hash(&bytes));
}

#[test]
fn test_write_creates_missing_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("public").join("search").join("cache.json");

    write_cache(&sample_blog(), &path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_no_temp_files_left_behind() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cache.json");

    write_cache(&sample_blog(), &path).unwrap();
    write_cache(&generated_pool(3), &path).unwrap();

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["cache.json".to_string()]);
}

#[test]
fn test_empty_pool_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cache.json");

    write_cache(&RecordPool::new(), &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    assert!(load_cache(&path).unwrap().is_empty());
}

#[test]
fn test_numeric_keys_come_back_as_integers() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cache.json");
    fs::write(
        &path,
        r#"{"42": {"title": "Answer"}, "007": {"title": "Agent"}, "-3": {"title": "Neg"}}"#,
    )
    .unwrap();

    let pool = load_cache(&path).unwrap();
    let keys: Vec<&RecordKey> = pool.keys().collect();
    assert_eq!(
        keys,
        vec![
            &RecordKey::Int(42),
            &RecordKey::Text("007".to_string()),
            &RecordKey::Int(-3),
        ]
    );
}

#[test]
fn test_built_pool_survives_write_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cache.json");
    let pages = vec![
        make_page(7, "Int Seven", "<p>int seven</p>"),
        make_page("7", "Text Seven", "<p>text seven</p>"),
        make_page("404", "Not Found", "<p>slug</p>"),
        make_page("007", "Agent", "<p>shaken</p>"),
    ];
    let built = build_cache(&pages, &SiteConfig::default());
    assert_eq!(built.len(), 3);

    write_cache(&built, &path).unwrap();
    let loaded = load_cache(&path).unwrap();
    assert_eq!(loaded, built);
}

#[test]
fn test_missing_cache_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = load_cache(&path).unwrap_err();
    assert!(matches!(err, Error::Io { path: ref p, .. } if p == &path));
}

#[test]
fn test_malformed_cache_is_json_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cache.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    assert!(matches!(load_cache(&path), Err(Error::Json { .. })));
}

#[test]
fn test_inspect_cache_reports_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cache.json");
    let summary = write_cache(&sample_blog(), &path).unwrap();

    let stats = inspect_cache(&path).unwrap();
    assert_eq!(stats.records, 5);
    assert_eq!(stats.bytes, summary.bytes);
    assert_eq!(stats.checksum, summary.checksum);

    let names: Vec<&str> = stats.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["title", "description", "content"]);
    assert!(stats.fields.iter().all(|f| f.present == 5));

    let title = &stats.fields[0];
    assert_eq!(title.max_chars, "Understanding Rust Ownership".chars().count());
}

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::build::{PageSource, PageStatus};
use crate::types::{Record, RecordKey, RecordPool};

/// A record with only a title field.
pub fn make_record(title: &str) -> Record {
    Record::new().with_field("title", title)
}

/// A pool of title-only records, in the given order.
pub fn make_pool<K: Into<RecordKey> + Clone>(entries: &[(K, &str)]) -> RecordPool {
    entries
        .iter()
        .map(|(key, title)| (key.clone(), make_record(title)))
        .collect()
}

/// A page as it would appear in `pages.json`.
pub fn make_page(key: impl Into<RecordKey>, title: &str, content: &str) -> PageSource {
    PageSource {
        key: key.into(),
        title: title.to_string(),
        description: format!("About {}", title.to_lowercase()),
        content: content.to_string(),
        status: PageStatus::Published,
    }
}

/// A small blog: slugs as keys, title/description/content records.
pub fn sample_blog() -> RecordPool {
    let mut pool = RecordPool::new();
    pool.insert(
        "getting-started",
        Record::page(
            "Getting Started",
            "Install the theme and write your first post",
            "Download the release archive, unpack it into the themes folder and \
             activate it from the admin panel.",
        ),
    );
    pool.insert(
        "rust-ownership",
        Record::page(
            "Understanding Rust Ownership",
            "Borrowing, moves and lifetimes explained",
            "Every value in Rust has a single owner. When the owner goes out of \
             scope the value is dropped.",
        ),
    );
    pool.insert(
        "search-plugin",
        Record::page(
            "Adding Search to Your Site",
            "Fuzzy matching without a database",
            "The search plugin caches page text in a JSON file and ranks pages by \
             edit distance or Jaro-Winkler similarity.",
        ),
    );
    pool.insert(
        "about",
        Record::page(
            "About",
            "Who writes this blog",
            "A small blog about programming, typography and the occasional recipe.",
        ),
    );
    pool.insert(
        "contact",
        Record::page("Contact", "Get in touch", "Send an email or open an issue."),
    );
    pool
}

/// `n` generated pages with a few recurring words, for scale tests.
pub fn generated_pool(n: usize) -> RecordPool {
    const TOPICS: [&str; 6] = ["rust", "search", "cache", "theme", "plugin", "release"];
    (0..n)
        .map(|i| {
            let topic = TOPICS[i % TOPICS.len()];
            let record = Record::page(
                &format!("{} notes {}", topic, i),
                &format!("Part {} of the {} series", i / TOPICS.len(), topic),
                &format!("Page {} talks about {} and links to page {}.", i, topic, i + 1),
            );
            (i as i64, record)
        })
        .collect()
}

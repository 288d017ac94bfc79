// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: record keys, records, the record pool, and search hits.
//!
//! A [`RecordPool`] is an insertion-ordered map of [`RecordKey`] → [`Record`].
//! Order never affects a score, but it is the tiebreaker when two records score
//! the same, so it has to survive a JSON round trip. `serde_json`'s default map
//! is a `BTreeMap` and would sort the keys, which is why the pool and the record
//! have hand-written visitors that read entries in document order.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Field name for the page title.
pub const TITLE_FIELD: &str = "title";

/// Field name for the page description.
pub const DESCRIPTION_FIELD: &str = "description";

/// Field name for the (truncated, tag-free) page body.
pub const CONTENT_FIELD: &str = "content";

// =============================================================================
// RECORD KEY
// =============================================================================

/// Opaque identifier of a record, unique within a pool.
///
/// Keys are caller-defined: page slugs are text, database ids are integers.
/// When a pool is read from a JSON object every key arrives as a string, so a
/// key that is the canonical decimal form of an `i64` becomes [`RecordKey::Int`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKey {
    Int(i64),
    Text(String),
}

impl RecordKey {
    /// Parse a key as it appears in a JSON object.
    pub fn from_object_key(raw: &str) -> Self {
        RecordKey::Text(raw.to_string()).canonical()
    }

    /// The key this one becomes after a trip through a JSON object.
    ///
    /// Text that spells an `i64` in canonical decimal form turns into
    /// [`RecordKey::Int`], so `Text("7")` and `Int(7)` are the same key.
    pub fn canonical(self) -> Self {
        match self {
            RecordKey::Text(s) => match s.parse::<i64>() {
                Ok(n) if n.to_string() == s => RecordKey::Int(n),
                _ => RecordKey::Text(s),
            },
            key => key,
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Int(n) => write!(f, "{}", n),
            RecordKey::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordKey {
    fn from(n: i64) -> Self {
        RecordKey::Int(n)
    }
}

impl From<i32> for RecordKey {
    fn from(n: i32) -> Self {
        RecordKey::Int(i64::from(n))
    }
}

impl From<&str> for RecordKey {
    fn from(s: &str) -> Self {
        RecordKey::Text(s.to_string())
    }
}

impl From<String> for RecordKey {
    fn from(s: String) -> Self {
        RecordKey::Text(s)
    }
}

impl Serialize for RecordKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RecordKey::Int(n) => serializer.serialize_i64(*n),
            RecordKey::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for RecordKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => RecordKey::Int(n),
            Raw::Text(s) => RecordKey::Text(s),
        })
    }
}

// =============================================================================
// RECORD
// =============================================================================

/// An ordered list of `field name → text` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// The title/description/content triple the cache builder produces.
    pub fn page(title: &str, description: &str, content: &str) -> Self {
        Self::new()
            .with_field(TITLE_FIELD, title)
            .with_field(DESCRIPTION_FIELD, description)
            .with_field(CONTENT_FIELD, content)
    }

    /// Builder-style [`Record::set`].
    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    /// Set a field. An existing field keeps its position.
    pub fn set(&mut self, name: &str, value: &str) {
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.fields.push((name.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Field values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of field name to text")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Record, A::Error> {
                let mut record = Record::new();
                while let Some((name, value)) =
                    access.next_entry::<String, serde_json::Value>()?
                {
                    record.set(&name, &field_text(&value));
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

/// Text form of a cached field value.
///
/// Caches written by other tools sometimes carry numbers or booleans where text
/// is expected; they are compared by their printed form.
fn field_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        serde_json::Value::Bool(true) => "1".to_string(),
        serde_json::Value::Bool(false) => String::new(),
        other => other.to_string(),
    }
}

// =============================================================================
// RECORD POOL
// =============================================================================

/// Insertion-ordered map of record key → record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordPool {
    entries: Vec<(RecordKey, Record)>,
    positions: HashMap<RecordKey, usize>,
}

impl RecordPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record. A duplicate key replaces the record in place.
    pub fn insert(&mut self, key: impl Into<RecordKey>, record: Record) {
        let key = key.into();
        match self.positions.get(&key) {
            Some(&pos) => self.entries[pos].1 = record,
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, record));
            }
        }
    }

    pub fn get(&self, key: &RecordKey) -> Option<&Record> {
        self.positions.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains_key(&self, key: &RecordKey) -> bool {
        self.positions.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RecordKey, &Record)> {
        self.entries.iter().map(|(k, r)| (k, r))
    }

    pub fn keys(&self) -> impl Iterator<Item = &RecordKey> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for RecordPool {
    type Item = (RecordKey, Record);
    type IntoIter = std::vec::IntoIter<(RecordKey, Record)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<RecordKey>> FromIterator<(K, Record)> for RecordPool {
    fn from_iter<I: IntoIterator<Item = (K, Record)>>(iter: I) -> Self {
        let mut pool = RecordPool::new();
        for (key, record) in iter {
            pool.insert(key, record);
        }
        pool
    }
}

impl Serialize for RecordPool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, record) in &self.entries {
            map.serialize_entry(&key.to_string(), record)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RecordPool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PoolVisitor;

        impl<'de> Visitor<'de> for PoolVisitor {
            type Value = RecordPool;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of record key to record")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RecordPool, A::Error> {
                let mut pool = RecordPool::new();
                while let Some((key, record)) = access.next_entry::<String, Record>()? {
                    pool.insert(RecordKey::from_object_key(&key), record);
                }
                Ok(pool)
            }
        }

        deserializer.deserialize_map(PoolVisitor)
    }
}

// =============================================================================
// SEARCH RESULTS
// =============================================================================

/// One accepted record and its combined score (lower is better).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub key: RecordKey,
    pub score: f64,
}

/// Accepted records, best match first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    hits: Vec<SearchHit>,
}

impl ResultSet {
    /// Wrap hits that are already in ranked order.
    pub(crate) fn from_ranked(hits: Vec<SearchHit>) -> Self {
        Self { hits }
    }

    pub fn hits(&self) -> &[SearchHit] {
        &self.hits
    }

    /// Keys in ranked order, scores dropped.
    pub fn keys(&self) -> Vec<RecordKey> {
        self.hits.iter().map(|h| h.key.clone()).collect()
    }

    /// At most the first `limit` hits.
    ///
    /// The engine never caps its own output; this is how callers apply
    /// `max_results`.
    pub fn truncated(mut self, limit: usize) -> Self {
        self.hits.truncate(limit);
        self
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchHit> {
        self.hits.iter()
    }
}

impl IntoIterator for ResultSet {
    type Item = SearchHit;
    type IntoIter = std::vec::IntoIter<SearchHit>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a SearchHit;
    type IntoIter = std::slice::Iter<'a, SearchHit>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.iter()
    }
}

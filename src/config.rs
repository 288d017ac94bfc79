// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine and site configuration.
//!
//! Two layers. [`EngineConfig`] is what the ranking engine needs: which metric
//! to rank by, whether substring overlap counts, and the advisory result cap.
//! [`SiteConfig`] wraps it with the knobs of the surrounding site search
//! (minimum query length, cached words per page, page size).
//!
//! Both load from JSON with every field optional. Missing fields take the
//! defaults below, unknown fields are rejected, and validation runs once.
//!
//! | Field               | Default   | Notes                                   |
//! |---------------------|-----------|-----------------------------------------|
//! | `minChars`          | 3         | shorter queries return nothing          |
//! | `cacheWords`        | 800       | body budget is `cacheWords × 5` chars   |
//! | `itemsPerPage`      | 10        | `≤ 0` puts every hit on page 1          |
//! | `engine.maxResults` | 10        | clamped to ≥ 1, never applied by search |
//! | `engine.mode`       | phonetic  | `0`/`edit-distance` or `1`/`phonetic`   |
//! | `engine.useOverlap` | true      | subtract longest common substring       |

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Pools at least this large are scanned on the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

// =============================================================================
// SIMILARITY MODE
// =============================================================================

/// Primary metric used to rank records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "ModeRepr")]
pub enum SimilarityMode {
    /// Levenshtein distance, lowest across fields wins.
    EditDistance,
    /// Jaro-Winkler similarity, highest across fields wins.
    Phonetic,
}

impl SimilarityMode {
    /// Numeric code used by stored settings (0 or 1).
    pub fn code(self) -> u8 {
        match self {
            SimilarityMode::EditDistance => 0,
            SimilarityMode::Phonetic => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SimilarityMode::EditDistance => "edit-distance",
            SimilarityMode::Phonetic => "phonetic",
        }
    }
}

impl fmt::Display for SimilarityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i64> for SimilarityMode {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self> {
        match code {
            0 => Ok(SimilarityMode::EditDistance),
            1 => Ok(SimilarityMode::Phonetic),
            other => Err(Error::Configuration(format!(
                "invalid search mode {} (expected 0 or 1)",
                other
            ))),
        }
    }
}

impl FromStr for SimilarityMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "edit-distance" | "levenshtein" => Ok(SimilarityMode::EditDistance),
            "phonetic" | "jaro-winkler" => Ok(SimilarityMode::Phonetic),
            other => match other.parse::<i64>() {
                Ok(code) => SimilarityMode::try_from(code),
                Err(_) => Err(Error::Configuration(format!(
                    "invalid search mode '{}' (expected edit-distance or phonetic)",
                    s
                ))),
            },
        }
    }
}

/// Stored settings carry the mode either as a code or as a name.
#[derive(Deserialize)]
#[serde(untagged)]
enum ModeRepr {
    Code(i64),
    Name(String),
}

impl TryFrom<ModeRepr> for SimilarityMode {
    type Error = Error;

    fn try_from(repr: ModeRepr) -> Result<Self> {
        match repr {
            ModeRepr::Code(code) => SimilarityMode::try_from(code),
            ModeRepr::Name(name) => name.parse(),
        }
    }
}

// =============================================================================
// ENGINE CONFIG
// =============================================================================

/// Ranking engine settings. Immutable once an engine is built from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Advisory cap on results. Stored, never applied by `search`.
    #[serde(deserialize_with = "clamped_max_results")]
    pub max_results: usize,
    pub mode: SimilarityMode,
    /// Factor longest-common-substring overlap into the score.
    pub use_overlap: bool,
    /// Pool size at which the scan goes parallel (`parallel` feature only).
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_results: 10,
            mode: SimilarityMode::Phonetic,
            use_overlap: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// `max_results` below 1 is silently raised to 1.
    pub fn new(max_results: usize, mode: SimilarityMode, use_overlap: bool) -> Self {
        Self {
            max_results: max_results.max(1),
            mode,
            use_overlap,
            ..Self::default()
        }
    }

    /// Same config with `max_results` clamped.
    pub(crate) fn normalized(mut self) -> Self {
        self.max_results = self.max_results.max(1);
        self
    }
}

fn clamped_max_results<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<usize, D::Error> {
    let raw = i64::deserialize(deserializer)?;
    Ok(usize::try_from(raw.max(1)).unwrap_or(usize::MAX))
}

// =============================================================================
// SITE CONFIG
// =============================================================================

/// Settings for the site-search adapter and cache builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Queries shorter than this (in characters) return nothing.
    pub min_chars: usize,
    /// Words kept per page in the cache.
    pub cache_words: usize,
    /// Hits per results page. Zero or negative disables paging.
    pub items_per_page: i64,
    pub engine: EngineConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            min_chars: 3,
            cache_words: 800,
            items_per_page: 10,
            engine: EngineConfig::default(),
        }
    }
}

/// Explicit per-field overrides. `None` keeps the base value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfigOverrides {
    pub min_chars: Option<usize>,
    pub cache_words: Option<usize>,
    pub items_per_page: Option<i64>,
    pub max_results: Option<usize>,
    pub mode: Option<SimilarityMode>,
    pub use_overlap: Option<bool>,
}

impl SiteConfig {
    /// Load from a JSON file and validate.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: SiteConfig = serde_json::from_str(&raw).map_err(|e| Error::json(path, e))?;
        config.validated()
    }

    /// Apply the overrides that are set, then validate.
    pub fn merge(mut self, overrides: &SiteConfigOverrides) -> Result<Self> {
        if let Some(v) = overrides.min_chars {
            self.min_chars = v;
        }
        if let Some(v) = overrides.cache_words {
            self.cache_words = v;
        }
        if let Some(v) = overrides.items_per_page {
            self.items_per_page = v;
        }
        if let Some(v) = overrides.max_results {
            self.engine.max_results = v;
        }
        if let Some(v) = overrides.mode {
            self.engine.mode = v;
        }
        if let Some(v) = overrides.use_overlap {
            self.engine.use_overlap = v;
        }
        self.validated()
    }

    /// Character budget for cached page bodies (five characters per word).
    pub fn content_char_budget(&self) -> usize {
        self.cache_words.saturating_mul(5)
    }

    fn validated(mut self) -> Result<Self> {
        if self.cache_words == 0 {
            return Err(Error::Configuration(
                "cacheWords must be at least 1".to_string(),
            ));
        }
        self.engine = self.engine.normalized();
        Ok(self)
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for the library surface.
//!
//! The similarity metrics are total and never fail. Everything that can fail
//! sits at the edges: configuration validation, cache files on disk, and a
//! search that was asked to stop.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::types::RecordKey;

#[derive(Error, Debug)]
pub enum Error {
    /// Invalid similarity mode or configuration value. Fatal to construction.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Reading or writing a cache, config, or page file failed.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A cache, config, or page file is not valid JSON for its shape.
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A key no longer resolves to a record.
    #[error("no record for key {0}")]
    MissingRecord(RecordKey),

    /// The caller raised the cancellation flag mid-scan.
    #[error("search cancelled")]
    Cancelled,
}

impl Error {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn json(path: &Path, source: serde_json::Error) -> Self {
        Error::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

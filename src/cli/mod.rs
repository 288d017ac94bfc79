// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the pagesift command-line interface.
//!
//! Three subcommands: `cache` to build a cache from a site's pages, `search`
//! to rank a cache against a query, and `inspect` to summarize a cache file.
//! `search` prints the whole ranked list by default; with `--page` it answers
//! the way the site does, one results page at a time.

pub mod display;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use pagesift::{SearchParams, SimilarityMode, SiteConfigOverrides};

#[derive(Parser)]
#[command(
    name = "pagesift",
    about = "Fuzzy similarity search over a site's page cache",
    version
)]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build cache.json from a directory holding pages.json
    Cache {
        /// Directory containing pages.json
        #[arg(short, long)]
        input: PathBuf,

        /// Cache file to write
        #[arg(short, long)]
        output: PathBuf,

        /// Site configuration (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Words of page content to keep (five characters each)
        #[arg(long)]
        cache_words: Option<usize>,
    },

    /// Rank a cache against a query
    Search(SearchArgs),

    /// Summarize a cache file
    Inspect {
        /// Path to cache.json
        cache: PathBuf,

        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub struct SearchArgs {
    /// Path to cache.json
    #[arg(long)]
    pub cache: PathBuf,

    /// Search query
    pub query: String,

    /// Site configuration (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Ranking metric: edit-distance (0) or phonetic (1)
    #[arg(long)]
    pub mode: Option<SimilarityMode>,

    /// Subtract the longest common substring from scores
    #[arg(long, conflicts_with = "no_overlap")]
    pub overlap: bool,

    /// Rank by the primary metric alone
    #[arg(long)]
    pub no_overlap: bool,

    /// Drop records sharing fewer consecutive characters (overlap mode only)
    #[arg(long)]
    pub min_overlap: Option<usize>,

    /// Drop records further than this edit distance (edit-distance mode only)
    #[arg(long)]
    pub max_distance: Option<usize>,

    /// Answer like the site: this 1-based results page only
    #[arg(long)]
    pub page: Option<usize>,

    /// Minimum query length in site mode
    #[arg(long)]
    pub min_chars: Option<usize>,

    /// Results per page in site mode (0 disables paging)
    #[arg(long)]
    pub per_page: Option<i64>,

    /// Results to print [default: maxResults from the config]
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Show the per-metric breakdown of every printed result
    #[arg(long)]
    pub explain: bool,

    /// Print machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    pub fn use_overlap(&self) -> Option<bool> {
        match (self.overlap, self.no_overlap) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    pub fn overrides(&self) -> SiteConfigOverrides {
        SiteConfigOverrides {
            min_chars: self.min_chars,
            items_per_page: self.per_page,
            mode: self.mode,
            use_overlap: self.use_overlap(),
            ..SiteConfigOverrides::default()
        }
    }

    pub fn params(&self) -> SearchParams {
        SearchParams {
            min_overlap: self.min_overlap,
            max_distance: self.max_distance,
        }
    }
}

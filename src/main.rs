// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use pagesift::{
    build, logging, site, SearchRequest, SimilarityEngine, SiteConfig, SiteConfigOverrides,
    SiteSearch, TITLE_FIELD,
};

mod cli;
use cli::{display, Cli, Commands, SearchArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("❌ {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Cache {
            input,
            output,
            config,
            cache_words,
        } => run_cache(&input, &output, config.as_deref(), cache_words),
        Commands::Search(args) => run_search(&args),
        Commands::Inspect { cache, json } => run_inspect(&cache, json),
    }
}

/// Config file (or defaults) with command-line overrides applied.
fn load_config(path: Option<&Path>, overrides: &SiteConfigOverrides) -> Result<SiteConfig> {
    let base = match path {
        Some(path) => SiteConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SiteConfig::default(),
    };
    base.merge(overrides).context("invalid configuration")
}

fn run_cache(
    input: &Path,
    output: &Path,
    config: Option<&Path>,
    cache_words: Option<usize>,
) -> Result<()> {
    let overrides = SiteConfigOverrides {
        cache_words,
        ..SiteConfigOverrides::default()
    };
    let config = load_config(config, &overrides)?;

    let summary = build::run_cache(input, output, &config)
        .with_context(|| format!("building cache from {}", input.display()))?;

    display::print_cache_summary(&summary, output);
    Ok(())
}

fn run_search(args: &SearchArgs) -> Result<()> {
    let config = load_config(args.config.as_deref(), &args.overrides())?;
    let pool = build::load_cache(&args.cache)
        .with_context(|| format!("loading cache {}", args.cache.display()))?;

    if let Some(page) = args.page {
        let search = SiteSearch::new(pool.clone(), config);
        let outcome = search.search(&SearchRequest::new(args.query.as_str(), page));
        if args.json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            let pages = site::resolve(&outcome, &pool);
            display::print_outcome(&outcome, &pages);
        }
        return Ok(());
    }

    let limit = args.limit.unwrap_or(config.engine.max_results);
    let engine = SimilarityEngine::new(pool.clone(), config.engine);
    let results = engine.search(&args.query, args.params());
    let total = results.len();
    let results = results.truncated(limit);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        display::print_no_matches();
    }
    for (rank, hit) in results.iter().enumerate() {
        let record = pool.get(&hit.key);
        let title = record.and_then(|r| r.get(TITLE_FIELD)).unwrap_or("");
        display::print_hit(rank + 1, hit, title);
        if let (true, Some(record)) = (args.explain, record) {
            display::print_assessment(&engine.assess(&args.query, record, args.params()));
        }
    }
    display::print_remaining(total, results.len());
    Ok(())
}

fn run_inspect(cache: &Path, json: bool) -> Result<()> {
    let stats = build::inspect_cache(cache)
        .with_context(|| format!("inspecting {}", cache.display()))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        display::print_stats(&stats, cache);
    }
    Ok(())
}

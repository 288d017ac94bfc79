// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the pagesift CLI.
//!
//! Plain ANSI styling, box drawing for `inspect`, aligned result tables for
//! `search`. Respects `NO_COLOR` and drops styling when stdout is not a TTY,
//! so piped output stays clean.

use std::path::Path;

use pagesift::{
    Assessment, CacheStats, CacheSummary, Record, SearchHit, SearchOutcome, DESCRIPTION_FIELD,
    TITLE_FIELD,
};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

pub use colors::*;

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply styles if TTY, otherwise return plain text
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Shorten to `max` characters, marking the cut with `…`
pub fn ellipsize(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Format bytes as human-readable size
pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = styled(&[GRAY], "│");
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border, content, " ".repeat(pad), border);
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", styled(&[CYAN, BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        styled(&[GRAY], "┌"),
        label_part,
        styled(&[GRAY], &format!("{}┐", "─".repeat(remaining)))
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}", styled(&[GRAY], &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded score. Lower is better: negative scores are strong matches.
pub fn score_value(score: f64) -> String {
    let text = format!("{:>8.2}", score);
    if score < 0.0 {
        styled(&[GREEN, BOLD], &text)
    } else if score <= 2.0 {
        styled(&[YELLOW], &text)
    } else {
        styled(&[GRAY], &text)
    }
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "–".to_string(), |v| v.to_string())
}

// ═══════════════════════════════════════════════════════════════════════════
// COMMAND OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_cache_summary(summary: &CacheSummary, output: &Path) {
    if summary.unchanged {
        println!(
            "{} {} unchanged ({} records, crc32 {:08x})",
            styled(&[GRAY], "="),
            output.display(),
            summary.records,
            summary.checksum
        );
    } else {
        println!(
            "{} {} ({} records, {}, crc32 {:08x})",
            styled(&[GREEN, BOLD], "✓"),
            output.display(),
            summary.records,
            format_size(summary.bytes),
            summary.checksum
        );
    }
}

/// One result line: rank, score, key, title.
pub fn print_hit(rank: usize, hit: &SearchHit, title: &str) {
    println!(
        "{} {} {} {}",
        pad_left(&styled(&[DIM], &format!("{}.", rank)), 4),
        score_value(hit.score),
        pad_right(&styled(&[BOLD], &hit.key.to_string()), 16),
        ellipsize(title, 48)
    );
}

pub fn print_no_matches() {
    println!("{}", styled(&[DIM], "no matches"));
}

/// Note how many accepted hits were cut by `--limit`.
pub fn print_remaining(total: usize, shown: usize) {
    if total > shown {
        println!(
            "{}",
            styled(&[DIM], &format!("… {} more (raise --limit)", total - shown))
        );
    }
}

/// Indented per-metric breakdown under a hit.
pub fn print_assessment(assessment: &Assessment) {
    let scores = &assessment.scores;
    println!(
        "       {}",
        styled(
            &[GRAY],
            &format!(
                "distance {} · similarity {} · overlap {} · {}",
                or_dash(scores.best_distance),
                or_dash(scores.best_similarity),
                or_dash(scores.best_overlap),
                if assessment.accepted { "accepted" } else { "rejected" }
            )
        )
    );
}

/// Resolved pages of one results page, as the site would list them.
pub fn print_outcome(outcome: &SearchOutcome, pages: &[Record]) {
    println!(
        "{} {} total, page {}",
        styled(&[CYAN, BOLD], "results:"),
        outcome.total_items,
        outcome.page_number
    );
    for page in pages {
        let title = page.get(TITLE_FIELD).unwrap_or("");
        let description = page.get(DESCRIPTION_FIELD).unwrap_or("");
        println!("  {} {}", styled(&[BOLD], title), styled(&[DIM], &ellipsize(description, 60)));
    }
}

pub fn print_stats(stats: &CacheStats, path: &Path) {
    section_top("CACHE");
    row(&format!(" file      {}", ellipsize(&path.display().to_string(), 56)));
    row(&format!(" records   {}", stats.records));
    row(&format!(" size      {}", format_size(stats.bytes)));
    row(&format!(" crc32     {:08x}", stats.checksum));
    section_bot();

    if stats.fields.is_empty() {
        return;
    }
    section_top("FIELDS");
    row(&format!(
        " {} {} {} {}",
        pad_right(&styled(&[DIM], "name"), 20),
        pad_left(&styled(&[DIM], "present"), 10),
        pad_left(&styled(&[DIM], "avg chars"), 12),
        pad_left(&styled(&[DIM], "max chars"), 12)
    ));
    for field in &stats.fields {
        row(&format!(
            " {} {:>10} {:>12.1} {:>12}",
            pad_right(&ellipsize(&field.name, 20), 20),
            field.present,
            field.avg_chars,
            field.max_chars
        ));
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════

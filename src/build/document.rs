// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Input pages and the text clean-up applied before caching.

use serde::{Deserialize, Serialize};

use crate::types::{Record, RecordKey};
use crate::utils::truncate_chars;

/// Publication state of a page. Only the first three are searchable.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    #[default]
    Published,
    Static,
    Sticky,
    Draft,
    Scheduled,
}

impl PageStatus {
    pub fn is_searchable(self) -> bool {
        matches!(
            self,
            PageStatus::Published | PageStatus::Static | PageStatus::Sticky
        )
    }
}

/// One entry of `pages.json`.
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PageSource {
    pub key: RecordKey,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Page body, usually HTML.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub status: PageStatus,
}

impl PageSource {
    /// The cached form: title and description verbatim, content stripped of
    /// markup and cut to `char_budget` characters.
    pub fn to_record(&self, char_budget: usize) -> Record {
        let text = strip_html(&self.content);
        Record::page(
            &self.title,
            &self.description,
            truncate_chars(&text, char_budget),
        )
    }
}

/// Elements whose body is not page text.
const RAW_TEXT_TAGS: [&str; 2] = ["script", "style"];

/// `&amp;` is not listed: it is decoded last so `&amp;lt;` stays `&lt;`.
const ENTITIES: [(&str, &str); 6] = [
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&#039;", "'"),
    ("&nbsp;", " "),
];

/// Remove markup from `html` and decode the common entities.
///
/// Tags vanish without leaving whitespace behind. Comments and the bodies of
/// `<script>` and `<style>` are dropped. An unterminated tag swallows the
/// rest of the input.
pub fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let tag = &rest[start..];

        if let Some(comment) = tag.strip_prefix("<!--") {
            rest = comment.find("-->").map_or("", |end| &comment[end + 3..]);
            continue;
        }

        let Some(end) = tag.find('>') else {
            rest = "";
            break;
        };
        let name = tag_name(&tag[1..end]);
        rest = &tag[end + 1..];

        if let Some(raw) = RAW_TEXT_TAGS
            .iter()
            .find(|raw| name.eq_ignore_ascii_case(raw))
        {
            rest = skip_raw_text(rest, raw);
        }
    }
    out.push_str(rest);

    decode_entities(&out)
}

/// Decode the handful of entities editors actually emit.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    let mut out = text.to_string();
    for (entity, replacement) in ENTITIES {
        if out.contains(entity) {
            out = out.replace(entity, replacement);
        }
    }
    out.replace("&amp;", "&")
}

/// Element name of a tag body such as `p class="x"` or `br/`. Closing tags
/// yield an empty name.
fn tag_name(inner: &str) -> &str {
    inner
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or("")
}

/// Skip to just past the closing tag of a raw-text element.
fn skip_raw_text<'a>(rest: &'a str, name: &str) -> &'a str {
    // ASCII lowercasing keeps byte offsets intact
    let lowered = rest.to_ascii_lowercase();
    let Some(close) = lowered.find(&format!("</{}", name)) else {
        return "";
    };
    match rest[close..].find('>') {
        Some(end) => &rest[close + end + 1..],
        None => "",
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for cleaning page HTML before it is cached.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pagesift::build::{decode_entities, strip_html};

fuzz_target!(|html: &str| {
    let text = strip_html(html);

    // Only whole characters come out, never more than went in
    assert!(text.chars().count() <= html.chars().count());

    // Markup-free input passes through apart from entity decoding
    if !html.contains('<') {
        assert_eq!(text, decode_entities(html));
    }
});

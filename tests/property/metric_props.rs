//! Laws the three metrics obey for any input.

use pagesift::{
    common_prefix, jaro_winkler, levenshtein, levenshtein_within, longest_common_substring,
};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short strings over a small alphabet so matches actually happen.
fn small_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcAB ]{0,12}").unwrap()
}

/// Words with diacritics and multi-byte characters.
fn unicode_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!["café", "naïve", "über", "tōkyō", "日本", "a", "e", " "]),
        0..5,
    )
    .prop_map(|parts| parts.concat())
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

// ============================================================================
// LEVENSHTEIN
// ============================================================================

proptest! {
    #[test]
    fn prop_levenshtein_symmetric(a in small_text(), b in small_text()) {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    #[test]
    fn prop_levenshtein_identity(a in unicode_text()) {
        prop_assert_eq!(levenshtein(&a, &a), 0);
    }

    #[test]
    fn prop_levenshtein_bounds(a in unicode_text(), b in unicode_text()) {
        let d = levenshtein(&a, &b);
        let (la, lb) = (char_len(&a), char_len(&b));
        prop_assert!(d >= la.abs_diff(lb));
        prop_assert!(d <= la.max(lb));
    }

    #[test]
    fn prop_levenshtein_empty_is_length(a in unicode_text()) {
        prop_assert_eq!(levenshtein(&a, ""), char_len(&a));
        prop_assert_eq!(levenshtein("", &a), char_len(&a));
    }

    #[test]
    fn prop_levenshtein_triangle(a in small_text(), b in small_text(), c in small_text()) {
        prop_assert!(levenshtein(&a, &c) <= levenshtein(&a, &b) + levenshtein(&b, &c));
    }

    #[test]
    fn prop_bounded_agrees_with_full(a in small_text(), b in small_text(), max in 0usize..14) {
        prop_assert_eq!(levenshtein_within(&a, &b, max), levenshtein(&a, &b) <= max);
    }
}

// ============================================================================
// LONGEST COMMON SUBSTRING
// ============================================================================

proptest! {
    #[test]
    fn prop_lcs_symmetric(a in small_text(), b in small_text()) {
        prop_assert_eq!(longest_common_substring(&a, &b), longest_common_substring(&b, &a));
    }

    #[test]
    fn prop_lcs_bounded_by_shorter(a in unicode_text(), b in unicode_text()) {
        prop_assert!(longest_common_substring(&a, &b) <= char_len(&a).min(char_len(&b)));
    }

    #[test]
    fn prop_lcs_identity(a in unicode_text()) {
        prop_assert_eq!(longest_common_substring(&a, &a), char_len(&a));
    }

    #[test]
    fn prop_lcs_of_contained_text(
        prefix in small_text(),
        middle in small_text(),
        suffix in small_text()
    ) {
        let haystack = format!("{}{}{}", prefix, middle, suffix);
        prop_assert_eq!(longest_common_substring(&haystack, &middle), char_len(&middle));
    }
}

// ============================================================================
// JARO-WINKLER
// ============================================================================

proptest! {
    #[test]
    fn prop_jaro_winkler_in_unit_range(a in unicode_text(), b in unicode_text()) {
        let s = jaro_winkler(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s), "{} out of range", s);
    }

    #[test]
    fn prop_jaro_winkler_two_decimals(a in small_text(), b in small_text()) {
        let s = jaro_winkler(&a, &b);
        prop_assert_eq!((s * 100.0).round() / 100.0, s);
    }

    #[test]
    fn prop_jaro_winkler_symmetric(a in small_text(), b in small_text()) {
        prop_assert_eq!(jaro_winkler(&a, &b), jaro_winkler(&b, &a));
    }

    #[test]
    fn prop_jaro_winkler_identity(a in "[a-zA-Z ]{1,12}") {
        prop_assert_eq!(jaro_winkler(&a, &a), 1.0);
    }

    #[test]
    fn prop_jaro_winkler_case_insensitive_matching(a in "[a-z]{1,10}") {
        // Same letters, different case: full Jaro, no prefix bonus needed
        prop_assert_eq!(jaro_winkler(&a, &a.to_uppercase()), 1.0);
    }

    #[test]
    fn prop_jaro_winkler_empty_is_zero(a in unicode_text()) {
        prop_assert_eq!(jaro_winkler(&a, ""), 0.0);
        prop_assert_eq!(jaro_winkler("", &a), 0.0);
    }
}

// ============================================================================
// COMMON PREFIX
// ============================================================================

proptest! {
    #[test]
    fn prop_common_prefix_is_prefix_of_both(a in unicode_text(), b in unicode_text()) {
        let prefix = common_prefix(&a, &b);
        prop_assert!(a.starts_with(prefix));
        prop_assert!(b.starts_with(prefix));
    }

    #[test]
    fn prop_common_prefix_is_longest(a in small_text(), b in small_text()) {
        let n = char_len(common_prefix(&a, &b));
        let next_a = a.chars().nth(n);
        let next_b = b.chars().nth(n);
        prop_assert!(next_a.is_none() || next_b.is_none() || next_a != next_b);
    }
}

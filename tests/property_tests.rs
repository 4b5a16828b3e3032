use matchcore::{
    compile_regex, contains, count, search_all_collected, search_all_with, search_pos, MatchConfig,
};
use proptest::prelude::*;

fn classical_cfg() -> MatchConfig {
    MatchConfig {
        simd_min_text_len: usize::MAX,
        ..MatchConfig::default()
    }
}

fn composed_cfg() -> MatchConfig {
    MatchConfig {
        simd_min_text_len: 0,
        ..MatchConfig::default()
    }
}

// Property: a pattern embedded in generated text is always found, and
// every reported offset actually points at an exact copy of the pattern.
proptest! {
    #[test]
    fn pattern_embedded_in_text_is_found(
        pattern in "[a-z]{1,10}",
        prefix in "[a-z ]{0,100}",
        suffix in "[a-z ]{0,100}",
    ) {
        let text = format!("{prefix}{pattern}{suffix}");
        let results = search_all_collected(text.as_bytes(), pattern.as_bytes());
        prop_assert!(!results.is_empty(), "pattern {pattern:?} should be found in {text:?}");

        for &pos in &results {
            prop_assert_eq!(&text.as_bytes()[pos..pos + pattern.len()], pattern.as_bytes());
        }
    }
}

// Property: contains(T, P) iff search_pos(T, P).is_some() (spec.md §8).
proptest! {
    #[test]
    fn contains_matches_search_pos_some(
        pattern in "[a-z]{1,10}",
        text in "[a-z ]{0,200}",
    ) {
        prop_assert_eq!(
            contains(text.as_bytes(), pattern.as_bytes()),
            search_pos(text.as_bytes(), pattern.as_bytes()).is_some()
        );
    }
}

// Property: count == length(all_matches_collected) for non-empty patterns.
proptest! {
    #[test]
    fn count_equals_collected_length(
        pattern in "[a-z]{1,6}",
        text in "[a-z ]{0,200}",
    ) {
        let collected = search_all_collected(text.as_bytes(), pattern.as_bytes());
        prop_assert_eq!(count(text.as_bytes(), pattern.as_bytes()), collected.len());
    }
}

// Property: every reported offset is in-bounds and exact, and the stream
// is strictly increasing (spec.md §8's ordering invariants).
proptest! {
    #[test]
    fn all_matches_are_inbounds_exact_and_increasing(
        pattern in "[a-z]{1,6}",
        text in "[a-z ]{0,300}",
    ) {
        let bytes = text.as_bytes();
        let pbytes = pattern.as_bytes();
        let matches = search_all_collected(bytes, pbytes);

        for &o in &matches {
            prop_assert!(o + pbytes.len() <= bytes.len());
            prop_assert_eq!(&bytes[o..o + pbytes.len()], pbytes);
        }
        for w in matches.windows(2) {
            prop_assert!(w[0] < w[1]);
        }
    }
}

// Property: if any match exists, search_pos returns the first one.
proptest! {
    #[test]
    fn first_match_is_first_of_all_matches(
        pattern in "[a-z]{1,6}",
        text in "[a-z ]{0,300}",
    ) {
        let matches = search_all_collected(text.as_bytes(), pattern.as_bytes());
        let first = search_pos(text.as_bytes(), pattern.as_bytes());
        prop_assert_eq!(first, matches.first().copied());
    }
}

// Property: the classical (below-threshold) and SIMD-composed
// (above-threshold) paths must agree on every input, since both are
// exposed as correct implementations of the same KMP contract.
proptest! {
    #[test]
    fn classical_and_composed_paths_agree(
        pattern in "[a-z]{1,8}",
        text in "[a-z ]{0,500}",
    ) {
        let classical: Vec<usize> =
            search_all_with(text.as_bytes(), pattern.as_bytes(), classical_cfg()).collect();
        let composed: Vec<usize> =
            search_all_with(text.as_bytes(), pattern.as_bytes(), composed_cfg()).collect();
        prop_assert_eq!(classical, composed);
    }
}

// Property: a pattern absent from text is never found.
proptest! {
    #[test]
    fn absent_pattern_is_never_found(text in "[a-y ]{10,100}") {
        // 'z' never appears in the text's alphabet, so "zzz" cannot occur.
        prop_assert!(search_pos(text.as_bytes(), b"zzz").is_none());
    }
}

// Property: overlapping occurrences are all reported (e.g. "aa" in "aaaa").
proptest! {
    #[test]
    fn overlapping_occurrences_are_all_reported(base in "[a-c]{1,4}", repeats in 2usize..8) {
        let pattern = format!("{base}{base}");
        let text = base.repeat(repeats);
        if text.len() >= pattern.len() {
            let expected = text.len() - pattern.len() + 1;
            // Not every offset necessarily matches (depends on base's own
            // self-overlap), but none may exceed the naive upper bound.
            let matches = search_all_collected(text.as_bytes(), pattern.as_bytes());
            prop_assert!(matches.len() <= expected);
        }
    }
}

// --- Regex properties -------------------------------------------------

// Property: a regex compiled from a plain literal (escaped so every byte
// is literal) matches iff the input is exactly that literal.
proptest! {
    #[test]
    fn literal_regex_matches_only_exact_text(word in "[a-z]{1,10}") {
        let re = compile_regex(&word).unwrap();
        prop_assert!(re.matches(word.as_bytes()));
        let longer = format!("{word}x");
        prop_assert!(!re.matches(longer.as_bytes()));
    }
}

// Property: `[a-z]+` matches iff the text is non-empty and entirely
// lowercase ASCII letters.
proptest! {
    #[test]
    fn letters_plus_matches_all_lowercase_only(word in "[a-z]{1,20}") {
        let re = compile_regex("[a-z]+").unwrap();
        prop_assert!(re.matches(word.as_bytes()));
    }
}

proptest! {
    #[test]
    fn letters_plus_rejects_any_digit(word in "[a-z]{1,10}", digit in 0u8..10) {
        let re = compile_regex("[a-z]+").unwrap();
        let with_digit = format!("{word}{digit}");
        prop_assert!(!re.matches(with_digit.as_bytes()));
    }
}

// Property: `search` on `[0-9]+` finds the first digit run, and the
// matched region is entirely digits.
proptest! {
    #[test]
    fn digit_search_finds_a_digit_run(
        prefix in "[a-z ]{0,20}",
        digits in "[0-9]{1,8}",
        suffix in "[a-z ]{0,20}",
    ) {
        let text = format!("{prefix}{digits}{suffix}");
        let re = compile_regex("[0-9]+").unwrap();
        let pos = re.search(text.as_bytes());
        prop_assert!(pos.is_some());
        let pos = pos.unwrap();
        prop_assert!(text.as_bytes()[pos].is_ascii_digit());
    }
}

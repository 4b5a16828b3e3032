//! End-to-end literal-search scenarios against the public crate API only
//! (no internal module access), exercising the S1–S6 table and the
//! compiled-pattern entry points together.

use matchcore::{compile_const, compile_literal, contains, count, search_all_collected, search_pos};

#[test]
fn s1_abracadabra() {
    assert_eq!(search_all_collected(b"abracadabra", b"abra"), vec![0, 7]);
}

#[test]
fn s2_overlapping_aa() {
    assert_eq!(search_all_collected(b"aaaa", b"aa"), vec![0, 1, 2]);
    assert_eq!(count(b"aaaa", b"aa"), 3);
}

#[test]
fn s3_classic_kmp_textbook_case() {
    let text = b"ABABDABACDABABCABAB";
    assert_eq!(search_pos(text, b"ABABCABAB"), Some(10));
}

#[test]
fn s4_absent_pattern() {
    assert_eq!(search_pos(b"hello world", b"xyz"), None);
    assert_eq!(count(b"hello world", b"xyz"), 0);
}

#[test]
fn s5_needle_in_long_haystack() {
    let mut text = vec![b'a'; 100_000];
    text[99_990..99_996].copy_from_slice(b"needle");
    assert_eq!(search_pos(&text, b"needle"), Some(99_990));
}

#[test]
fn s6_three_occurrences() {
    assert_eq!(
        search_all_collected(b"the cat the dog the bird", b"the"),
        vec![0, 8, 16]
    );
}

#[test]
fn compiled_pattern_matches_free_function_api() {
    let pattern = compile_literal("abra");
    let text = b"abracadabra";
    assert_eq!(pattern.search_pos(text), search_pos(text, b"abra"));
    assert_eq!(
        pattern.search_all(text).collect::<Vec<_>>(),
        search_all_collected(text, b"abra")
    );
}

#[test]
fn compile_time_pattern_matches_runtime_pattern() {
    const NEEDLE: matchcore::ConstPattern = compile_const!(b"needle");
    let mut text = vec![b'a'; 100_000];
    text[99_990..99_996].copy_from_slice(b"needle");
    assert_eq!(NEEDLE.search_pos(&text), Some(99_990));
}

#[test]
fn empty_pattern_semantics_hold_across_the_public_api() {
    assert!(contains(b"anything", b""));
    assert_eq!(search_pos(b"anything", b""), Some(0));
    assert_eq!(count(b"anything", b""), 0);
}

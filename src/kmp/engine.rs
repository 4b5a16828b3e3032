//! The KMP search engine: first-byte SIMD scan, failure-function-verified
//! candidates, failure-driven skips.
//!
//! Dispatch mirrors rfgrep's `SimdSearchEngine::new` chain (widest
//! available backend first, scalar fallback last), but the *algorithm*
//! being dispatched is the composed first-byte-scan-then-verify KMP loop
//! of spec.md §4.4, not rfgrep's independent per-backend whole-pattern
//! scan. Below the configured length threshold, a classical two-pointer
//! KMP loop is used directly instead of paying for the first-byte-scan
//! machinery at all — both paths are required to (and, per the kernel
//! equivalence tests in `simd::tests` and `tests/literal_tests.rs`, do)
//! produce bitwise-identical match sequences.

use crate::config::MatchConfig;
use crate::cpu_feature::{self, SimdLevel};
use crate::simd;

pub fn effective_level(cfg: &MatchConfig) -> SimdLevel {
    cfg.simd_override.unwrap_or_else(cpu_feature::simd_level)
}

/// Find the first occurrence of `pattern` in `text`, or `None`.
///
/// `failure` must be the standard failure table for `pattern` (see
/// [`crate::kmp::failure::build`]); behavior is unspecified if it isn't.
pub fn first_match(text: &[u8], pattern: &[u8], failure: &[usize], cfg: &MatchConfig) -> Option<usize> {
    // The empty pattern is a prefix of every string (spec.md §4.5), but
    // `all_matches` yields nothing for it (spec.md §9's `count` convention),
    // so this can't simply delegate to `all_matches(..).next()`.
    if pattern.is_empty() {
        return Some(0);
    }
    all_matches(text, pattern, failure, cfg).next()
}

/// Iterate every (possibly overlapping) occurrence of `pattern` in `text`,
/// in strictly increasing order.
pub fn all_matches<'a>(
    text: &'a [u8],
    pattern: &'a [u8],
    failure: &'a [usize],
    cfg: &MatchConfig,
) -> AllMatches<'a> {
    let m = pattern.len();
    let n = text.len();

    if m == 0 || n < m {
        return AllMatches {
            inner: Inner::Empty,
        };
    }

    if n < cfg.simd_min_text_len {
        AllMatches {
            inner: Inner::Classical {
                text,
                pattern,
                failure,
                i: 0,
                j: 0,
            },
        }
    } else {
        AllMatches {
            inner: Inner::Composed {
                text,
                pattern,
                failure,
                level: effective_level(cfg),
                p: 0,
                limit: n - m + 1,
            },
        }
    }
}

/// Lazy, forward iterator over ascending match offsets.
pub struct AllMatches<'a> {
    inner: Inner<'a>,
}

enum Inner<'a> {
    Empty,
    Classical {
        text: &'a [u8],
        pattern: &'a [u8],
        failure: &'a [usize],
        i: usize,
        j: usize,
    },
    Composed {
        text: &'a [u8],
        pattern: &'a [u8],
        failure: &'a [usize],
        level: SimdLevel,
        p: usize,
        limit: usize,
    },
}

impl<'a> Iterator for AllMatches<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match &mut self.inner {
            Inner::Empty => None,

            Inner::Classical {
                text,
                pattern,
                failure,
                i,
                j,
            } => {
                let n = text.len();
                let m = pattern.len();
                while *i < n {
                    if text[*i] == pattern[*j] {
                        *i += 1;
                        *j += 1;
                        if *j == m {
                            let pos = *i - m;
                            *j = failure[*j - 1];
                            return Some(pos);
                        }
                    } else if *j > 0 {
                        *j = failure[*j - 1];
                    } else {
                        *i += 1;
                    }
                }
                None
            }

            Inner::Composed {
                text,
                pattern,
                failure,
                level,
                p,
                limit,
            } => {
                let m = pattern.len();
                let first = pattern[0];
                loop {
                    if *p >= *limit {
                        return None;
                    }
                    let window = &text[*p..*limit];
                    let offset = simd::find_first_eq(window, first, *level)?;
                    let c = *p + offset;
                    let k = simd::prefix_eq_len(&text[c..], pattern, m, *level);
                    if k == m {
                        *p = c + 1;
                        return Some(c);
                    }
                    let skip = if k > 0 { (k - failure[k - 1]).max(1) } else { 1 };
                    *p = c + skip;
                }
            }
        }
    }
}

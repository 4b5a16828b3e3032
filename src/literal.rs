//! Public literal-search surface: the free functions and
//! [`LiteralPattern`]-based entry points listed in spec.md §4.5 and §6.

use crate::config::MatchConfig;
use crate::kmp::{engine, ConstPattern, LiteralPattern};

/// First occurrence of `pattern` in `text`, or `None`.
///
/// The empty pattern matches at offset `0` regardless of `text`, per
/// spec.md §4.5: the empty string is a prefix of every string.
pub fn search_pos(text: &[u8], pattern: &[u8]) -> Option<usize> {
    search_pos_with(text, pattern, &MatchConfig::default())
}

/// Same as [`search_pos`], but against an explicit [`MatchConfig`] instead
/// of the default thresholds.
pub fn search_pos_with(text: &[u8], pattern: &[u8], cfg: &MatchConfig) -> Option<usize> {
    let failure = crate::kmp::failure::build(pattern);
    engine::first_match(text, pattern, &failure, cfg)
}

/// Alias for [`search_pos`], matching the `search(text, pattern)` name in
/// spec.md §6's operation table.
pub fn search(text: &[u8], pattern: &[u8]) -> Option<usize> {
    search_pos(text, pattern)
}

/// Lazily iterate every (possibly overlapping) occurrence of `pattern` in
/// `text`, ascending. The empty pattern yields no matches (see
/// [`count`]'s documentation for why).
pub fn search_all<'a>(text: &'a [u8], pattern: &'a [u8]) -> SearchAll<'a> {
    search_all_with(text, pattern, MatchConfig::default())
}

/// Same as [`search_all`], but against an explicit [`MatchConfig`].
pub fn search_all_with<'a>(text: &'a [u8], pattern: &'a [u8], cfg: MatchConfig) -> SearchAll<'a> {
    let failure = crate::kmp::failure::build(pattern);
    let m = pattern.len();
    let n = text.len();

    let mode = if m == 0 || n < m {
        Mode::Done
    } else if n < cfg.simd_min_text_len {
        Mode::Classical { i: 0, j: 0 }
    } else {
        Mode::Composed {
            level: engine::effective_level(&cfg),
            p: 0,
            limit: n - m + 1,
        }
    };

    SearchAll {
        text,
        pattern,
        failure,
        mode,
    }
}

/// A lazy, ascending stream of match offsets.
///
/// Holds its own owned failure table (built once, up front) rather than
/// borrowing one, so it can be constructed directly from raw `text`/
/// `pattern` slices without requiring the caller to pre-compile a
/// [`LiteralPattern`]. Mirrors [`engine::AllMatches`]'s two-mode dispatch
/// directly (instead of wrapping it) since the borrowed `failure` table
/// would otherwise have to outlive this struct itself.
pub struct SearchAll<'a> {
    text: &'a [u8],
    pattern: &'a [u8],
    failure: Vec<usize>,
    mode: Mode,
}

enum Mode {
    Done,
    Classical {
        i: usize,
        j: usize,
    },
    Composed {
        level: crate::cpu_feature::SimdLevel,
        p: usize,
        limit: usize,
    },
}

impl<'a> Iterator for SearchAll<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let text = self.text;
        let pattern = self.pattern;
        let failure = &self.failure;
        let m = pattern.len();

        match &mut self.mode {
            Mode::Done => None,

            Mode::Classical { i, j } => {
                let n = text.len();
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
                self.mode = Mode::Done;
                None
            }

            Mode::Composed { level, p, limit } => {
                let first = pattern[0];
                loop {
                    if *p >= *limit {
                        self.mode = Mode::Done;
                        return None;
                    }
                    let window = &text[*p..*limit];
                    let offset = match crate::simd::find_first_eq(window, first, *level) {
                        Some(o) => o,
                        None => {
                            self.mode = Mode::Done;
                            return None;
                        }
                    };
                    let c = *p + offset;
                    let k = crate::simd::prefix_eq_len(&text[c..], pattern, m, *level);
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

/// Eagerly collect every match offset into a `Vec`, in ascending order.
pub fn search_all_collected(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    search_all(text, pattern).collect()
}

/// Number of overlapping occurrences of `pattern` in `text`.
///
/// By convention (spec.md §9), the empty pattern yields `0`: `count` is
/// defined as the length of [`search_all_collected`], and the empty
/// pattern's match stream is empty.
pub fn count(text: &[u8], pattern: &[u8]) -> usize {
    search_all(text, pattern).count()
}

/// Whether `pattern` occurs anywhere in `text`.
pub fn contains(text: &[u8], pattern: &[u8]) -> bool {
    search_pos(text, pattern).is_some()
}

/// Compile a pattern once for reuse across many searches.
pub fn compile_literal(pattern: impl AsRef<[u8]>) -> LiteralPattern {
    LiteralPattern::new(pattern)
}

impl LiteralPattern {
    /// First occurrence of this pattern in `text`.
    pub fn search_pos(&self, text: &[u8]) -> Option<usize> {
        self.search_pos_with(text, &MatchConfig::default())
    }

    /// [`LiteralPattern::search_pos`] against an explicit [`MatchConfig`].
    pub fn search_pos_with(&self, text: &[u8], cfg: &MatchConfig) -> Option<usize> {
        engine::first_match(text, self.as_bytes(), self.failure_table(), cfg)
    }

    /// Every (possibly overlapping) occurrence of this pattern in `text`.
    pub fn search_all<'a>(&'a self, text: &'a [u8]) -> engine::AllMatches<'a> {
        engine::all_matches(text, self.as_bytes(), self.failure_table(), &DEFAULT_CFG)
    }

    /// Number of overlapping occurrences of this pattern in `text`.
    pub fn count(&self, text: &[u8]) -> usize {
        self.search_all(text).count()
    }

    /// Whether this pattern occurs anywhere in `text`.
    pub fn contains(&self, text: &[u8]) -> bool {
        self.search_pos(text).is_some()
    }
}

/// A static default config so [`LiteralPattern`] methods that don't take a
/// config don't need to allocate one per call.
static DEFAULT_CFG: MatchConfig = MatchConfig {
    simd_override: None,
    simd_min_text_len: crate::config::DEFAULT_SIMD_MIN_TEXT_LEN,
    dfa_state_cap: crate::config::DEFAULT_DFA_STATE_CAP,
};

impl ConstPattern {
    /// First occurrence of this compile-time pattern in `text`.
    pub fn search_pos(&self, text: &[u8]) -> Option<usize> {
        engine::first_match(text, self.bytes, self.failure, &DEFAULT_CFG)
    }

    /// Every (possibly overlapping) occurrence of this pattern in `text`.
    pub fn search_all<'a>(&self, text: &'a [u8]) -> engine::AllMatches<'a> {
        engine::all_matches(text, self.bytes, self.failure, &DEFAULT_CFG)
    }
}

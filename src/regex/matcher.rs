//! The DFA matcher: anchored `matches` and leftmost-occurrence `search`,
//! per spec.md §4.8.

use crate::regex::dfa::Dfa;

/// Whole-input anchored match: every byte of `text` must step the DFA
/// without hitting the dead sentinel or a non-ASCII byte, ending in an
/// accepting state.
pub fn matches(dfa: &Dfa, text: &[u8]) -> bool {
    let mut state = Dfa::START;
    for &b in text {
        match dfa.step(state, b) {
            Some(next) => state = next,
            None => return false,
        }
    }
    dfa.is_accepting(state)
}

/// Leftmost occurrence: the smallest starting offset `s` such that
/// scanning from `s` reaches an accepting state. Ties at a given `s` are
/// broken by the first accepting state reached while scanning (the
/// shortest accepting prefix at that start), not the longest.
pub fn search(dfa: &Dfa, text: &[u8]) -> Option<usize> {
    for s in 0..=text.len() {
        if dfa.is_accepting(Dfa::START) {
            return Some(s);
        }
        let mut state = Dfa::START;
        for &b in &text[s..] {
            match dfa.step(state, b) {
                Some(next) => {
                    state = next;
                    if dfa.is_accepting(state) {
                        return Some(s);
                    }
                }
                None => break,
            }
        }
    }
    None
}

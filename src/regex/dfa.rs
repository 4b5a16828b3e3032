//! NFA→DFA compiler: classical subset construction over a 128-code-point
//! byte alphabet, per spec.md §4.7.

use std::collections::{HashMap, VecDeque};

use crate::error::{MatchError, Result};
use crate::regex::nfa::Nfa;

/// Sentinel transition target meaning "no such transition" (the implicit
/// dead state). Distinct from any real state index.
const DEAD: u32 = u32::MAX;

/// A compiled DFA: one dense `[u32; 128]` transition row per state, plus
/// an `is_accept` flag per state. Chosen over a sparse (e.g. `HashMap`)
/// transition table because spec.md defines a DFA state as "a row of 128
/// transition targets" — a dense array is the direct representation, and
/// it matches the byte-indexed style the SIMD kernels already use
/// elsewhere in this crate.
#[derive(Debug, Clone)]
pub struct Dfa {
    transitions: Vec<[u32; 128]>,
    accepting: Vec<bool>,
}

impl Dfa {
    /// Run classical subset construction over `nfa`, failing if the
    /// result would exceed `state_cap` states. `source` is carried only
    /// for the error message.
    pub fn compile(nfa: &Nfa, source: &str, state_cap: usize) -> Result<Self> {
        let mut states: Vec<[u32; 128]> = Vec::new();
        let mut accepting: Vec<bool> = Vec::new();
        let mut index_of: HashMap<Vec<usize>, usize> = HashMap::new();

        let start_set = nfa.epsilon_closure(&[nfa.start]);
        index_of.insert(start_set.clone(), 0);
        states.push([DEAD; 128]);
        accepting.push(nfa.accepts(&start_set));

        let mut worklist: VecDeque<(usize, Vec<usize>)> = VecDeque::new();
        worklist.push_back((0, start_set));

        let too_complex = || MatchError::PatternTooComplex {
            source: source.to_string(),
            state_limit: state_cap,
        };

        while let Some((idx, subset)) = worklist.pop_front() {
            for b in 0u8..128 {
                let image = nfa.step(&subset, b);
                if image.is_empty() {
                    continue; // row already DEAD by default
                }
                let closure = nfa.epsilon_closure(&image);
                let target = match index_of.get(&closure) {
                    Some(&existing) => existing,
                    None => {
                        if states.len() >= state_cap {
                            return Err(too_complex());
                        }
                        let new_idx = states.len();
                        index_of.insert(closure.clone(), new_idx);
                        states.push([DEAD; 128]);
                        accepting.push(nfa.accepts(&closure));
                        worklist.push_back((new_idx, closure));
                        new_idx
                    }
                };
                states[idx][b as usize] = target as u32;
            }
        }

        Ok(Dfa {
            transitions: states,
            accepting,
        })
    }

    /// Number of DFA states.
    pub fn state_count(&self) -> usize {
        self.transitions.len()
    }

    /// True iff construction never ran (no states at all).
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn is_accepting(&self, state: usize) -> bool {
        self.accepting[state]
    }

    /// Step `state` on byte `b`, or `None` for the dead sentinel or a
    /// non-ASCII byte (spec.md §9: bytes `>= 128` always fail the current
    /// attempt).
    pub fn step(&self, state: usize, b: u8) -> Option<usize> {
        if b >= 128 {
            return None;
        }
        let target = self.transitions[state][b as usize];
        if target == DEAD {
            None
        } else {
            Some(target as usize)
        }
    }

    pub const START: usize = 0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regex::{nfa::Nfa, parser};

    fn compile(source: &str) -> Dfa {
        let ast = parser::parse(source).unwrap();
        let nfa = Nfa::from_ast(&ast);
        Dfa::compile(&nfa, source, 10_000).unwrap()
    }

    #[test]
    fn literal_hello_accepts_only_exact_bytes() {
        let dfa = compile("hello");
        let mut state = Dfa::START;
        for &b in b"hello" {
            state = dfa.step(state, b).expect("should stay alive");
        }
        assert!(dfa.is_accepting(state));
    }

    #[test]
    fn dead_transition_on_mismatch() {
        let dfa = compile("hello");
        assert!(dfa.step(Dfa::START, b'H').is_none());
    }

    #[test]
    fn non_ascii_byte_always_dead() {
        let dfa = compile("[a-z]+");
        let s1 = dfa.step(Dfa::START, b'a').unwrap();
        assert!(dfa.step(s1, 200).is_none());
    }

    #[test]
    fn determinism_same_source_same_shape() {
        let a = compile("[a-z]+@[a-z]+\\.[a-z]+");
        let b = compile("[a-z]+@[a-z]+\\.[a-z]+");
        assert_eq!(a.state_count(), b.state_count());
        for s in 0..a.state_count() {
            assert_eq!(a.is_accepting(s), b.is_accepting(s));
            for byte in 0u8..128 {
                assert_eq!(a.step(s, byte), b.step(s, byte));
            }
        }
    }

    #[test]
    fn state_cap_exceeded_is_an_error() {
        let ast = parser::parse("[a-z]+@[a-z]+\\.[a-z]+").unwrap();
        let nfa = Nfa::from_ast(&ast);
        let err = Dfa::compile(&nfa, "src", 1).unwrap_err();
        assert!(matches!(err, MatchError::PatternTooComplex { .. }));
    }

    #[test]
    fn worst_case_five_stars_stays_small_and_terminates() {
        // a*a*a*a*a*b against a long run of 'a's must never match and
        // must compile to a bounded number of states.
        let dfa = compile("a*a*a*a*a*b");
        let mut state = Dfa::START;
        let mut alive = true;
        for _ in 0..1000 {
            match dfa.step(state, b'a') {
                Some(next) => state = next,
                None => {
                    alive = false;
                    break;
                }
            }
        }
        if alive {
            assert!(!dfa.is_accepting(state));
        }
        assert!(dfa.state_count() < 50);
    }
}

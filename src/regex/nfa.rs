//! Thompson construction: lowers an [`Ast`] into a flat, index-addressed
//! NFA, following spec.md §4.6's fragment table exactly.

use crate::regex::ast::Ast;
use crate::regex::charclass::CharClass;

/// Marks a transition slot as not-yet-patched. Distinct from state index
/// `0` so "unpatched" and "transitions to state 0" are never confused
/// (spec.md §9).
pub const NO_TRANSITION: usize = usize::MAX;

/// One NFA state, addressed by its index into [`Nfa::states`]. Cyclic
/// graphs (induced by `*`/`+`) are ordinary index stores into this flat
/// array rather than pointer-linked nodes (spec.md §9).
#[derive(Debug, Clone, PartialEq)]
pub enum NfaState {
    /// Up to two outgoing epsilon transitions.
    Epsilon { next1: usize, next2: usize },
    /// Consumes exactly one matching byte.
    ByteMatch { byte: u8, next1: usize },
    /// Consumes one byte accepted by `class`.
    ClassMatch { class: CharClass, next1: usize },
    /// Terminal: reaching this state means the regex matched.
    Accept,
}

/// A dangling NFA fragment mid-construction: `start` is its entry state,
/// `end` is the state whose first empty slot the next construct should
/// patch.
#[derive(Debug, Clone, Copy)]
struct Fragment {
    start: usize,
    end: usize,
}

/// A complete Thompson NFA: a flat state array plus the start index.
#[derive(Debug, Clone)]
pub struct Nfa {
    pub states: Vec<NfaState>,
    pub start: usize,
}

impl Nfa {
    /// Build an NFA from a parsed [`Ast`], appending a single `Accept`
    /// state after the top-level fragment (spec.md §4.6: "An accept state
    /// is appended after parsing; the top-level fragment's end is patched
    /// to it.").
    pub fn from_ast(ast: &Ast) -> Self {
        let mut builder = Builder { states: Vec::new() };
        let frag = builder.build(ast);
        let accept = builder.push(NfaState::Accept);
        builder.patch(frag.end, accept);
        Nfa {
            states: builder.states,
            start: frag.start,
        }
    }

    /// Epsilon closure of `seed`: every state reachable from `seed` by
    /// zero or more epsilon transitions, including `seed` itself.
    /// Work-list traversal, idempotent and monotonic (spec.md §4.7).
    pub fn epsilon_closure(&self, seed: &[usize]) -> Vec<usize> {
        let mut seen = std::collections::BTreeSet::new();
        let mut worklist: Vec<usize> = seed.to_vec();
        for &s in seed {
            seen.insert(s);
        }
        while let Some(s) = worklist.pop() {
            if let NfaState::Epsilon { next1, next2 } = self.states[s] {
                for next in [next1, next2] {
                    if next != NO_TRANSITION && seen.insert(next) {
                        worklist.push(next);
                    }
                }
            }
        }
        seen.into_iter().collect()
    }

    /// Whether `subset` contains an `Accept` state.
    pub fn accepts(&self, subset: &[usize]) -> bool {
        subset.iter().any(|&s| matches!(self.states[s], NfaState::Accept))
    }

    /// The single successor of a matching state (`ByteMatch`/`ClassMatch`)
    /// in `subset` that accepts byte `b`, unioned across the whole subset.
    pub fn step(&self, subset: &[usize], b: u8) -> Vec<usize> {
        let mut next = Vec::new();
        for &s in subset {
            match &self.states[s] {
                NfaState::ByteMatch { byte, next1 } if *byte == b => next.push(*next1),
                NfaState::ClassMatch { class, next1 } if class.contains(b) => next.push(*next1),
                _ => {}
            }
        }
        next
    }
}

struct Builder {
    states: Vec<NfaState>,
}

impl Builder {
    fn push(&mut self, state: NfaState) -> usize {
        self.states.push(state);
        self.states.len() - 1
    }

    /// Write `target` into the first empty (`NO_TRANSITION`) slot of the
    /// state at `idx`. For an `Epsilon` state that is `next1` then
    /// `next2`; for a match state only `next1`. Never overwrites a filled
    /// slot (spec.md §4.6's patch discipline).
    fn patch(&mut self, idx: usize, target: usize) {
        match &mut self.states[idx] {
            NfaState::Epsilon { next1, next2 } => {
                if *next1 == NO_TRANSITION {
                    *next1 = target;
                } else if *next2 == NO_TRANSITION {
                    *next2 = target;
                } else {
                    unreachable!("patch: epsilon state has no empty slot");
                }
            }
            NfaState::ByteMatch { next1, .. } | NfaState::ClassMatch { next1, .. } => {
                if *next1 == NO_TRANSITION {
                    *next1 = target;
                } else {
                    unreachable!("patch: match state has no empty slot");
                }
            }
            NfaState::Accept => unreachable!("patch: accept state has no outgoing slots"),
        }
    }

    fn build(&mut self, ast: &Ast) -> Fragment {
        match ast {
            Ast::Byte(b) => {
                let idx = self.push(NfaState::ByteMatch {
                    byte: *b,
                    next1: NO_TRANSITION,
                });
                Fragment { start: idx, end: idx }
            }

            Ast::Class(class) => {
                let idx = self.push(NfaState::ClassMatch {
                    class: *class,
                    next1: NO_TRANSITION,
                });
                Fragment { start: idx, end: idx }
            }

            Ast::Anchor | Ast::Empty => {
                let idx = self.push(NfaState::Epsilon {
                    next1: NO_TRANSITION,
                    next2: NO_TRANSITION,
                });
                Fragment { start: idx, end: idx }
            }

            Ast::Concat(parts) => {
                let mut iter = parts.iter();
                let mut frag = self.build(iter.next().expect("Concat has at least one part"));
                for part in iter {
                    let next = self.build(part);
                    self.patch(frag.end, next.start);
                    frag.end = next.end;
                }
                frag
            }

            Ast::Alternation(branches) => {
                let mut iter = branches.iter();
                let mut frag = self.build(iter.next().expect("Alternation has at least one branch"));
                for branch in iter {
                    let next = self.build(branch);
                    frag = self.alternate(frag, next);
                }
                frag
            }

            Ast::Star(inner) => {
                let body = self.build(inner);
                let split = self.push(NfaState::Epsilon {
                    next1: NO_TRANSITION,
                    next2: NO_TRANSITION,
                });
                self.patch(split, body.start); // split.next1 = body entry
                self.patch(body.end, split); // loop back
                Fragment { start: split, end: split } // split.next2 is the exit
            }

            Ast::Plus(inner) => {
                let body = self.build(inner);
                let split = self.push(NfaState::Epsilon {
                    next1: NO_TRANSITION,
                    next2: NO_TRANSITION,
                });
                self.patch(split, body.start); // split.next1 = body entry (loop)
                self.patch(body.end, split); // must match body once first
                Fragment { start: body.start, end: split } // split.next2 is the exit
            }

            Ast::Optional(inner) => {
                let body = self.build(inner);
                let join = self.push(NfaState::Epsilon {
                    next1: NO_TRANSITION,
                    next2: NO_TRANSITION,
                });
                let split = self.push(NfaState::Epsilon {
                    next1: NO_TRANSITION,
                    next2: NO_TRANSITION,
                });
                self.patch(split, body.start); // split.next1 = body entry
                self.patch(split, join); // split.next2 = skip path
                self.patch(body.end, join);
                Fragment { start: split, end: join }
            }
        }
    }

    /// `A | B`: new split epsilon, new join epsilon, both ends patched to
    /// the join (spec.md §4.6's alternation row), folded pairwise across
    /// an arbitrary number of branches.
    fn alternate(&mut self, a: Fragment, b: Fragment) -> Fragment {
        let join = self.push(NfaState::Epsilon {
            next1: NO_TRANSITION,
            next2: NO_TRANSITION,
        });
        self.patch(a.end, join);
        self.patch(b.end, join);
        let split = self.push(NfaState::Epsilon {
            next1: NO_TRANSITION,
            next2: NO_TRANSITION,
        });
        self.patch(split, a.start);
        self.patch(split, b.start);
        Fragment { start: split, end: join }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regex::parser;

    fn nfa_of(source: &str) -> Nfa {
        Nfa::from_ast(&parser::parse(source).unwrap())
    }

    #[test]
    fn literal_byte_has_no_dangling_slots() {
        let nfa = nfa_of("a");
        // start == the ByteMatch state, patched to Accept.
        match &nfa.states[nfa.start] {
            NfaState::ByteMatch { byte, next1 } => {
                assert_eq!(*byte, b'a');
                assert_ne!(*next1, NO_TRANSITION);
                assert!(matches!(nfa.states[*next1], NfaState::Accept));
            }
            other => panic!("expected ByteMatch, got {other:?}"),
        }
    }

    #[test]
    fn star_then_literal_patches_next2_not_next1() {
        // spec.md §9: "a*b" must patch the *-split's next2 (the exit
        // slot), not some other slot, to b's start.
        let nfa = nfa_of("a*b");
        let split_idx = nfa.start;
        match &nfa.states[split_idx] {
            NfaState::Epsilon { next1, next2 } => {
                // next1 loops into the body (the 'a' ByteMatch).
                assert!(matches!(nfa.states[*next1], NfaState::ByteMatch { byte: b'a', .. }));
                // next2 is the exit, must lead (via the 'b' ByteMatch) to accept.
                assert!(matches!(nfa.states[*next2], NfaState::ByteMatch { byte: b'b', .. }));
            }
            other => panic!("expected Epsilon split, got {other:?}"),
        }
    }

    #[test]
    fn plus_requires_body_once_before_looping() {
        let nfa = nfa_of("a+");
        // start must be the body's ByteMatch, not the split.
        assert!(matches!(nfa.states[nfa.start], NfaState::ByteMatch { byte: b'a', .. }));
    }

    #[test]
    fn optional_has_skip_path_to_join() {
        let nfa = nfa_of("a?b");
        let split_idx = nfa.start;
        match &nfa.states[split_idx] {
            NfaState::Epsilon { next1, next2 } => {
                assert!(matches!(nfa.states[*next1], NfaState::ByteMatch { byte: b'a', .. }));
                // next2 skips straight to 'b'.
                assert!(matches!(nfa.states[*next2], NfaState::ByteMatch { byte: b'b', .. }));
            }
            other => panic!("expected Epsilon split, got {other:?}"),
        }
    }

    #[test]
    fn epsilon_closure_follows_chained_epsilons() {
        let nfa = nfa_of("a|b|c");
        let closure = nfa.epsilon_closure(&[nfa.start]);
        // All three ByteMatch states must be epsilon-reachable from start.
        let byte_states: Vec<u8> = closure
            .iter()
            .filter_map(|&i| match nfa.states[i] {
                NfaState::ByteMatch { byte, .. } => Some(byte),
                _ => None,
            })
            .collect();
        assert!(byte_states.contains(&b'a'));
        assert!(byte_states.contains(&b'b'));
        assert!(byte_states.contains(&b'c'));
    }

    #[test]
    fn accept_reachable_for_empty_regex() {
        let nfa = nfa_of("");
        let closure = nfa.epsilon_closure(&[nfa.start]);
        assert!(nfa.accepts(&closure));
    }
}

//! The DFA regex core: a restricted grammar (spec.md §4.6) compiled via
//! Thompson construction (`nfa`) and subset construction (`dfa`) into a
//! deterministic automaton (`matcher`), exposed here as [`CompiledRegex`].

pub mod ast;
pub mod charclass;
pub mod dfa;
pub mod matcher;
pub mod nfa;
pub mod parser;

use std::sync::Arc;

use crate::config::MatchConfig;
use crate::error::Result;
use dfa::Dfa;

/// A compiled regular expression: a shared-ownership handle to a
/// read-only DFA plus the original source string.
///
/// Cloning is cheap (an `Arc` bump). Concurrent readers may call
/// [`CompiledRegex::matches`]/[`CompiledRegex::search`] on the same
/// instance from any number of threads with no external synchronization
/// — the DFA is immutable after construction and holds no interior
/// mutability (spec.md §5).
#[derive(Debug, Clone)]
pub struct CompiledRegex {
    dfa: Arc<Dfa>,
    source: String,
}

/// Compile `source` into a [`CompiledRegex`] using [`MatchConfig::default`]'s
/// DFA state cap. See [`compile_regex_with`] to override it.
pub fn compile_regex(source: &str) -> Result<CompiledRegex> {
    compile_regex_with(source, &MatchConfig::default())
}

/// Compile `source` into a [`CompiledRegex`], using `cfg.dfa_state_cap` as
/// the subset-construction ceiling.
pub fn compile_regex_with(source: &str, cfg: &MatchConfig) -> Result<CompiledRegex> {
    let ast = parser::parse(source)?;
    let nfa = nfa::Nfa::from_ast(&ast);
    let dfa = Dfa::compile(&nfa, source, cfg.dfa_state_cap)?;
    log::debug!(
        "compiled regex {:?} into a {}-state DFA",
        source,
        dfa.state_count()
    );
    Ok(CompiledRegex {
        dfa: Arc::new(dfa),
        source: source.to_string(),
    })
}

impl CompiledRegex {
    /// Whole-input anchored match.
    pub fn matches(&self, text: &[u8]) -> bool {
        matcher::matches(&self.dfa, text)
    }

    /// Leftmost occurrence, or `None`.
    pub fn search(&self, text: &[u8]) -> Option<usize> {
        matcher::search(&self.dfa, text)
    }

    /// Number of DFA states; a diagnostic, not a correctness signal.
    pub fn state_count(&self) -> usize {
        self.dfa.state_count()
    }

    /// True iff the DFA has no states (construction never completed
    /// successfully; in practice unreachable from [`compile_regex`] since
    /// a failed compile never returns a `CompiledRegex` at all).
    pub fn is_empty(&self) -> bool {
        self.dfa.is_empty()
    }

    /// The original pattern source this regex was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }
}

//! Error types surfaced by regex compilation.
//!
//! Every other operation in this crate is infallible: absence of a match is
//! represented with `Option`, never an error. Only `compile_regex` can fail,
//! and only in the two ways spec'd below.

use thiserror::Error;

/// Result alias used throughout the crate's fallible (compile-time) paths.
pub type Result<T> = std::result::Result<T, MatchError>;

/// The two error kinds a regex compilation can produce.
///
/// Both variants retain the original pattern source for diagnostic display.
/// Neither carries a positional span: spec.md §7 explicitly does not
/// require one, and the parser does not attempt error recovery that would
/// make one meaningful.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The regex source is not well-formed: an unmatched `(` or `[`, a
    /// dangling escape at end of input, or an atom cut short by end of
    /// input.
    #[error("invalid regex pattern {source:?}: {reason}")]
    InvalidPattern {
        /// The original, unmodified pattern source.
        source: String,
        /// Human-readable description of the syntactic problem.
        reason: String,
    },

    /// Subset construction would exceed the configured DFA state cap.
    /// Raised before the offending state is added, so no partial DFA is
    /// ever exposed to the caller.
    #[error("pattern {source:?} is too complex: exceeds the {state_limit}-state DFA cap")]
    PatternTooComplex {
        /// The original, unmodified pattern source.
        source: String,
        /// The cap that would have been exceeded.
        state_limit: usize,
    },

    /// A `MatchConfig` value failed validation (e.g. a zero-sized state
    /// cap). Not a spec.md error kind, but surfaced the same way since it
    /// can only occur at construction, never mid-search.
    #[error("invalid matcher configuration: {0}")]
    InvalidConfig(String),
}

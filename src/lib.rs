//! # matchcore — literal & regex text matching, without backtracking
//!
//! A small, dependency-light text-matching library built from two
//! independent cores:
//!
//! - **KMP literal search** — Knuth-Morris-Pratt matching with a
//!   SIMD-accelerated first-byte scan and runtime CPU-feature dispatch
//!   (AVX-512, AVX2, SSE4.2, scalar), falling back to a classical
//!   two-pointer walk for short inputs.
//! - **DFA regex matching** — a restricted regular-expression grammar
//!   compiled through Thompson's NFA construction and then subset
//!   construction into a deterministic automaton, guaranteeing
//!   linear-time matching with no backtracking and no catastrophic
//!   blowup on adversarial patterns.
//!
//! ## Quick start
//!
//! ```rust
//! use matchcore::{search_pos, search_all_collected, compile_regex};
//!
//! assert_eq!(search_pos(b"abracadabra", b"abra"), Some(0));
//! assert_eq!(search_all_collected(b"aaaa", b"aa"), vec![0, 1, 2]);
//!
//! let re = compile_regex("[0-9]+").unwrap();
//! assert_eq!(re.search(b"There are 42 apples"), Some(10));
//! ```
//!
//! ## Concurrency
//!
//! Every compiled object (`LiteralPattern`, `ConstPattern`,
//! `CompiledRegex`) is read-only after construction and may be shared
//! across threads with no external synchronization — neither core
//! spawns threads, suspends, or times out internally. Callers that need
//! bounded wall-clock work must partition the input themselves.
//!
//! ## Error handling
//!
//! Searching never fails: absence of a match is `None`, never an error.
//! Only [`compile_regex`] is fallible, and only in two ways: a malformed
//! pattern source, or a pattern whose DFA would exceed the configured
//! state cap. See [`error::MatchError`].

#![allow(clippy::needless_range_loop)]

/// Runtime configuration: SIMD thresholds and the DFA state cap.
pub mod config;

/// Process-wide CPU feature detection and the [`cpu_feature::SimdLevel`]
/// ordering used to pick a SIMD kernel width.
pub mod cpu_feature;

/// Error types surfaced by regex compilation.
pub mod error;

/// The KMP literal-search core: failure function, SIMD-dispatched
/// engine, compiled pattern objects.
pub mod kmp;

/// The public literal-search surface (`search`, `search_all`, `count`, …).
pub mod literal;

/// The DFA regex core: parser, Thompson NFA builder, subset-construction
/// compiler, matcher, and the public `CompiledRegex` type.
pub mod regex;

/// Byte-scan SIMD kernels (AVX-512/AVX2/SSE4.2/scalar) behind a common
/// width-draining dispatch.
pub mod simd;

// Re-export the commonly used surface at the crate root, mirroring the
// flat `pub use` block the teacher keeps at its own crate root.
pub use config::MatchConfig;
pub use cpu_feature::SimdLevel;
pub use error::{MatchError, Result};
pub use kmp::{ConstPattern, LiteralPattern};
pub use literal::{
    compile_literal, contains, count, search, search_all, search_all_collected, search_pos,
};
pub use regex::{compile_regex, compile_regex_with, CompiledRegex};

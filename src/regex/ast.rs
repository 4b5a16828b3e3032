//! The intermediate tree a parsed regex source is reduced to before NFA
//! lowering, mirroring the grammar's own production names.

use crate::regex::charclass::CharClass;

/// A parsed regular expression, ready for Thompson-style lowering.
///
/// Mirrors the grammar's productions directly (`alternation`,
/// `concatenation`, `quantified`, `atom`) rather than collapsing them into
/// a smaller generic tree, so the lowering pass in `nfa.rs` can follow
/// spec.md §4.6's construction table one node kind at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Ast {
    /// A single literal byte.
    Byte(u8),
    /// `.` or a `[...]`/`\d`-family character class.
    Class(CharClass),
    /// `^` or `$`: accepted but compiled to a no-op epsilon (spec.md §9).
    Anchor,
    /// `A B`: two or more fragments run in sequence.
    Concat(Vec<Ast>),
    /// `A | B`: two or more alternatives.
    Alternation(Vec<Ast>),
    /// `A*`.
    Star(Box<Ast>),
    /// `A+`.
    Plus(Box<Ast>),
    /// `A?`.
    Optional(Box<Ast>),
    /// The empty regex (matches only the empty string).
    Empty,
}

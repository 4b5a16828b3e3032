//! The KMP literal-search core: failure-function builder, SIMD-dispatched
//! search engine, and the compiled pattern object.

pub mod engine;
pub mod failure;
pub mod pattern;

pub use pattern::{const_failure_table, ConstPattern, LiteralPattern};

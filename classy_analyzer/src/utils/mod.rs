//! Shared primitive types used by the lexer, token stream and analyzer.

pub mod span;

pub use span::{Position, Span};

//! Token system for classy declaration analysis
//!
//! This module holds the data leaf of the analyzer: a [`Token`] is a literal
//! source slice tagged with a [`TokenKind`], and a [`TokenStream`] is an
//! immutable, indexed sequence of tokens with the search primitives the
//! analyzer is built on.
//!
//! ## Token Kinds
//!
//! The kind set is deliberately small and closed:
//! - **Declaration keywords**: `class`, `interface`, `trait`
//! - **Inheritance keywords**: `extends`, `implements`
//! - **`new`**: marks anonymous class expressions
//! - **Qualified names**: identifiers and namespace separators
//! - **Punctuation**: comma, braces, parentheses
//! - **Trivia**: whitespace, line comments, block comments
//! - **Other**: everything else, opaque to the analyzer
//!
//! ## Stream Primitives
//!
//! - `at` - bounds-checked access
//! - `find_next` - forward search by kind set with a skip set
//! - `find_previous_significant` - backward search skipping trivia
//! - `matching_closer` - balanced delimiter matching over one pair kind
//!
//! Every primitive is a pure function of the stream content, so a stream can
//! be shared across threads for independent analyses.

pub mod token;
pub mod token_stream;

pub use token::{
    classify_punctuation, classify_word, Token, TokenKind, CLASSY_KEYWORDS, TRIVIA,
};
pub use token_stream::{TokenStream, TokenStreamBuilder, TokenStreamError};

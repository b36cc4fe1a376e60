//! Classy declaration analysis
//!
//! [`ClassAnalyzer`] answers structural questions about `class`, `interface`
//! and `trait` declarations in a [`TokenStream`](crate::tokens::TokenStream):
//! where the body opens, whether the class is anonymous, and how many
//! entries its `extends` and `implements` clauses hold and whether they span
//! several lines.

pub mod analyzer;
pub mod error;
pub mod types;

pub use analyzer::ClassAnalyzer;
pub use error::AnalysisError;
pub use types::{ClassDefinition, ClassyKind, ClauseKind, InheritanceClause};

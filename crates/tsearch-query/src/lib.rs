//! Query analysis and boolean evaluation for tsearch.
//!
//! A transcript query is one of:
//!
//! - **Boolean**: `cat AND dog`, `"cat" OR "bird"`, `rust NOT golang` - keywords are
//!   uppercase only and must be surrounded by whitespace
//! - **Exact phrase**: `"error handling"` - literal, case-insensitive substring
//! - **Phonetic phrase**: `quick brown` with phrase search enabled - words in order
//! - **Any word**: `quick brown` - any word may match
//!
//! Boolean queries are not parsed with conventional precedence. Operators are
//! resolved in three left-to-right passes (all `OR`s, then `AND`s, then `NOT`s), and
//! there is no grouping.
//!
//! # Example
//!
//! ```
//! use tsearch_query::{TermSyntax, evaluate_boolean_query};
//!
//! assert!(evaluate_boolean_query("cat AND dog", "the cat chased the dog", TermSyntax::Pattern));
//! assert!(!evaluate_boolean_query("cat AND dog", "the cat slept", TermSyntax::Pattern));
//! ```

#![warn(missing_docs)]

mod analyze;
mod ast;
mod error;
mod eval;
mod lexer;
mod parser;
mod term;

pub use analyze::{QueryPlan, analyze, exact_phrase, is_boolean_query};
pub use ast::{BoolExpr, BoolQuery, Operator, Term};
pub use error::QueryError;
pub use eval::{BooleanQuery, evaluate_boolean_query};
pub use lexer::{Token, tokenize};
pub use parser::parse;
pub use term::{TermPattern, TermSyntax};

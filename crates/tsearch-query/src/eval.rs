//! Boolean query evaluation.

use std::fmt;

use tracing::warn;

use crate::{
    ast::{BoolQuery, Term},
    error::QueryError,
    parser::parse,
    term::{TermPattern, TermSyntax},
};

/// A boolean query compiled once and evaluated against many lines.
#[derive(Debug, Clone)]
pub struct BooleanQuery {
    /// Parsed query with compiled term patterns at the leaves.
    root: BoolQuery<TermPattern>,
    /// Terms that failed to compile; they never match.
    diagnostics: Vec<QueryError>,
}

impl BooleanQuery {
    /// Parses and compiles a boolean query.
    ///
    /// Returns `None` for an empty query. Terms that fail to compile are recorded in
    /// [`diagnostics`](Self::diagnostics) and treated as non-matching.
    pub fn compile(query: &str, syntax: TermSyntax) -> Option<Self> {
        let parsed = parse(query)?;
        let mut diagnostics = Vec::new();

        let root = parsed.map(&mut |term: Term| {
            TermPattern::compile(term.clone(), syntax).unwrap_or_else(|err| {
                let err = err.with_query(query);
                warn!(
                    term = %term,
                    error = %err.message,
                    "term pattern does not compile, treating as non-matching"
                );
                diagnostics.push(err);
                TermPattern::unmatchable(term)
            })
        });

        Some(Self { root, diagnostics })
    }

    /// Checks whether the query matches a line.
    pub fn matches(&self, line: &str) -> bool {
        self.root.evaluate(&mut |pattern: &TermPattern| pattern.is_match(line))
    }

    /// Returns errors for terms that could not be compiled.
    pub fn diagnostics(&self) -> &[QueryError] {
        &self.diagnostics
    }
}

impl fmt::Display for BooleanQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

/// Evaluates a boolean query against a single line of text.
///
/// An empty query never matches.
pub fn evaluate_boolean_query(query: &str, text: &str, syntax: TermSyntax) -> bool {
    BooleanQuery::compile(query, syntax).is_some_and(|q| q.matches(text))
}

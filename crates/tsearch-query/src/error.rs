//! Error types for query term compilation.
//!
//! Query analysis itself never fails. The only failure is an unquoted boolean term
//! that is not a valid pattern; it is reported as a [`QueryError`] diagnostic and the
//! term is treated as non-matching.

use std::{error::Error, fmt};

/// A term that could not be compiled into a text pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    /// The offending term as written in the query.
    pub term: String,
    /// Message from the pattern compiler.
    pub message: String,
    /// The original query string (if available).
    pub query: Option<String>,
}

impl QueryError {
    /// Creates an invalid-pattern error for `term`.
    pub fn invalid_pattern(term: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            message: message.into(),
            query: None,
        }
    }

    /// Sets the query string for this error.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Returns the byte position of the term within the query, if known.
    pub fn position(&self) -> Option<usize> {
        self.query.as_deref()?.find(&self.term)
    }

    /// Returns a suggestion for fixing the term.
    pub fn suggestion(&self) -> &'static str {
        "Quote the term for a literal whole-word match, or enable literal_terms"
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "invalid term pattern '{}': {}", self.term, self.message)?;

        if let Some(query) = &self.query {
            writeln!(f, "  {query}")?;
            if let Some(pos) = self.position() {
                writeln!(f, "  {}^", " ".repeat(query[..pos].chars().count()))?;
            }
        }

        write!(f, "hint: {}", self.suggestion())
    }
}

impl Error for QueryError {}

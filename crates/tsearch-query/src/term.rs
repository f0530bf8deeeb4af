//! Compiled term patterns.
//!
//! A quoted term matches as a whole word. An unquoted term is a case-insensitive
//! regular expression searched anywhere in the line; with [`TermSyntax::Literal`] its
//! special characters are escaped first.

use std::fmt;

use regex::{Regex, RegexBuilder, escape};

use crate::{ast::Term, error::QueryError};

/// How unquoted terms are turned into patterns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TermSyntax {
    /// Unquoted terms are regular expressions (`.` matches any character).
    #[default]
    Pattern,
    /// Unquoted terms match their characters literally.
    Literal,
}

impl TermSyntax {
    /// Returns the syntax for a `literal_terms` setting.
    pub fn from_literal_flag(literal: bool) -> Self {
        if literal { Self::Literal } else { Self::Pattern }
    }
}

/// A term compiled for matching against lines.
#[derive(Debug, Clone)]
pub struct TermPattern {
    /// The source term.
    term: Term,
    /// Compiled pattern; `None` for a term that can never match.
    regex: Option<Regex>,
}

impl TermPattern {
    /// Compiles `term` using `syntax` for unquoted text.
    pub fn compile(term: Term, syntax: TermSyntax) -> Result<Self, QueryError> {
        let source = if term.quoted {
            format!(r"\b{}\b", escape(&term.text))
        } else {
            match syntax {
                TermSyntax::Pattern => term.text.clone(),
                TermSyntax::Literal => escape(&term.text),
            }
        };

        let regex = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|e| QueryError::invalid_pattern(term.to_string(), e.to_string()))?;

        Ok(Self {
            term,
            regex: Some(regex),
        })
    }

    /// Creates a pattern for `term` that never matches.
    pub fn unmatchable(term: Term) -> Self {
        Self { term, regex: None }
    }

    /// Checks whether the pattern occurs in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(text))
    }
}

impl fmt::Display for TermPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.term)?;
        if self.regex.is_none() {
            write!(f, " (invalid)")?;
        }
        Ok(())
    }
}

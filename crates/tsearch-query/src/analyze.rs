//! Query classification.
//!
//! A raw query is classified once per call into a [`QueryPlan`] that is reused for
//! every line of a transcript.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use tracing::debug;

use crate::{eval::BooleanQuery, term::TermSyntax};

/// Uppercase operator keyword with whitespace on both sides.
static BOOLEAN_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s(?:AND|OR|NOT)\s").expect("keyword pattern is valid"));

/// How a query decides whether a line matches.
#[derive(Debug, Clone)]
pub enum QueryPlan {
    /// Boolean expression over terms.
    Boolean(BooleanQuery),

    /// Literal, case-insensitive substring (stored lowercased).
    ExactPhrase(String),

    /// Lowercased words that must match phonetically, in order and contiguously.
    PhoneticPhrase(Vec<String>),

    /// Lowercased words of which any one must match phonetically.
    AnyWord(Vec<String>),
}

impl QueryPlan {
    /// Returns a short name for the plan kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::ExactPhrase(_) => "exact phrase",
            Self::PhoneticPhrase(_) => "phonetic phrase",
            Self::AnyWord(_) => "any word",
        }
    }
}

impl fmt::Display for QueryPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(query) => {
                writeln!(f, "Boolean")?;
                for line in query.to_string().lines() {
                    writeln!(f, "  {line}")?;
                }
                Ok(())
            }
            Self::ExactPhrase(phrase) => writeln!(f, "ExactPhrase({phrase:?})"),
            Self::PhoneticPhrase(words) => writeln!(f, "PhoneticPhrase({words:?})"),
            Self::AnyWord(words) => writeln!(f, "AnyWord({words:?})"),
        }
    }
}

/// Checks whether the query uses an uppercase `AND`, `OR` or `NOT` keyword.
///
/// Keywords are case-sensitive: `cat and dog` is not a boolean query.
pub fn is_boolean_query(query: &str) -> bool {
    BOOLEAN_KEYWORD.is_match(query)
}

/// Returns the inner text of a query wrapped in a single pair of double quotes.
pub fn exact_phrase(query: &str) -> Option<&str> {
    let inner = query.trim().strip_prefix('"')?.strip_suffix('"')?;
    (!inner.contains('"')).then_some(inner)
}

/// Splits text into lowercase whitespace-delimited words.
fn lowercase_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Classifies a query.
///
/// Returns `None` when the query cannot match anything (empty, whitespace-only, or
/// an empty quoted phrase).
pub fn analyze(query: &str, phrase_search: bool, syntax: TermSyntax) -> Option<QueryPlan> {
    if query.trim().is_empty() {
        return None;
    }

    let plan = if is_boolean_query(query) {
        QueryPlan::Boolean(BooleanQuery::compile(query, syntax)?)
    } else if let Some(inner) = exact_phrase(query) {
        if inner.trim().is_empty() {
            return None;
        }
        QueryPlan::ExactPhrase(inner.to_lowercase())
    } else if phrase_search {
        QueryPlan::PhoneticPhrase(lowercase_words(query))
    } else {
        QueryPlan::AnyWord(lowercase_words(query))
    };

    debug!(query, kind = plan.kind(), "classified query");
    Some(plan)
}

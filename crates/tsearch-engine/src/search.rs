//! Line search over a transcript.

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;
use tsearch_phonetic::{any_word_matches, phrase_matches, split_words};
use tsearch_query::{QueryPlan, analyze};

use crate::{
    context::{context_window, locate, match_text},
    options::SearchOptions,
    timestamp::extract_timestamp,
};

/// A matching transcript line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// 0-based index of the line in the transcript.
    pub line_index: usize,
    /// Representative query word used to place the context window.
    pub match_text: String,
    /// Part of the line around the match, prefixed with `...` when cut on the left.
    pub context: String,
    /// Seconds recovered from a preceding timestamp line.
    pub timestamp: Option<f64>,
}

/// A query classified once and applied to many lines.
struct LineMatcher<'q> {
    /// How lines are decided.
    plan: QueryPlan,
    /// Text located in a matching line to center its context.
    match_text: &'q str,
    /// Options in effect.
    options: SearchOptions,
}

impl<'q> LineMatcher<'q> {
    /// Classifies `query`; `None` when nothing can match.
    fn new(query: &'q str, options: SearchOptions) -> Option<Self> {
        let plan = analyze(query, options.use_phrase_search, options.term_syntax())?;
        Some(Self {
            plan,
            match_text: match_text(query),
            options,
        })
    }

    /// Decides whether `line` matches.
    fn is_match(&self, line: &str) -> bool {
        if line.trim().is_empty() {
            return false;
        }
        let phonetic = self.options.phonetic();
        match &self.plan {
            QueryPlan::Boolean(query) => query.matches(line),
            QueryPlan::ExactPhrase(phrase) => line.to_lowercase().contains(phrase.as_str()),
            QueryPlan::PhoneticPhrase(words) => phrase_matches(words, &split_words(line), phonetic),
            QueryPlan::AnyWord(words) => any_word_matches(words, &split_words(line), phonetic),
        }
    }

    /// Builds the result for line `index` when it matches.
    fn result<S: AsRef<str>>(&self, lines: &[S], index: usize) -> Option<SearchResult> {
        let line = lines[index].as_ref();
        if !self.is_match(line) {
            return None;
        }
        let offset = locate(line, self.match_text);
        Some(SearchResult {
            line_index: index,
            match_text: self.match_text.to_string(),
            context: context_window(line, offset, self.options.context_radius),
            timestamp: extract_timestamp(lines, index, self.options.timestamp_lookback),
        })
    }
}

/// Searches transcripts with a fixed set of options.
#[derive(Debug, Clone, Copy, Default)]
pub struct TranscriptSearcher {
    /// Options applied to every query.
    options: SearchOptions,
}

impl TranscriptSearcher {
    /// Creates a searcher.
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    /// Returns the searcher's options.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Classifies a query the way [`search`](Self::search) does.
    pub fn plan(&self, query: &str) -> Option<QueryPlan> {
        analyze(
            query,
            self.options.use_phrase_search,
            self.options.term_syntax(),
        )
    }

    /// Returns one result per matching line, in transcript order.
    ///
    /// An empty query or transcript gives no results.
    pub fn search<S: AsRef<str>>(&self, query: &str, lines: &[S]) -> Vec<SearchResult> {
        let Some(matcher) = LineMatcher::new(query, self.options) else {
            return Vec::new();
        };
        let results: Vec<_> = (0..lines.len())
            .filter_map(|index| matcher.result(lines, index))
            .collect();
        debug!(query, lines = lines.len(), hits = results.len(), "search finished");
        results
    }

    /// Like [`search`](Self::search), deciding lines in parallel.
    ///
    /// Results are identical to `search`, including their order.
    pub fn par_search<S>(&self, query: &str, lines: &[S]) -> Vec<SearchResult>
    where
        S: AsRef<str> + Sync,
    {
        let Some(matcher) = LineMatcher::new(query, self.options) else {
            return Vec::new();
        };
        let results: Vec<_> = (0..lines.len())
            .into_par_iter()
            .filter_map(|index| matcher.result(lines, index))
            .collect();
        debug!(query, lines = lines.len(), hits = results.len(), "parallel search finished");
        results
    }

    /// Checks whether `query` matches a single text.
    pub fn matches(&self, query: &str, text: &str) -> bool {
        LineMatcher::new(query, self.options).is_some_and(|m| m.is_match(text))
    }
}

/// Searches `lines` with default options.
pub fn search<S: AsRef<str>>(query: &str, lines: &[S]) -> Vec<SearchResult> {
    TranscriptSearcher::default().search(query, lines)
}

/// Checks whether `query` matches `text`, with default options when `options` is
/// `None`.
pub fn matches(query: &str, text: &str, options: Option<&SearchOptions>) -> bool {
    TranscriptSearcher::new(options.copied().unwrap_or_default()).matches(query, text)
}

//! Word, phrase and any-word phonetic matching.

use crate::{
    levenshtein::levenshtein,
    soundex::{SOUNDEX_EMPTY, soundex},
};

/// Words of at most this many characters only match when equal.
const SHORT_WORD_LEN: usize = 2;

/// Options that control phonetic word equivalence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhoneticOptions {
    /// Also accept equal Soundex codes and small edit distances.
    pub use_soundex: bool,
}

/// Maximum edit distance accepted for a search word of `len` characters.
fn fuzzy_threshold(len: usize) -> usize {
    (len / 3).max(1)
}

/// Checks whether two words are phonetically equivalent.
///
/// Equal words always match. A search word of one or two characters matches only
/// itself. Longer words match when either contains the other, and, with
/// [`PhoneticOptions::use_soundex`], when their Soundex codes agree or their edit
/// distance is within a third of the search word's length (at least 1).
///
/// Comparison is case-sensitive; callers lowercase both sides.
pub fn words_match_phonetically(search: &str, text: &str, options: PhoneticOptions) -> bool {
    if search == text {
        return true;
    }

    let len = search.chars().count();
    if len <= SHORT_WORD_LEN {
        return false;
    }

    if text.contains(search) || search.contains(text) {
        return true;
    }

    if !options.use_soundex {
        return false;
    }

    let code = soundex(search);
    if code != SOUNDEX_EMPTY && code == soundex(text) {
        return true;
    }

    levenshtein(search, text) <= fuzzy_threshold(len)
}

/// Splits text into lowercase whitespace-delimited words.
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Checks whether `query` words match a contiguous run of `text` words, in order.
///
/// An empty query never matches.
pub fn phrase_matches<Q, T>(query: &[Q], text: &[T], options: PhoneticOptions) -> bool
where
    Q: AsRef<str>,
    T: AsRef<str>,
{
    if query.is_empty() || query.len() > text.len() {
        return false;
    }

    text.windows(query.len()).any(|window| {
        query
            .iter()
            .zip(window)
            .all(|(q, t)| words_match_phonetically(q.as_ref(), t.as_ref(), options))
    })
}

/// Checks whether any `query` word matches any `text` word.
pub fn any_word_matches<Q, T>(query: &[Q], text: &[T], options: PhoneticOptions) -> bool
where
    Q: AsRef<str>,
    T: AsRef<str>,
{
    query.iter().any(|q| {
        text.iter()
            .any(|t| words_match_phonetically(q.as_ref(), t.as_ref(), options))
    })
}

/// Returns the inner text of a query wrapped in double quotes.
fn quoted(query: &str) -> Option<&str> {
    query.strip_prefix('"')?.strip_suffix('"')
}

/// Checks whether `query` matches `text` as a phrase.
///
/// A double-quoted query is a literal, case-insensitive substring check. Otherwise
/// both sides are split into lowercase words and the query words must match a
/// contiguous run of text words in order.
pub fn matches_phonetically(query: &str, text: &str, options: PhoneticOptions) -> bool {
    let query = query.trim();
    if let Some(inner) = quoted(query) {
        return !inner.trim().is_empty() && text.to_lowercase().contains(&inner.to_lowercase());
    }
    phrase_matches(&split_words(query), &split_words(text), options)
}

/// Checks whether any word of `query` matches any word of `text`.
pub fn matches_any_word(query: &str, text: &str, options: PhoneticOptions) -> bool {
    any_word_matches(&split_words(query), &split_words(text), options)
}

//! Phonetic word matching for tsearch.
//!
//! Two words are considered equivalent when they are equal, when one contains the
//! other, or (with Soundex enabled) when they share a Soundex code or lie within a
//! length-scaled edit distance. Word equivalence is composed into phrase matching
//! (ordered, contiguous) and any-word matching.
//!
//! # Example
//!
//! ```
//! use tsearch_phonetic::{PhoneticOptions, matches_phonetically, soundex};
//!
//! assert_eq!(soundex("Robert"), "R163");
//! let options = PhoneticOptions::default();
//! assert!(matches_phonetically("quick brown", "the quick brown fox", options));
//! assert!(!matches_phonetically("quick fox", "the quick brown fox jumps", options));
//! ```

#![warn(missing_docs)]

mod levenshtein;
mod matcher;
mod soundex;

pub use levenshtein::levenshtein;
pub use matcher::{
    PhoneticOptions, any_word_matches, matches_any_word, matches_phonetically, phrase_matches,
    split_words, words_match_phonetically,
};
pub use soundex::{SOUNDEX_EMPTY, soundex};

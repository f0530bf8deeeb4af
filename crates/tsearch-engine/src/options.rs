//! Search options.

use serde::{Deserialize, Serialize};
use tsearch_phonetic::PhoneticOptions;
use tsearch_query::TermSyntax;

/// Default number of characters kept on each side of a match.
pub const DEFAULT_CONTEXT_RADIUS: usize = 50;

/// Default number of preceding lines scanned for a timestamp.
pub const DEFAULT_TIMESTAMP_LOOKBACK: usize = 10;

/// Options controlling how queries match transcript lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Accept Soundex and edit-distance equivalents for phonetic words.
    pub use_soundex: bool,
    /// Require phonetic query words to appear in order and contiguously.
    pub use_phrase_search: bool,
    /// Escape unquoted boolean terms instead of treating them as patterns.
    pub literal_terms: bool,
    /// Characters kept on each side of a match in the context window.
    pub context_radius: usize,
    /// Preceding lines scanned for a timestamp.
    pub timestamp_lookback: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            use_soundex: false,
            use_phrase_search: false,
            literal_terms: false,
            context_radius: DEFAULT_CONTEXT_RADIUS,
            timestamp_lookback: DEFAULT_TIMESTAMP_LOOKBACK,
        }
    }
}

impl SearchOptions {
    /// Returns the options passed to the phonetic matcher.
    pub fn phonetic(&self) -> PhoneticOptions {
        PhoneticOptions {
            use_soundex: self.use_soundex,
        }
    }

    /// Returns the syntax used for unquoted boolean terms.
    pub fn term_syntax(&self) -> TermSyntax {
        TermSyntax::from_literal_flag(self.literal_terms)
    }
}

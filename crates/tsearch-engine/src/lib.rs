//! Transcript search.
//!
//! Searches an ordered transcript (one utterance per line) for a query and returns
//! the matching lines with a bounded context window and a timestamp recovered from
//! preceding cue or display-time lines.
//!
//! Queries are classified once per call:
//!
//! - uppercase `AND`, `OR` or `NOT` between whitespace makes a boolean query;
//! - a query wrapped in double quotes is a case-insensitive substring;
//! - anything else is matched word by word, phonetically, either as a contiguous
//!   phrase or as any single word.
//!
//! ```
//! use tsearch_engine::{matches, search};
//!
//! let lines = ["00:01:02,500 --> 00:01:05,000", "Hello world"];
//! let results = search("hello", &lines);
//! assert_eq!(results[0].line_index, 1);
//! assert_eq!(results[0].timestamp, Some(62.5));
//!
//! assert!(matches("cat AND dog", "the cat chased the dog", None));
//! ```

#![warn(missing_docs)]

mod context;
mod options;
mod search;
mod srt;
mod timecode;
mod timestamp;

pub use context::{ELLIPSIS, context_window, locate, match_text};
pub use options::{DEFAULT_CONTEXT_RADIUS, DEFAULT_TIMESTAMP_LOOKBACK, SearchOptions};
pub use search::{SearchResult, TranscriptSearcher, matches, search};
pub use srt::{Cue, parse_srt, render_srt};
pub use timecode::{format_display_time, format_srt_timestamp, parse_timecode};
pub use timestamp::{extract_timestamp, parse_line_timestamp};
pub use tsearch_phonetic::PhoneticOptions;
pub use tsearch_query::{QueryError, QueryPlan, TermSyntax};

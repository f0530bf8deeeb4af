//! Rendering and JSON serialization for CLI output.

use serde::Serialize;
use tsearch_engine::{Cue, SearchResult, format_display_time, format_srt_timestamp};

/// JSON output for one searched file.
#[derive(Serialize)]
pub struct JsonFileResults<'a> {
    /// File the results came from.
    pub path: String,
    /// Matching lines.
    pub results: &'a [SearchResult],
}

/// Formats a search result as `path:line [time] context`, with a 1-based line number.
pub fn format_result(path: &str, result: &SearchResult) -> String {
    let line = result.line_index + 1;
    match result.timestamp {
        Some(seconds) => format!(
            "{path}:{line} [{}] {}",
            format_display_time(seconds),
            result.context
        ),
        None => format!("{path}:{line} {}", result.context),
    }
}

/// Formats a cue as `index [start --> end] text`.
pub fn format_cue(cue: &Cue) -> String {
    format!(
        "{} [{} --> {}] {}",
        cue.index,
        format_srt_timestamp(cue.start),
        format_srt_timestamp(cue.end),
        cue.text
    )
}

/// Serializes a value as pretty JSON, reporting failures on stderr.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Option<String> {
    match serde_json::to_string_pretty(value) {
        Ok(json) => Some(json),
        Err(e) => {
            eprintln!("error: failed to serialize results: {e}");
            None
        }
    }
}

/// Truncates results to `limit`, where 0 means no limit.
pub fn apply_limit(results: &[SearchResult], limit: usize) -> &[SearchResult] {
    if limit == 0 || results.len() <= limit {
        results
    } else {
        &results[..limit]
    }
}

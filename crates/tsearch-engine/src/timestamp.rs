//! Timestamp recovery from lines preceding a match.

use std::sync::LazyLock;

use regex::Regex;

use crate::timecode::{capture_millis, capture_u64, clock_seconds};

/// Timestamp forms, in priority order. Each has hour, minute, second and
/// millisecond groups; groups that a form lacks simply do not participate.
static TIMESTAMP_FORMS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        // Cue range anywhere in the line.
        r"(\d{2}):(\d{2}):(\d{2})[,.](\d{3})\s*-->",
        // Leading cue timecode.
        r"^(\d{2}):(\d{2}):(\d{2})[,.](\d{3})",
        // Leading display time with hours, optionally bracketed.
        r"^\[?(\d{1,2}):(\d{2}):(\d{2})()",
        // Leading minutes and seconds, optionally bracketed.
        r"^\[?()(\d{1,2}):(\d{2})()",
    ]
    .map(|pattern| Regex::new(pattern).expect("timestamp pattern is valid"))
});

/// Reads a timestamp from a single line, in seconds.
///
/// Leading whitespace is ignored for the anchored forms.
pub fn parse_line_timestamp(line: &str) -> Option<f64> {
    let line = line.trim_start();
    TIMESTAMP_FORMS.iter().find_map(|form| {
        let caps = form.captures(line)?;
        Some(clock_seconds(
            capture_u64(&caps, 1),
            capture_u64(&caps, 2),
            capture_u64(&caps, 3),
            capture_millis(&caps, 4),
        ))
    })
}

/// Finds the timestamp for the line at `index` by scanning up to `lookback`
/// preceding lines, nearest first.
///
/// The line at `index` itself is not examined.
pub fn extract_timestamp<S: AsRef<str>>(lines: &[S], index: usize, lookback: usize) -> Option<f64> {
    let end = index.min(lines.len());
    let start = index.saturating_sub(lookback);
    if start >= end {
        return None;
    }
    lines[start..end]
        .iter()
        .rev()
        .find_map(|line| parse_line_timestamp(line.as_ref()))
}

#[cfg(test)]
mod tests {
    use std::iter;

    use super::*;

    #[test]
    fn cue_range_before_match() {
        let lines = ["00:01:02,500 --> 00:01:05,000", "Hello world"];
        assert_eq!(extract_timestamp(&lines, 1, 10), Some(62.5));
    }

    #[test]
    fn cue_range_anywhere_in_line() {
        assert_eq!(
            parse_line_timestamp("cue 4: 01:00:00,000 --> 01:00:02,000"),
            Some(3600.0)
        );
    }

    #[test]
    fn form_priority() {
        assert_eq!(parse_line_timestamp("00:00:10,250 and more"), Some(10.25));
        assert_eq!(parse_line_timestamp("[1:02:03] speaker"), Some(3723.0));
        assert_eq!(parse_line_timestamp("[2:05] hello"), Some(125.0));
        assert_eq!(parse_line_timestamp("12:34 later"), Some(754.0));
        assert_eq!(parse_line_timestamp("  0:07 indented"), Some(7.0));
    }

    #[test]
    fn webvtt_separator() {
        assert_eq!(parse_line_timestamp("00:00:01.500 --> 00:00:03.000"), Some(1.5));
    }

    #[test]
    fn plain_text_has_no_timestamp() {
        assert_eq!(parse_line_timestamp("meet at 10:30 tomorrow"), None);
        assert_eq!(parse_line_timestamp(""), None);
    }

    #[test]
    fn nearest_preceding_line_wins() {
        let lines = ["0:05", "first", "0:09", "second"];
        assert_eq!(extract_timestamp(&lines, 3, 10), Some(9.0));
        assert_eq!(extract_timestamp(&lines, 1, 10), Some(5.0));
    }

    #[test]
    fn current_line_is_not_scanned() {
        let lines = ["0:42 text with time"];
        assert_eq!(extract_timestamp(&lines, 0, 10), None);
    }

    #[test]
    fn lookback_is_bounded() {
        let mut lines = vec!["0:01"];
        lines.extend(iter::repeat_n("words", 10));
        lines.push("match");
        assert_eq!(extract_timestamp(&lines, 11, 10), None);
        assert_eq!(extract_timestamp(&lines, 10, 10), Some(1.0));
        assert_eq!(extract_timestamp(&lines, 11, 11), Some(1.0));
    }

    #[test]
    fn index_past_end_is_clamped() {
        let lines = ["0:03", "text"];
        assert_eq!(extract_timestamp(&lines, 5, 10), Some(3.0));
        assert_eq!(extract_timestamp::<&str>(&[], 0, 10), None);
    }
}

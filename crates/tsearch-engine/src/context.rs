//! Context windows around a match.

use regex::{RegexBuilder, escape};

/// Marker prepended when a window does not start at the beginning of the line.
pub const ELLIPSIS: &str = "...";

/// Returns the representative match text for a query: its first whitespace-separated
/// word with surrounding double quotes removed.
pub fn match_text(query: &str) -> &str {
    query
        .split_whitespace()
        .next()
        .map_or("", |word| word.trim_matches('"'))
}

/// Returns the character offset of the first case-insensitive occurrence of `needle`
/// in `line`, or 0 when it does not occur.
pub fn locate(line: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    RegexBuilder::new(&escape(needle))
        .case_insensitive(true)
        .build()
        .ok()
        .and_then(|re| re.find(line))
        .map_or(0, |m| line[..m.start()].chars().count())
}

/// Cuts the window `[offset - radius, offset + radius)` out of `line`, counted in
/// characters and clamped to the line.
///
/// A radius of 0 yields an empty window, so a match past the start of the line
/// gives just the ellipsis. The config and CLI layers reject 0.
pub fn context_window(line: &str, offset: usize, radius: usize) -> String {
    let start = offset.saturating_sub(radius);
    let end = offset.saturating_add(radius);

    let window: String = line.chars().skip(start).take(end - start).collect();
    if start > 0 {
        format!("{ELLIPSIS}{window}")
    } else {
        window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_text_strips_quotes() {
        assert_eq!(match_text("\"Error Handling\""), "Error");
        assert_eq!(match_text("\"cat\" OR \"bird\""), "cat");
        assert_eq!(match_text("  fox  "), "fox");
        assert_eq!(match_text(""), "");
    }

    #[test]
    fn locate_is_case_insensitive() {
        assert_eq!(locate("The Quick fox", "quick"), 4);
        assert_eq!(locate("no match", "fox"), 0);
        assert_eq!(locate("anything", ""), 0);
    }

    #[test]
    fn locate_escapes_needle() {
        assert_eq!(locate("cost is $5.00 (approx)", "(approx"), 14);
        assert_eq!(locate("abc", "a.c"), 0);
    }

    #[test]
    fn locate_counts_characters() {
        assert_eq!(locate("café au lait", "au"), 5);
    }

    #[test]
    fn short_line_is_whole_window() {
        assert_eq!(context_window("hello world", 6, 50), "hello world");
    }

    #[test]
    fn window_in_long_line() {
        let line: String = "x".repeat(200) + "needle" + &"y".repeat(194);
        let offset = locate(&line, "needle");
        assert_eq!(offset, 200);

        let context = context_window(&line, offset, 50);
        assert!(context.starts_with(ELLIPSIS));
        let body = &context[ELLIPSIS.len()..];
        assert_eq!(body.chars().count(), 100);
        assert!(body.starts_with(&"x".repeat(50)));
        assert!(body[50..].starts_with("needle"));
    }

    #[test]
    fn window_clamped_at_end() {
        let line = "a".repeat(60);
        let context = context_window(&line, 55, 50);
        assert_eq!(context, format!("...{}", "a".repeat(55)));
    }

    #[test]
    fn zero_radius_is_empty() {
        assert_eq!(context_window("abcdef", 3, 0), "...");
        assert_eq!(context_window("abcdef", 0, 0), "");
    }

    #[test]
    fn window_on_multibyte_text() {
        let line = "日本語".repeat(40);
        let context = context_window(&line, 60, 10);
        assert_eq!(context.chars().count(), 23);
    }
}

//! Timecode parsing and formatting.
//!
//! Cue ranges use `HH:MM:SS,mmm` (a `.` separator is also read). Display times use
//! `M:SS`, or `H:MM:SS` once the hour is non-zero.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// A full cue timecode, the whole string.
static CUE_TIMECODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2}):(\d{2}):(\d{2})[,.](\d{1,3})$").expect("timecode pattern is valid")
});

/// Converts clock components to seconds.
pub(crate) fn clock_seconds(hours: u64, minutes: u64, seconds: u64, millis: u64) -> f64 {
    (hours * 3600 + minutes * 60 + seconds) as f64 + millis as f64 / 1000.0
}

/// Reads numeric capture group `index`, or 0 when the group did not participate.
pub(crate) fn capture_u64(caps: &Captures<'_>, index: usize) -> u64 {
    caps.get(index)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Reads a millisecond group, scaling one or two digit fractions (`.5` is 500ms).
pub(crate) fn capture_millis(caps: &Captures<'_>, index: usize) -> u64 {
    let Some(m) = caps.get(index) else {
        return 0;
    };
    let digits = m.as_str();
    let value: u64 = digits.parse().unwrap_or(0);
    match digits.len() {
        1 => value * 100,
        2 => value * 10,
        _ => value,
    }
}

/// Parses an `HH:MM:SS,mmm` timecode into seconds.
pub fn parse_timecode(text: &str) -> Option<f64> {
    let caps = CUE_TIMECODE.captures(text.trim())?;
    Some(clock_seconds(
        capture_u64(&caps, 1),
        capture_u64(&caps, 2),
        capture_u64(&caps, 3),
        capture_millis(&caps, 4),
    ))
}

/// Splits non-negative seconds into whole milliseconds.
fn total_millis(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0).round() as u64
    } else {
        0
    }
}

/// Formats seconds as an `HH:MM:SS,mmm` cue timecode.
///
/// Negative and non-finite values format as zero.
pub fn format_srt_timestamp(seconds: f64) -> String {
    let ms = total_millis(seconds);
    let (hours, rest) = (ms / 3_600_000, ms % 3_600_000);
    let (minutes, rest) = (rest / 60_000, rest % 60_000);
    let (secs, millis) = (rest / 1000, rest % 1000);
    format!("{hours:02}:{minutes:02}:{secs:02},{millis:03}")
}

/// Formats seconds as `M:SS`, or `H:MM:SS` when at least an hour.
pub fn format_display_time(seconds: f64) -> String {
    let total = total_millis(seconds) / 1000;
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cue_timecodes() {
        assert_eq!(parse_timecode("00:01:02,500"), Some(62.5));
        assert_eq!(parse_timecode(" 01:00:00.250 "), Some(3600.25));
        assert_eq!(parse_timecode("00:00:01,5"), Some(1.5));
        assert_eq!(parse_timecode("1:02"), None);
        assert_eq!(parse_timecode("00:01:02,500 extra"), None);
    }

    #[test]
    fn srt_format() {
        assert_eq!(format_srt_timestamp(0.0), "00:00:00,000");
        assert_eq!(format_srt_timestamp(62.5), "00:01:02,500");
        assert_eq!(format_srt_timestamp(3725.042), "01:02:05,042");
        assert_eq!(format_srt_timestamp(-3.0), "00:00:00,000");
        assert_eq!(format_srt_timestamp(f64::NAN), "00:00:00,000");
    }

    #[test]
    fn display_format() {
        assert_eq!(format_display_time(5.0), "0:05");
        assert_eq!(format_display_time(62.9), "1:02");
        assert_eq!(format_display_time(3599.0), "59:59");
        assert_eq!(format_display_time(3725.0), "1:02:05");
    }

    #[test]
    fn format_then_parse() {
        let text = format_srt_timestamp(4321.123);
        let parsed = parse_timecode(&text).unwrap();
        assert!((parsed - 4321.123).abs() < 1e-9);
    }
}

//! SRT subtitle cues.

use serde::Serialize;
use tracing::debug;

use crate::timecode::{format_srt_timestamp, parse_timecode};

/// Separator between the start and end timecodes of a cue.
const ARROW: &str = "-->";

/// One subtitle block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cue {
    /// Cue number as written in the file, or its 1-based position when absent.
    pub index: usize,
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
    /// Text lines joined by a single space.
    pub text: String,
}

/// Parses a `start --> end` line.
fn parse_range(line: &str) -> Option<(f64, f64)> {
    let (start, end) = line.split_once(ARROW)?;
    // Cue settings may follow the end timecode.
    let end = end.split_whitespace().next()?;
    Some((parse_timecode(start)?, parse_timecode(end)?))
}

/// Parses one block of non-blank lines.
fn parse_block(lines: &[&str], position: usize) -> Option<Cue> {
    let (index, rest) = match lines.split_first() {
        Some((first, rest)) if !first.contains(ARROW) => (first.trim().parse().ok()?, rest),
        _ => (position, lines),
    };
    let (range, text) = rest.split_first()?;
    let (start, end) = parse_range(range)?;
    let text = text.iter().map(|l| l.trim()).collect::<Vec<_>>().join(" ");
    Some(Cue {
        index,
        start,
        end,
        text,
    })
}

/// Parses SRT text into cues.
///
/// Blocks are separated by blank lines. Each holds an optional numeric index, a
/// `start --> end` line and any number of text lines. Malformed blocks are skipped.
pub fn parse_srt(text: &str) -> Vec<Cue> {
    let mut cues = Vec::new();
    let mut block: Vec<&str> = Vec::new();
    let mut lines = text.lines().peekable();

    while let Some(line) = lines.next() {
        if !line.trim().is_empty() {
            block.push(line.trim_start_matches('\u{feff}'));
        }
        let boundary = line.trim().is_empty() || lines.peek().is_none();
        if boundary && !block.is_empty() {
            match parse_block(&block, cues.len() + 1) {
                Some(cue) => cues.push(cue),
                None => debug!(first_line = block[0], "skipping malformed subtitle block"),
            }
            block.clear();
        }
    }

    cues
}

/// Renders cues as SRT text, numbered from 1.
pub fn render_srt(cues: &[Cue]) -> String {
    let mut out = String::new();
    for (n, cue) in cues.iter().enumerate() {
        out.push_str(&format!(
            "{}\n{} {ARROW} {}\n{}\n\n",
            n + 1,
            format_srt_timestamp(cue.start),
            format_srt_timestamp(cue.end),
            cue.text.trim()
        ));
    }
    out
}

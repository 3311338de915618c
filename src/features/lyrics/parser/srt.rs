//! Block-timed (SRT) parser
//!
//! Blocks are separated by blank lines. A block is an index line, a timing
//! line `HH:MM:SS,ms --> HH:MM:SS,ms` and one or more text lines. Only the
//! start timestamp is kept.

use std::sync::LazyLock;

use regex::Regex;

use super::time::parse_clock_time;
use super::types::LyricLine;

static BLOCK_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

static TIMING_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2}:\d{2}:\d{2},\d{3})\s*-->").unwrap());

/// Parse one block, or `None` if it is too short or has no valid timing line
fn parse_block(block: &str) -> Option<LyricLine> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() < 3 {
        return None;
    }

    let start = TIMING_LINE.captures(lines[1])?.get(1)?.as_str();
    let text = lines[2..].join(" ");
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    Some(LyricLine::new(parse_clock_time(start), text))
}

/// Parse SRT content into lyric lines, one per block, in source order
pub fn parse_srt(src: &str) -> Vec<LyricLine> {
    let normalized = src.replace("\r\n", "\n");
    BLOCK_SEPARATOR
        .split(normalized.trim())
        .filter_map(parse_block)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_blocks() {
        let content = "1\n00:00:01,500 --> 00:00:03,000\nHello\n\n2\n00:01:02,250 --> 00:01:04,000\nWorld\n";
        let lines = parse_srt(content);
        assert_eq!(
            lines,
            vec![LyricLine::new(1.5, "Hello"), LyricLine::new(62.25, "World")]
        );
    }

    #[test]
    fn test_joins_multiline_text() {
        let content = "1\n00:00:05,000 --> 00:00:07,000\nfirst half\nsecond half";
        let lines = parse_srt(content);
        assert_eq!(lines[0].text, "first half second half");
    }

    #[test]
    fn test_malformed_timing_block_dropped() {
        let content = "1\n00:00:01 -> 00:00:02\nBroken\n\n2\n00:00:04,000 --> 00:00:05,000\nKept";
        let lines = parse_srt(content);
        assert_eq!(lines, vec![LyricLine::new(4.0, "Kept")]);
    }

    #[test]
    fn test_short_block_dropped() {
        let content = "1\n00:00:01,000 --> 00:00:02,000\n\n\n2\n01:00:00,000 --> 01:00:01,000\nLate";
        let lines = parse_srt(content);
        assert_eq!(lines, vec![LyricLine::new(3600.0, "Late")]);
    }

    #[test]
    fn test_crlf_and_padding_blank_lines() {
        let content = "\r\n1\r\n00:00:02,000 --> 00:00:03,000\r\nOne\r\n \r\n\r\n2\r\n00:00:04,000 --> 00:00:05,000\r\nTwo\r\n";
        let lines = parse_srt(content);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].text, "Two");
    }
}

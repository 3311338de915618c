//! Tag-timed (LRC) parser
//!
//! Each caption line starts with a `[mm:ss]` or `[mm:ss.xx]` tag followed by
//! free text. Metadata tags like `[ar:Artist]` never match and are ignored.

use std::sync::LazyLock;

use regex::Regex;

use super::time::parse_time;
use super::types::LyricLine;

static TAG_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(\d{2,}:\d{2}(?:\.\d{2,3})?)\](.*)$").unwrap());

/// Parse a single line, returning `None` for untagged or empty captions
fn parse_line(line: &str) -> Option<LyricLine> {
    let caps = TAG_LINE.captures(line.trim())?;
    let text = caps.get(2)?.as_str().trim();
    if text.is_empty() {
        return None;
    }
    Some(LyricLine::new(parse_time(caps.get(1)?.as_str()), text))
}

/// Parse LRC content into lyric lines, in source order
pub fn parse_lrc(src: &str) -> Vec<LyricLine> {
    src.lines().filter_map(parse_line).collect()
}

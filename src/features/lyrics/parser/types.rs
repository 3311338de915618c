//! Lyrics data types

use serde::{Deserialize, Serialize};

/// A single timestamped caption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyricLine {
    /// Start time in seconds
    pub time: f64,
    /// Caption text, never empty
    pub text: String,
}

impl LyricLine {
    pub fn new(time: f64, text: impl Into<String>) -> Self {
        Self {
            time,
            text: text.into(),
        }
    }
}

/// Signature shared by every lyric format parser
///
/// Parsers never fail: malformed lines or blocks are skipped.
pub type LyricsParserFn = fn(&str) -> Vec<LyricLine>;

//! Lyrics parsing module
//!
//! Supports two formats:
//! - LRC: tag-timed lines `[mm:ss.xx]text`
//! - SRT: block-timed subtitles `HH:MM:SS,ms --> HH:MM:SS,ms`
//!
//! The format is chosen by file extension through [`LyricsRegistry`].

mod lrc;
mod srt;
mod time;
mod types;

pub use lrc::parse_lrc;
pub use srt::parse_srt;
pub use time::{parse_clock_time, parse_time};
pub use types::*;

use std::collections::HashMap;
use std::path::Path;

/// Mapping from lowercase file extension to parser
///
/// Unknown extensions fall back to the tag-timed parser.
#[derive(Debug, Clone)]
pub struct LyricsRegistry {
    parsers: HashMap<String, LyricsParserFn>,
    fallback: LyricsParserFn,
}

impl Default for LyricsRegistry {
    fn default() -> Self {
        let mut registry = Self {
            parsers: HashMap::new(),
            fallback: parse_lrc,
        };
        registry.register("lrc", parse_lrc);
        registry.register("srt", parse_srt);
        registry
    }
}

impl LyricsRegistry {
    /// Associate an extension (with or without the leading dot) with a parser
    pub fn register(&mut self, extension: &str, parser: LyricsParserFn) {
        self.parsers.insert(normalize_extension(extension), parser);
    }

    /// Extensions with a registered parser, sorted
    pub fn extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.parsers.keys().map(String::as_str).collect();
        exts.sort_unstable();
        exts
    }

    /// Whether a file name carries a registered lyrics extension
    pub fn is_lyrics_file(&self, file_name: &str) -> bool {
        extension_of(file_name)
            .map(|ext| self.parsers.contains_key(&ext))
            .unwrap_or(false)
    }

    /// Parser for a file name, falling back to LRC
    pub fn parser_for(&self, file_name: &str) -> LyricsParserFn {
        extension_of(file_name)
            .and_then(|ext| self.parsers.get(&ext).copied())
            .unwrap_or(self.fallback)
    }

    /// Parse lyrics content using the parser selected by `file_name`
    pub fn parse(&self, file_name: &str, content: &str) -> Vec<LyricLine> {
        (self.parser_for(file_name))(content)
    }
}

fn normalize_extension(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_ascii_lowercase()
}

fn extension_of(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(normalize_extension)
}

/// Parse lyrics with the default registry
pub fn parse_lyrics(file_name: &str, content: &str) -> Vec<LyricLine> {
    LyricsRegistry::default().parse(file_name, content)
}

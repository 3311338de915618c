//! Encoding detection for lyric files
//!
//! Lyric files shipped next to older rips are frequently saved in GBK,
//! Shift-JIS or other legacy encodings. Decoding falls back through the
//! common ones when the bytes are not valid UTF-8.

use encoding_rs::{BIG5, EUC_JP, EUC_KR, GBK, SHIFT_JIS, WINDOWS_1252};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decode lyric bytes as text
///
/// Encoding detection priority:
/// 1. UTF-8 (BOM stripped)
/// 2. GBK (Simplified Chinese)
/// 3. Big5 (Traditional Chinese)
/// 4. Shift-JIS (Japanese)
/// 5. EUC-JP (Japanese)
/// 6. EUC-KR (Korean)
/// 7. Windows-1252 (Western European)
/// 8. Lossy UTF-8
pub fn decode_string(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    if let Ok(s) = std::str::from_utf8(bytes) {
        return s.to_string();
    }

    let encodings = [GBK, BIG5, SHIFT_JIS, EUC_JP, EUC_KR, WINDOWS_1252];

    for encoding in encodings {
        let (decoded, _, had_errors) = encoding.decode(bytes);
        if !had_errors && is_likely_valid_text(&decoded) {
            tracing::debug!("Decoded lyrics as {}", encoding.name());
            return decoded.into_owned();
        }
    }

    String::from_utf8_lossy(bytes).into_owned()
}

/// Heuristic check if decoded text looks valid
fn is_likely_valid_text(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }

    let suspicious_count = s
        .chars()
        .filter(|c| {
            // Control characters (except common whitespace)
            (*c < ' ' && *c != '\t' && *c != '\n' && *c != '\r') ||
            // Private use area
            ('\u{E000}'..='\u{F8FF}').contains(c) ||
            *c == '\u{FFFD}'
        })
        .count();

    // Allow up to 5% suspicious characters
    let threshold = (s.len() / 20).max(1);
    suspicious_count <= threshold
}

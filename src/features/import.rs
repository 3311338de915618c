//! Local folder import
//!
//! Turns a loose file selection (a folder upload) into a playlist:
//! - Classification into audio, image and lyric buckets
//! - Per-track cover and lyric correlation by file name
//! - Concurrent lyric reads with order-preserving assembly
//! - Legacy text encoding fallback for lyric files

mod assemble;
mod classify;
mod encoding;
mod pipeline;
mod progress;
mod source;

pub use assemble::{TrackAssembler, folder_cover_url};
pub use classify::{ClassifiedFiles, classify, is_audio, is_image, is_lyrics};
pub use encoding::decode_string;
pub use pipeline::{ingest, ingest_with};
pub use progress::{IngestProgress, ProgressReceiver, ProgressSender, progress_channel};
pub use source::{FileSource, RawFile, RawFileSet, guess_mime, raw_files_from_dir};

/// Supported audio file extensions
pub const AUDIO_EXTENSIONS: &[&str] = &[
    "mp3", "wav", "flac", "m4a", "ogg", "opus", "aac", "wma", "aiff",
];

/// File name with its final extension removed
///
/// A name without a dot, or whose only dot is the leading one, is its own
/// base name.
pub fn base_name(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => &file_name[..idx],
        _ => file_name,
    }
}

/// Lowercase extension of a file name, without the dot
pub fn extension(file_name: &str) -> Option<String> {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < file_name.len() => {
            Some(file_name[idx + 1..].to_ascii_lowercase())
        }
        _ => None,
    }
}

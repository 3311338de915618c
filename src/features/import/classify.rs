//! File classification
//!
//! Partitions a selection into audio, image and lyric buckets using only the
//! MIME hint and the file name. Content is never read here.

use crate::features::lyrics::LyricsRegistry;

use super::source::RawFile;

/// A selection split by kind, each bucket in selection order
#[derive(Debug, Clone, Default)]
pub struct ClassifiedFiles {
    pub audio: Vec<RawFile>,
    pub images: Vec<RawFile>,
    pub lyrics: Vec<RawFile>,
}

/// Audio: `audio/*` MIME hint or a known audio extension
pub fn is_audio(file: &RawFile, audio_extensions: &[String]) -> bool {
    file.mime.starts_with("audio/")
        || super::extension(&file.name)
            .map(|ext| {
                audio_extensions
                    .iter()
                    .any(|known| known.trim_start_matches('.').eq_ignore_ascii_case(&ext))
            })
            .unwrap_or(false)
}

/// Image: `image/*` MIME hint only
pub fn is_image(file: &RawFile) -> bool {
    file.mime.starts_with("image/")
}

/// Lyrics: an extension with a registered lyrics parser
pub fn is_lyrics(file: &RawFile, registry: &LyricsRegistry) -> bool {
    registry.is_lyrics_file(&file.name)
}

/// Split a selection into buckets
///
/// Each predicate is evaluated on its own; a file matching none is ignored.
pub fn classify(
    files: &[RawFile],
    audio_extensions: &[String],
    registry: &LyricsRegistry,
) -> ClassifiedFiles {
    let mut classified = ClassifiedFiles::default();
    for file in files {
        if is_audio(file, audio_extensions) {
            classified.audio.push(file.clone());
        }
        if is_image(file) {
            classified.images.push(file.clone());
        }
        if is_lyrics(file, registry) {
            classified.lyrics.push(file.clone());
        }
    }
    classified
}

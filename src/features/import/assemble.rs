//! Track assembly
//!
//! Pairs one audio file with its cover and lyrics by file name.
//!
//! Cover priority:
//! 1. Image whose name matches the audio base name
//! 2. Folder cover (first image named like `cover` / `folder`)
//! 3. Configured placeholder URL

use crate::features::lyrics::{LyricLine, LyricsRegistry};
use crate::features::settings::ImportSettings;
use crate::model::{Track, TrackDuration, TrackId};

use super::base_name;
use super::progress::{IngestProgress, ProgressSender};
use super::source::RawFile;

/// Name fragments that mark a folder-level cover image
const FOLDER_COVER_HINTS: &[&str] = &["cover", "folder"];

/// Resolve the folder-level cover once per import
pub fn folder_cover_url(images: &[RawFile], fallback: &str) -> String {
    images
        .iter()
        .find(|image| {
            let name = image.name.to_lowercase();
            FOLDER_COVER_HINTS.iter().any(|hint| name.contains(hint))
        })
        .map(RawFile::object_url)
        .unwrap_or_else(|| fallback.to_string())
}

/// Builds tracks for one import run
pub struct TrackAssembler<'a> {
    settings: &'a ImportSettings,
    registry: &'a LyricsRegistry,
    images: &'a [RawFile],
    lyrics: &'a [RawFile],
    folder_cover_url: String,
    progress: Option<&'a ProgressSender>,
}

impl<'a> TrackAssembler<'a> {
    pub fn new(
        settings: &'a ImportSettings,
        registry: &'a LyricsRegistry,
        images: &'a [RawFile],
        lyrics: &'a [RawFile],
    ) -> Self {
        Self {
            settings,
            registry,
            images,
            lyrics,
            folder_cover_url: folder_cover_url(images, &settings.fallback_cover_url),
            progress: None,
        }
    }

    /// Report lyric read failures on this channel
    pub fn with_progress(mut self, progress: Option<&'a ProgressSender>) -> Self {
        self.progress = progress;
        self
    }

    pub fn folder_cover(&self) -> &str {
        &self.folder_cover_url
    }

    /// Build the track for `audio`
    ///
    /// Never fails: a missing or unreadable lyric file leaves the track
    /// without lyrics.
    pub async fn assemble(&self, id: TrackId, audio: &RawFile) -> Track {
        let base = base_name(&audio.name);
        let mode = self.settings.match_mode;

        let cover_url = self
            .images
            .iter()
            .find(|image| mode.matches(&image.name, base))
            .map(RawFile::object_url)
            .unwrap_or_else(|| self.folder_cover_url.clone());

        let lyrics = match self.lyrics.iter().find(|file| mode.matches(&file.name, base)) {
            Some(file) => self.load_lyrics(file).await,
            None => None,
        };

        Track {
            id,
            title: base.to_string(),
            artist: self.settings.placeholder_artist.clone(),
            album: self.settings.placeholder_album.clone(),
            cover_url,
            audio_url: audio.object_url(),
            duration: TrackDuration::Unknown,
            lyrics,
        }
    }

    async fn load_lyrics(&self, file: &RawFile) -> Option<Vec<LyricLine>> {
        let content = match file.read_text().await {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Error reading lyric file {}: {:#}", file.name, e);
                if let Some(tx) = self.progress {
                    let _ = tx.send(IngestProgress::LyricsFailed {
                        file_name: file.name.clone(),
                        error: e.to_string(),
                    });
                }
                return None;
            }
        };

        let lines = self.registry.parse(&file.name, &content);
        tracing::debug!("Loaded {} lyrics lines from {}", lines.len(), file.name);
        if lines.is_empty() { None } else { Some(lines) }
    }
}

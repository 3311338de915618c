//! Import pipeline: classify, then assemble every audio file concurrently
//!
//! Lyric reads for different tracks run at the same time on the calling
//! task; the result keeps the audio files' selection order.

use std::time::Instant;

use futures_util::future::join_all;

use crate::catalog::ingest_id_base;
use crate::features::lyrics::LyricsRegistry;
use crate::features::settings::ImportSettings;
use crate::model::{Track, TrackId};

use super::assemble::TrackAssembler;
use super::classify::classify;
use super::progress::{IngestProgress, ProgressSender};
use super::source::RawFile;

/// Turn a selection into a playlist with the default lyric formats
///
/// Returns an empty list when the selection holds no audio.
pub async fn ingest(files: &[RawFile], settings: &ImportSettings) -> Vec<Track> {
    ingest_with(files, settings, &LyricsRegistry::default(), None).await
}

/// Turn a selection into a playlist, reporting progress if a sender is given
pub async fn ingest_with(
    files: &[RawFile],
    settings: &ImportSettings,
    registry: &LyricsRegistry,
    progress: Option<ProgressSender>,
) -> Vec<Track> {
    let start_time = Instant::now();
    let classified = classify(files, &settings.audio_extensions, registry);
    let total = classified.audio.len();

    tracing::info!(
        "Import started: {} audio, {} images, {} lyric files",
        total,
        classified.images.len(),
        classified.lyrics.len()
    );
    if let Some(tx) = &progress {
        let _ = tx.send(IngestProgress::Started {
            total_tracks: total,
        });
    }

    let assembler = TrackAssembler::new(
        settings,
        registry,
        &classified.images,
        &classified.lyrics,
    )
    .with_progress(progress.as_ref());
    let id_base = ingest_id_base(settings.id_offset);

    let tracks = join_all(classified.audio.iter().enumerate().map(|(index, audio)| {
        let assembler = &assembler;
        let progress = progress.as_ref();
        async move {
            let track = assembler.assemble(id_base + index as TrackId, audio).await;
            if let Some(tx) = progress {
                let _ = tx.send(IngestProgress::Assembled {
                    index,
                    total,
                    title: track.title.clone(),
                    has_lyrics: track.has_lyrics(),
                });
            }
            track
        }
    }))
    .await;

    let duration_secs = start_time.elapsed().as_secs_f64();
    tracing::info!(
        "Import completed: {} tracks in {:.2}s",
        tracks.len(),
        duration_secs
    );
    if let Some(tx) = &progress {
        let _ = tx.send(IngestProgress::Completed {
            tracks: tracks.len(),
            duration_secs,
        });
    }

    tracks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_tracks;
    use crate::features::import::progress_channel;
    use std::collections::HashSet;

    fn mem(name: &str, mime: &str, content: &str) -> RawFile {
        RawFile::in_memory(name, mime, content.as_bytes().to_vec())
    }

    fn album() -> Vec<RawFile> {
        vec![
            mem("b-side.mp3", "audio/mpeg", ""),
            mem("cover.jpg", "image/jpeg", ""),
            mem("a-side.lrc", "", "[00:01.00]A one\n[00:02.00]A two"),
            mem("a-side.wav", "", ""),
            mem("b-side.srt", "", "1\n00:00:03,000 --> 00:00:04,000\nB one"),
            mem("liner notes.txt", "text/plain", "thanks"),
        ]
    }

    #[tokio::test]
    async fn test_ingest_keeps_selection_order() {
        let tracks = ingest(&album(), &ImportSettings::default()).await;

        let titles: Vec<&str> = tracks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["b-side", "a-side"]);
        assert_eq!(tracks[0].id, 100);
        assert_eq!(tracks[1].id, 101);
        assert_eq!(tracks[0].lyric_lines()[0].time, 3.0);
        assert_eq!(tracks[1].lyric_lines().len(), 2);
        assert!(tracks.iter().all(|t| t.cover_url == "memory:cover.jpg"));
        assert!(tracks.iter().all(|t| !t.audio_url.is_empty()));
    }

    #[tokio::test]
    async fn test_ingest_without_audio_is_empty() {
        let files = vec![
            mem("cover.jpg", "image/jpeg", ""),
            mem("song.lrc", "", "[00:01.00]orphan"),
        ];
        assert!(ingest(&files, &ImportSettings::default()).await.is_empty());
        assert!(ingest(&[], &ImportSettings::default()).await.is_empty());
    }

    #[tokio::test]
    async fn test_ingest_ids_avoid_seed_ids() {
        let settings = ImportSettings {
            id_offset: 0,
            ..ImportSettings::default()
        };
        let imported: HashSet<TrackId> = ingest(&album(), &settings)
            .await
            .iter()
            .map(|t| t.id)
            .collect();
        let seeded: HashSet<TrackId> = seed_tracks().iter().map(|t| t.id).collect();
        assert!(imported.is_disjoint(&seeded));

        let imported: HashSet<TrackId> = ingest(&album(), &ImportSettings::default())
            .await
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(imported.intersection(&seeded).count(), 0);
    }

    #[tokio::test]
    async fn test_ingest_is_repeatable() {
        let settings = ImportSettings::default();
        assert_eq!(ingest(&album(), &settings).await, ingest(&album(), &settings).await);
    }

    #[tokio::test]
    async fn test_ingest_reports_progress() {
        let (tx, mut rx) = progress_channel();
        let tracks = ingest_with(
            &album(),
            &ImportSettings::default(),
            &LyricsRegistry::default(),
            Some(tx),
        )
        .await;

        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }

        assert_eq!(events.first(), Some(&IngestProgress::Started { total_tracks: 2 }));
        let assembled = events
            .iter()
            .filter(|e| matches!(e, IngestProgress::Assembled { .. }))
            .count();
        assert_eq!(assembled, tracks.len());
        assert!(matches!(
            events.last(),
            Some(IngestProgress::Completed { tracks: 2, .. })
        ));
    }

    #[tokio::test]
    async fn test_ingest_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("01 song.mp3"), b"not really audio").unwrap();
        std::fs::write(dir.path().join("01 song.lrc"), "[00:10.00]Hello").unwrap();
        std::fs::write(dir.path().join("folder.png"), b"png").unwrap();

        let files = crate::features::import::raw_files_from_dir(dir.path()).unwrap();
        let tracks = ingest(&files, &ImportSettings::default()).await;

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title, "01 song");
        assert!(tracks[0].cover_url.ends_with("folder.png"));
        assert!(tracks[0].audio_url.starts_with("file://"));
        assert_eq!(tracks[0].lyric_lines()[0].text, "Hello");
    }
}

//! Turntable - headless host for the player core
//!
//! `turntable [FOLDER]` imports FOLDER (if given), prints the playlist and
//! asks the DJ for an intro to the first track.

use std::path::PathBuf;

use anyhow::Result;
use parking_lot::Mutex;

use turntable::catalog::seed_tracks;
use turntable::features::import::{IngestProgress, progress_channel, raw_files_from_dir};
use turntable::features::lyrics::LyricsRegistry;
use turntable::features::{DjService, Settings};
use turntable::player::{LoadOutcome, PlayerState, import_files_with};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let settings = Settings::load();
    let state = Mutex::new(PlayerState::new(seed_tracks(), settings.playback.volume));

    if let Some(folder) = std::env::args_os().nth(1).map(PathBuf::from) {
        let files = raw_files_from_dir(&folder).unwrap_or_else(|e| {
            tracing::error!("Could not read {}: {:#}", folder.display(), e);
            Vec::new()
        });
        let (tx, mut rx) = progress_channel();
        let reporter = tokio::spawn(async move {
            while let Some(update) = rx.recv().await {
                match update {
                    IngestProgress::Assembled {
                        index,
                        total,
                        title,
                        has_lyrics,
                    } => tracing::info!(
                        "[{}/{}] {}{}",
                        index + 1,
                        total,
                        title,
                        if has_lyrics { " (lyrics)" } else { "" }
                    ),
                    IngestProgress::LyricsFailed { file_name, error } => {
                        tracing::warn!("Skipped lyrics {}: {}", file_name, error)
                    }
                    _ => {}
                }
            }
        });

        let outcome = import_files_with(
            &state,
            &files,
            &settings.import,
            &LyricsRegistry::default(),
            Some(tx),
            |command| tracing::info!("Media host: {:?}", command),
        )
        .await;
        let _ = reporter.await;

        if let LoadOutcome::Loaded { tracks, command } = outcome {
            tracing::info!("Loaded {} tracks from {}", tracks, folder.display());
            tracing::info!("Media host: {:?}", command);
        }
    }

    let current = {
        let state = state.lock();
        for (i, track) in state.playlist().iter().enumerate() {
            let marker = if i == state.current_index() { ">" } else { " " };
            println!(
                "{} {:>4}  {} - {} [{}]",
                marker, track.id, track.artist, track.title, track.duration
            );
        }
        state.current_track().cloned()
    };

    if settings.dj.enabled {
        if let Some(track) = current {
            match DjService::new(settings.dj.clone()) {
                Ok(dj) => println!("\nDJ: {}", dj.intro(&track).await),
                Err(e) => tracing::error!("AI DJ unavailable: {:#}", e),
            }
        }
    }

    Ok(())
}

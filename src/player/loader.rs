//! Folder import into a shared player

use parking_lot::Mutex;

use crate::features::import::{ProgressSender, RawFile, ingest_with};
use crate::features::lyrics::LyricsRegistry;
use crate::features::settings::ImportSettings;

use super::events::PlayerCommand;
use super::state::{LoadOutcome, PlayerState};

/// Import `files` with the default lyric formats
///
/// See [`import_files_with`].
pub async fn import_files(
    state: &Mutex<PlayerState>,
    files: &[RawFile],
    settings: &ImportSettings,
    on_pause: impl FnOnce(PlayerCommand),
) -> LoadOutcome {
    import_files_with(
        state,
        files,
        settings,
        &LyricsRegistry::default(),
        None,
        on_pause,
    )
    .await
}

/// Import `files` and install the result unless a newer import started meanwhile
///
/// Playback pauses before any file is read; `on_pause` receives the command
/// for the media host when something was playing. The lock is only held to
/// take a ticket and to commit, never across the lyric reads.
pub async fn import_files_with(
    state: &Mutex<PlayerState>,
    files: &[RawFile],
    settings: &ImportSettings,
    registry: &LyricsRegistry,
    progress: Option<ProgressSender>,
    on_pause: impl FnOnce(PlayerCommand),
) -> LoadOutcome {
    let (ticket, pause) = state.lock().begin_ingest();
    if let Some(command) = pause {
        on_pause(command);
    }

    let tracks = ingest_with(files, settings, registry, progress).await;
    let outcome = state.lock().commit_ingest(ticket, tracks);
    if let Some(notice) = outcome.notice() {
        tracing::warn!("{}", notice);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_tracks;
    use crate::features::import::{IngestProgress, progress_channel};

    #[tokio::test]
    async fn test_import_files_installs_playlist() {
        let state = Mutex::new(PlayerState::new(seed_tracks(), 0.8));
        let files = vec![RawFile::in_memory("song.mp3", "audio/mpeg", Vec::<u8>::new())];

        let outcome = import_files(&state, &files, &ImportSettings::default(), |_| {}).await;
        assert!(matches!(outcome, LoadOutcome::Loaded { tracks: 1, .. }));
        assert_eq!(state.lock().playlist()[0].title, "song");
    }

    #[tokio::test]
    async fn test_import_without_audio_keeps_seed() {
        let state = Mutex::new(PlayerState::new(seed_tracks(), 0.8));
        let files = vec![RawFile::in_memory("cover.jpg", "image/jpeg", Vec::<u8>::new())];

        let outcome = import_files(&state, &files, &ImportSettings::default(), |_| {}).await;
        assert_eq!(outcome, LoadOutcome::Empty);
        assert_eq!(state.lock().playlist().len(), 4);
    }

    #[tokio::test]
    async fn test_import_pauses_host_while_playing() {
        let state = Mutex::new(PlayerState::new(seed_tracks(), 0.8));
        assert_eq!(state.lock().play(), Some(PlayerCommand::Resume));
        let files = vec![RawFile::in_memory("cover.jpg", "image/jpeg", Vec::<u8>::new())];

        let mut sent = Vec::new();
        let outcome =
            import_files(&state, &files, &ImportSettings::default(), |cmd| sent.push(cmd)).await;

        assert_eq!(outcome, LoadOutcome::Empty);
        assert_eq!(sent, vec![PlayerCommand::Pause]);
        assert!(!state.lock().is_playing());
        // Host and state agree, so resuming is a real transition
        assert_eq!(state.lock().toggle_play_pause(), Some(PlayerCommand::Resume));
    }

    #[tokio::test]
    async fn test_import_while_paused_sends_nothing() {
        let state = Mutex::new(PlayerState::new(seed_tracks(), 0.8));
        let files = vec![RawFile::in_memory("song.mp3", "audio/mpeg", Vec::<u8>::new())];

        let mut sent = Vec::new();
        import_files(&state, &files, &ImportSettings::default(), |cmd| sent.push(cmd)).await;
        assert!(sent.is_empty());
    }

    #[tokio::test]
    async fn test_import_files_with_reports_progress() {
        let state = Mutex::new(PlayerState::new(seed_tracks(), 0.8));
        let files = vec![
            RawFile::in_memory("a.mp3", "audio/mpeg", Vec::<u8>::new()),
            RawFile::in_memory("b.mp3", "audio/mpeg", Vec::<u8>::new()),
        ];
        let (tx, mut rx) = progress_channel();

        let outcome = import_files_with(
            &state,
            &files,
            &ImportSettings::default(),
            &LyricsRegistry::default(),
            Some(tx),
            |_| {},
        )
        .await;
        assert!(matches!(outcome, LoadOutcome::Loaded { tracks: 2, .. }));

        let mut updates = Vec::new();
        while let Some(update) = rx.recv().await {
            updates.push(update);
        }
        assert_eq!(updates.first(), Some(&IngestProgress::Started { total_tracks: 2 }));
        assert!(matches!(
            updates.last(),
            Some(IngestProgress::Completed { tracks: 2, .. })
        ));
    }

    #[tokio::test]
    async fn test_concurrent_imports_later_one_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("slow.mp3"), b"x").unwrap();
        std::fs::write(dir.path().join("slow.lrc"), "[00:01.00]slow").unwrap();
        let slow = crate::features::import::raw_files_from_dir(dir.path()).unwrap();
        let fast = vec![RawFile::in_memory("fast.mp3", "audio/mpeg", Vec::<u8>::new())];

        let state = Mutex::new(PlayerState::new(seed_tracks(), 0.8));
        let settings = ImportSettings::default();
        let (first, second) = tokio::join!(
            import_files(&state, &slow, &settings, |_| {}),
            import_files(&state, &fast, &settings, |_| {})
        );

        assert!(matches!(second, LoadOutcome::Loaded { tracks: 1, .. }));
        assert_ne!(first, LoadOutcome::Empty);
        let state = state.lock();
        assert_eq!(state.playlist().len(), 1);
        assert_eq!(state.playlist()[0].title, "fast");
    }
}

//! Player state and transitions

use crate::features::lyrics::current_and_next;
use crate::model::{Track, TrackId};

use super::events::{PlaybackEvent, PlayerCommand};

/// Notice for the user when an import found nothing playable
pub const NO_AUDIO_NOTICE: &str = "No audio files found in this folder.";

/// Marks one import run; only the most recent ticket may commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestTicket(u64);

/// Result of committing an import
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Playlist replaced; the host should run `command`
    Loaded { tracks: usize, command: PlayerCommand },
    /// No audio in the selection; the previous playlist is untouched
    Empty,
    /// A later import started first; this result was discarded
    Stale,
}

impl LoadOutcome {
    /// Message to surface to the user, if any
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            LoadOutcome::Empty => Some(NO_AUDIO_NOTICE),
            _ => None,
        }
    }
}

/// Everything the player knows about playback
#[derive(Debug, Clone)]
pub struct PlayerState {
    playlist: Vec<Track>,
    current_index: usize,
    is_playing: bool,
    current_time: f64,
    duration: f64,
    volume: f32,
    ingest_generation: u64,
}

impl PlayerState {
    pub fn new(playlist: Vec<Track>, volume: f32) -> Self {
        Self {
            playlist,
            current_index: 0,
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume: volume.clamp(0.0, 1.0),
            ingest_generation: 0,
        }
    }

    pub fn playlist(&self) -> &[Track] {
        &self.playlist
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.playlist.get(self.current_index)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Position in seconds
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Media length in seconds, 0 until the host reports it
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Caption pair for the lyric display at the current position
    pub fn current_lyrics(&self) -> Option<(&str, &str)> {
        let track = self.current_track()?;
        if !track.has_lyrics() {
            return None;
        }
        Some(current_and_next(track.lyric_lines(), self.current_time))
    }

    /// Command that (re)loads the current track
    pub fn load_command(&self) -> Option<PlayerCommand> {
        self.current_track().map(|track| PlayerCommand::Load {
            audio_url: track.audio_url.clone(),
            autoplay: self.is_playing,
        })
    }

    pub fn play(&mut self) -> Option<PlayerCommand> {
        if self.is_playing || self.current_track().is_none() {
            return None;
        }
        self.is_playing = true;
        Some(PlayerCommand::Resume)
    }

    pub fn pause(&mut self) -> Option<PlayerCommand> {
        if !self.is_playing {
            return None;
        }
        self.is_playing = false;
        Some(PlayerCommand::Pause)
    }

    pub fn toggle_play_pause(&mut self) -> Option<PlayerCommand> {
        if self.is_playing {
            self.pause()
        } else {
            self.play()
        }
    }

    /// Jump to `secs`, clamped to the known media length
    pub fn seek(&mut self, secs: f64) -> Option<PlayerCommand> {
        if !secs.is_finite() || self.current_track().is_none() {
            return None;
        }
        let mut target = secs.max(0.0);
        if self.duration > 0.0 {
            target = target.min(self.duration);
        }
        self.current_time = target;
        Some(PlayerCommand::Seek {
            position_secs: target,
        })
    }

    pub fn set_volume(&mut self, volume: f32) -> Option<PlayerCommand> {
        if !volume.is_finite() {
            return None;
        }
        self.volume = volume.clamp(0.0, 1.0);
        Some(PlayerCommand::SetVolume {
            volume: self.volume,
        })
    }

    /// Advance, wrapping to the first track
    pub fn next(&mut self) -> Option<PlayerCommand> {
        let len = self.playlist.len();
        if len == 0 {
            return None;
        }
        self.switch_to((self.current_index + 1) % len)
    }

    /// Go back, wrapping to the last track
    pub fn prev(&mut self) -> Option<PlayerCommand> {
        let len = self.playlist.len();
        if len == 0 {
            return None;
        }
        self.switch_to((self.current_index + len - 1) % len)
    }

    /// Jump to the track with `id`
    pub fn select(&mut self, id: TrackId) -> Option<PlayerCommand> {
        let idx = self.playlist.iter().position(|track| track.id == id)?;
        self.switch_to(idx)
    }

    fn switch_to(&mut self, idx: usize) -> Option<PlayerCommand> {
        self.current_index = idx;
        self.is_playing = true;
        self.current_time = 0.0;
        self.duration = 0.0;
        self.load_command()
    }

    /// Replace the playlist without starting playback
    ///
    /// An empty list is ignored.
    pub fn load_playlist(&mut self, tracks: Vec<Track>) -> Option<PlayerCommand> {
        if tracks.is_empty() {
            return None;
        }
        self.replace_playlist(tracks, false)
    }

    fn replace_playlist(&mut self, tracks: Vec<Track>, autoplay: bool) -> Option<PlayerCommand> {
        self.playlist = tracks;
        self.current_index = 0;
        self.current_time = 0.0;
        self.duration = 0.0;
        self.is_playing = autoplay;
        self.load_command()
    }

    /// Start an import, pausing playback; any import started earlier becomes stale
    ///
    /// Returns the ticket for [`commit_ingest`](Self::commit_ingest) and the
    /// pause command if something was playing.
    pub fn begin_ingest(&mut self) -> (IngestTicket, Option<PlayerCommand>) {
        self.ingest_generation += 1;
        (IngestTicket(self.ingest_generation), self.pause())
    }

    /// Install an import's tracks if `ticket` is still the latest
    pub fn commit_ingest(&mut self, ticket: IngestTicket, tracks: Vec<Track>) -> LoadOutcome {
        if ticket.0 != self.ingest_generation {
            tracing::debug!(
                "Discarding stale import {} (latest {})",
                ticket.0,
                self.ingest_generation
            );
            return LoadOutcome::Stale;
        }
        if tracks.is_empty() {
            return LoadOutcome::Empty;
        }

        let count = tracks.len();
        match self.replace_playlist(tracks, true) {
            Some(command) => LoadOutcome::Loaded {
                tracks: count,
                command,
            },
            None => LoadOutcome::Empty,
        }
    }

    /// Apply a media host event
    pub fn handle_event(&mut self, event: PlaybackEvent) -> Option<PlayerCommand> {
        match event {
            PlaybackEvent::TimeUpdate { current_secs } => {
                if current_secs.is_finite() {
                    self.current_time = current_secs.max(0.0);
                }
                None
            }
            PlaybackEvent::LoadedMetadata { duration_secs } => {
                if duration_secs.is_finite() && duration_secs >= 0.0 {
                    self.duration = duration_secs;
                }
                let idx = self.current_index;
                if let Some(track) = self.playlist.get_mut(idx) {
                    if track.resolve_duration(duration_secs) {
                        tracing::debug!("Resolved duration of {} to {}", track.title, track.duration);
                    }
                }
                None
            }
            PlaybackEvent::Ended => self.next(),
        }
    }
}

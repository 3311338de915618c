//! Playlist models
//!
//! A [`Track`] is one playable unit: metadata, media references and an
//! optional lyric timeline.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::features::lyrics::LyricLine;
use crate::utils::format_time;

/// Track identifier, unique within a playlist
pub type TrackId = u64;

/// Track length as shown in the playlist
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackDuration {
    /// Not known until the media reports its length
    #[default]
    Unknown,
    /// Whole seconds
    Known(u64),
}

impl fmt::Display for TrackDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackDuration::Unknown => write!(f, "0:00"),
            TrackDuration::Known(secs) => write!(f, "{}", format_time(*secs as f64)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub cover_url: String,
    pub audio_url: String,
    pub duration: TrackDuration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<Vec<LyricLine>>,
}

impl Track {
    /// Fill in the real media length, once
    ///
    /// Returns `false` when the duration was already known or the reported
    /// length is not a usable number.
    pub fn resolve_duration(&mut self, secs: f64) -> bool {
        if self.duration != TrackDuration::Unknown || !secs.is_finite() || secs < 0.0 {
            return false;
        }
        self.duration = TrackDuration::Known(secs.floor() as u64);
        true
    }

    pub fn has_lyrics(&self) -> bool {
        self.lyrics.as_ref().is_some_and(|l| !l.is_empty())
    }

    pub fn lyric_lines(&self) -> &[LyricLine] {
        self.lyrics.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> Track {
        Track {
            id: 100,
            title: "Song".into(),
            artist: "Artist".into(),
            album: "Album".into(),
            cover_url: "cover".into(),
            audio_url: "audio".into(),
            duration: TrackDuration::Unknown,
            lyrics: None,
        }
    }

    #[test]
    fn test_duration_display() {
        assert_eq!(TrackDuration::Unknown.to_string(), "0:00");
        assert_eq!(TrackDuration::Known(150).to_string(), "2:30");
        assert_eq!(TrackDuration::Known(9).to_string(), "0:09");
        assert_eq!(TrackDuration::Known(3725).to_string(), "62:05");
    }

    #[test]
    fn test_resolve_duration_only_once() {
        let mut t = track();
        assert!(t.resolve_duration(187.9));
        assert_eq!(t.duration, TrackDuration::Known(187));
        assert!(!t.resolve_duration(42.0));
        assert_eq!(t.duration.to_string(), "3:07");
    }

    #[test]
    fn test_resolve_duration_rejects_nan() {
        let mut t = track();
        assert!(!t.resolve_duration(f64::NAN));
        assert!(!t.resolve_duration(f64::INFINITY));
        assert_eq!(t.duration, TrackDuration::Unknown);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(track()).unwrap();
        assert_eq!(json["coverUrl"], "cover");
        assert_eq!(json["audioUrl"], "audio");
        assert!(json.get("lyrics").is_none());
    }
}

//! Built-in seed playlist shown before any folder import

use crate::model::{Track, TrackDuration, TrackId};

/// Stand-in cover used when a folder import finds no image at all
pub const PLACEHOLDER_COVER_URL: &str = "https://picsum.photos/id/1016/500/500";

struct SeedTrack {
    id: TrackId,
    title: &'static str,
    artist: &'static str,
    album: &'static str,
    cover_url: &'static str,
    audio_url: &'static str,
    duration_secs: u64,
}

const SEED_TRACKS: &[SeedTrack] = &[
    SeedTrack {
        id: 1,
        title: "Moonlight Sonata (lofi flip)",
        artist: "Beethoven x Chill",
        album: "Classics Reimagined",
        cover_url: "https://picsum.photos/id/1016/500/500",
        audio_url: "https://cdn.pixabay.com/audio/2022/05/27/audio_1808fbf07a.mp3",
        duration_secs: 150,
    },
    SeedTrack {
        id: 2,
        title: "Neon Highway",
        artist: "Synthwave Boy",
        album: "Nightcall",
        cover_url: "https://picsum.photos/id/1040/500/500",
        audio_url: "https://cdn.pixabay.com/audio/2022/03/15/audio_13a682b13c.mp3",
        duration_secs: 195,
    },
    SeedTrack {
        id: 3,
        title: "Cafe de Paris",
        artist: "Jazz Collective",
        album: "Morning Brew",
        cover_url: "https://picsum.photos/id/1082/500/500",
        audio_url: "https://cdn.pixabay.com/audio/2020/05/25/audio_33a85b98cb.mp3",
        duration_secs: 165,
    },
    SeedTrack {
        id: 4,
        title: "Deep Focus",
        artist: "Brainwaves",
        album: "Productivity Volume 1",
        cover_url: "https://picsum.photos/id/160/500/500",
        audio_url: "https://cdn.pixabay.com/audio/2022/01/18/audio_d0a13f69d0.mp3",
        duration_secs: 240,
    },
];

/// The static seed playlist
pub fn seed_tracks() -> Vec<Track> {
    SEED_TRACKS
        .iter()
        .map(|seed| Track {
            id: seed.id,
            title: seed.title.to_string(),
            artist: seed.artist.to_string(),
            album: seed.album.to_string(),
            cover_url: seed.cover_url.to_string(),
            audio_url: seed.audio_url.to_string(),
            duration: TrackDuration::Known(seed.duration_secs),
            lyrics: None,
        })
        .collect()
}

/// First ID an import may hand out without touching the seed ID space
pub fn ingest_id_base(configured_offset: TrackId) -> TrackId {
    let past_seeds = SEED_TRACKS.iter().map(|s| s.id).max().map_or(0, |max| max + 1);
    configured_offset.max(past_seeds)
}

//! Messages exchanged with the media host

/// Events reported by the media host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackEvent {
    /// Playback position moved
    TimeUpdate { current_secs: f64 },
    /// Media length became known
    LoadedMetadata { duration_secs: f64 },
    /// The current track finished
    Ended,
}

/// Instructions for the media host
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    /// Switch the source; start it right away when `autoplay` is set
    Load { audio_url: String, autoplay: bool },
    Pause,
    Resume,
    /// Jump to a position in seconds
    Seek { position_secs: f64 },
    /// Volume (0.0 - 1.0)
    SetVolume { volume: f32 },
}

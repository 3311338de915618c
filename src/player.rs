//! Player state machine
//!
//! ```text
//! Host (media element) --[PlaybackEvent]--> PlayerState
//! Host                 <--[PlayerCommand]-- PlayerState
//! ```
//!
//! All playback state lives in one [`PlayerState`]; every operation is a
//! plain method that returns what the media host should do next.

mod events;
mod loader;
mod state;

pub use events::{PlaybackEvent, PlayerCommand};
pub use loader::{import_files, import_files_with};
pub use state::{IngestTicket, LoadOutcome, NO_AUDIO_NOTICE, PlayerState};

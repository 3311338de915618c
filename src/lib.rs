//! Turntable - music player core
//!
//! Folder import with cover and lyric pairing, LRC/SRT parsing, and the
//! playback state a host UI drives.

pub mod catalog;
pub mod features;
pub mod model;
pub mod player;
pub mod utils;

//! Feature modules
//!
//! Each feature module contains the core logic for a specific functionality.

pub mod dj;
pub mod import;
pub mod lyrics;
pub mod settings;

pub use dj::DjService;
pub use settings::{DjSettings, ImportSettings, MatchMode, PlaybackSettings, Settings};

//! Lyrics module - parsing and playback lookup
//!
//! - `parser`: LRC / SRT parsing behind an extension registry
//! - `cursor`: which caption is active at a playback position

mod cursor;
pub mod parser;

pub use cursor::*;
pub use parser::*;

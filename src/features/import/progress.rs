//! Import progress reporting

use tokio::sync::mpsc;

/// Progress update sent during an import
#[derive(Debug, Clone, PartialEq)]
pub enum IngestProgress {
    /// Classification done, assembly starting
    Started { total_tracks: usize },
    /// A track was assembled (reported in completion order)
    Assembled {
        index: usize,
        total: usize,
        title: String,
        has_lyrics: bool,
    },
    /// A lyric file could not be read; the track continues without lyrics
    LyricsFailed { file_name: String, error: String },
    /// Import finished
    Completed { tracks: usize, duration_secs: f64 },
}

/// Progress sender for reporting import updates
pub type ProgressSender = mpsc::UnboundedSender<IngestProgress>;
/// Progress receiver for receiving import updates
pub type ProgressReceiver = mpsc::UnboundedReceiver<IngestProgress>;

/// Create a new progress channel
pub fn progress_channel() -> (ProgressSender, ProgressReceiver) {
    mpsc::unbounded_channel()
}

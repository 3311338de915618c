//! Playback-time lookup over a parsed lyric timeline

use super::parser::LyricLine;

/// Placeholder caption shown while no line is active
pub const IDLE_CAPTION: &str = "...";

/// Index of the line active at `time` seconds
///
/// A line is active from its own start until the next line's start. Lines
/// are scanned in source order, so out-of-order timestamps behave as written.
pub fn active_line_index(lines: &[LyricLine], time: f64) -> Option<usize> {
    lines.iter().enumerate().position(|(idx, line)| {
        time >= line.time && lines.get(idx + 1).is_none_or(|next| time < next.time)
    })
}

/// Current and upcoming caption for a lyric display
pub fn current_and_next(lines: &[LyricLine], time: f64) -> (&str, &str) {
    match active_line_index(lines, time) {
        Some(idx) => (
            lines[idx].text.as_str(),
            lines.get(idx + 1).map(|l| l.text.as_str()).unwrap_or(""),
        ),
        None => (IDLE_CAPTION, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines() -> Vec<LyricLine> {
        vec![
            LyricLine::new(5.0, "one"),
            LyricLine::new(10.0, "two"),
            LyricLine::new(15.0, "three"),
        ]
    }

    #[test]
    fn test_active_line_index() {
        let lines = lines();
        assert_eq!(active_line_index(&lines, 0.0), None);
        assert_eq!(active_line_index(&lines, 5.0), Some(0));
        assert_eq!(active_line_index(&lines, 9.99), Some(0));
        assert_eq!(active_line_index(&lines, 10.0), Some(1));
        assert_eq!(active_line_index(&lines, 600.0), Some(2));
        assert_eq!(active_line_index(&[], 3.0), None);
    }

    #[test]
    fn test_current_and_next() {
        let lines = lines();
        assert_eq!(current_and_next(&lines, 1.0), ("...", ""));
        assert_eq!(current_and_next(&lines, 11.0), ("two", "three"));
        assert_eq!(current_and_next(&lines, 20.0), ("three", ""));
    }
}

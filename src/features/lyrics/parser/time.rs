//! Compact timestamp parsing shared by the lyric formats
//!
//! Accepts `MM:SS[.fff]` and the subtitle-style `MM:SS,ms`.

/// Parse a `MM:SS[.fff]` or `MM:SS,ms` token into seconds
///
/// Minutes are not capped. Anything that does not parse yields `0.0` so a
/// broken line never aborts the rest of the file.
pub fn parse_time(token: &str) -> f64 {
    let mut parts = token.trim().split(':');
    let (Some(minutes), Some(seconds)) = (parts.next(), parts.next()) else {
        return 0.0;
    };

    let Ok(minutes) = minutes.trim().parse::<u64>() else {
        return 0.0;
    };
    let Ok(seconds) = seconds.trim().replacen(',', ".", 1).parse::<f64>() else {
        return 0.0;
    };
    if !seconds.is_finite() || seconds < 0.0 {
        return 0.0;
    }

    minutes as f64 * 60.0 + seconds
}

/// Parse a full subtitle timestamp `HH:MM:SS,ms` into seconds
pub fn parse_clock_time(token: &str) -> f64 {
    let token = token.trim();
    let Some((hours, rest)) = token.split_once(':') else {
        return 0.0;
    };
    let Ok(hours) = hours.parse::<u64>() else {
        return 0.0;
    };
    hours as f64 * 3600.0 + parse_time(rest)
}

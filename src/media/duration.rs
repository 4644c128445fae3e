//! Playback time formatting.

/// Format a microsecond count as `MM:SS`.
///
/// Minutes are not wrapped into hours, so a 75 minute track is `75:00`.
pub fn format_duration(micros: u64) -> String {
    let seconds = micros / 1_000_000;
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Playback progress as a truncated percentage. Zero when the duration is unknown.
pub fn progress_percent(position: u64, duration: u64) -> u64 {
    if duration == 0 {
        return 0;
    }
    (position as f64 / duration as f64 * 100.0) as u64
}

//! The track info panel printed to the right of the artwork.

use crate::media::MediaInfo;

const ACCENT: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Diamond separator between panel sections.
fn separator() -> String {
    let bar = "\u{2500}".repeat(10);
    format!("  {ACCENT}{bar} \u{25c6} {bar}{RESET}")
}

/// `  label ~ value` with the label in the accent color.
fn field(label: &str, value: &str) -> String {
    format!("  {ACCENT}{label}{RESET} ~ {value}")
}

/// Eight background-colored blocks starting at SGR code `base` (40 or 100).
fn swatch_row(base: u8) -> String {
    let blocks: String = (0..8)
        .map(|i| format!("\x1b[{}m   {RESET}", base + i))
        .collect();
    format!("  {blocks}")
}

/// Build the panel lines for `info`.
///
/// Status, loop and backend values are lowercased. With `swatches` set, the
/// bright and normal background color rows close the panel.
pub fn build(info: &MediaInfo, swatches: bool) -> Vec<String> {
    let duration = format!(
        "{} / {} ({ACCENT}{}%{RESET})",
        info.position_formatted(),
        info.duration_formatted,
        info.progress_percent()
    );

    let mut lines = vec![
        format!(
            "  {ACCENT}{}{RESET}#{ACCENT}{}{RESET} ",
            info.current_user, info.player_name
        ),
        String::new(),
        separator(),
        "  ".to_string(),
        field("status", &info.status.to_lowercase()),
        String::new(),
        separator(),
        String::new(),
        field("title", &info.title),
        field("album", &info.album),
        field("artist", &info.artist),
        field("duration", &duration),
        String::new(),
        separator(),
        String::new(),
        field("vol", &info.volume),
        field("loop", &info.loop_status.to_lowercase()),
        field("shuffle", &info.shuffle_status),
        field("artwork", &info.art_url),
        String::new(),
        separator(),
        String::new(),
        field("audio", &info.audio_backend.name().to_lowercase()),
    ];

    if swatches {
        lines.push(String::new());
        lines.push(swatch_row(100));
        lines.push(swatch_row(40));
    }

    lines
}

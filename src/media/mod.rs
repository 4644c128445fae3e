//! Now-playing metadata gathered from `playerctl` and the system mixer.
//!
//! Every field falls back to a human-readable placeholder when the query
//! fails, so collecting never errors. The artwork URL falls back to an empty
//! string, which the converter rejects as an empty URI.

mod backend;
mod command;
mod duration;

pub use backend::{parse_amixer_volume, parse_pactl_volume, parse_wpctl_volume, AudioBackend};
pub use command::{CommandRunner, SystemRunner};
pub use duration::{format_duration, progress_percent};

pub const DEFAULT_PLAYER_NAME: &str = "No player";
pub const DEFAULT_ART_URL: &str = "";
pub const DEFAULT_TITLE: &str = "No title found";
pub const DEFAULT_ARTIST: &str = "No artist found";
pub const DEFAULT_ALBUM: &str = "No album found";
pub const DEFAULT_DURATION: &str = "00:00";
pub const DEFAULT_VOLUME: &str = "Unknown";
pub const DEFAULT_URL: &str = "No URL found";
pub const DEFAULT_STATUS: &str = "No status";
pub const DEFAULT_LOOP: &str = "Unknown";
pub const DEFAULT_SHUFFLE: &str = "Unknown";
pub const DEFAULT_USER: &str = "No user";

/// Snapshot of the current player and mixer state.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaInfo {
    pub player_name: String,
    pub art_url: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration_formatted: String,
    pub volume: String,
    /// Playback position in microseconds.
    pub position: u64,
    /// Track length in microseconds.
    pub duration: u64,
    pub url: String,
    pub status: String,
    pub loop_status: String,
    pub shuffle_status: String,
    pub current_user: String,
    pub audio_backend: AudioBackend,
}

impl Default for MediaInfo {
    fn default() -> Self {
        Self {
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            art_url: DEFAULT_ART_URL.to_string(),
            title: DEFAULT_TITLE.to_string(),
            artist: DEFAULT_ARTIST.to_string(),
            album: DEFAULT_ALBUM.to_string(),
            duration_formatted: DEFAULT_DURATION.to_string(),
            volume: DEFAULT_VOLUME.to_string(),
            position: 0,
            duration: 0,
            url: DEFAULT_URL.to_string(),
            status: DEFAULT_STATUS.to_string(),
            loop_status: DEFAULT_LOOP.to_string(),
            shuffle_status: DEFAULT_SHUFFLE.to_string(),
            current_user: DEFAULT_USER.to_string(),
            audio_backend: AudioBackend::Alsa,
        }
    }
}

/// Queries `playerctl`, optionally pinned to one player.
struct Playerctl<'a> {
    runner: &'a dyn CommandRunner,
    player: Option<&'a str>,
}

impl Playerctl<'_> {
    fn run(&self, args: &[&str]) -> Option<String> {
        let mut full: Vec<&str> = Vec::with_capacity(args.len() + 2);
        if let Some(player) = self.player {
            full.extend(["--player", player]);
        }
        full.extend_from_slice(args);

        self.runner
            .output("playerctl", &full)
            .filter(|out| !out.is_empty())
    }

    fn metadata(&self, format: &str) -> Option<String> {
        self.run(&["metadata", "--format", format])
    }
}

impl MediaInfo {
    /// Collect metadata from the system, using `player` if given.
    pub fn collect(runner: &dyn CommandRunner, player: Option<&str>) -> Self {
        let ctl = Playerctl { runner, player };
        let defaults = MediaInfo::default();
        let text = |value: Option<String>, fallback: String| value.unwrap_or(fallback);

        let duration = ctl
            .metadata("{{ mpris:length }}")
            .and_then(|raw| raw.parse::<u64>().ok());
        let position = ctl
            .metadata("{{ position }}")
            .and_then(|raw| raw.parse::<u64>().ok());

        let audio_backend = AudioBackend::detect(runner);
        let volume = audio_backend.volume(runner);
        log::debug!("Audio backend: {}, volume: {:?}", audio_backend, volume);

        MediaInfo {
            player_name: text(ctl.metadata("{{ playerName }}"), defaults.player_name),
            art_url: text(ctl.metadata("{{ mpris:artUrl }}"), defaults.art_url),
            title: text(ctl.metadata("{{ trunc(title, 33) }}"), defaults.title),
            artist: text(ctl.metadata("{{ trunc(artist, 32) }}"), defaults.artist),
            album: text(ctl.metadata("{{ trunc(album, 33) }}"), defaults.album),
            duration_formatted: duration
                .map(format_duration)
                .unwrap_or(defaults.duration_formatted),
            volume: text(volume, defaults.volume),
            position: position.unwrap_or(0),
            duration: duration.unwrap_or(0),
            url: text(ctl.metadata("{{ trunc(xesam:url, 35) }}"), defaults.url),
            status: text(ctl.run(&["status"]), defaults.status),
            loop_status: text(ctl.run(&["loop"]), defaults.loop_status),
            shuffle_status: text(ctl.run(&["shuffle"]), defaults.shuffle_status),
            current_user: current_user().unwrap_or(defaults.current_user),
            audio_backend,
        }
    }

    /// Formatted playback position.
    pub fn position_formatted(&self) -> String {
        format_duration(self.position)
    }

    pub fn progress_percent(&self) -> u64 {
        progress_percent(self.position, self.duration)
    }
}

fn current_user() -> Option<String> {
    ["USER", "LOGNAME"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|name| !name.is_empty())
}

//! Audio server detection and volume queries.
//!
//! The volume tools print human-oriented text, so each one gets its own
//! parser. They are kept separate from the command calls so they can be
//! tested against captured output.

use regex::Regex;

use super::command::CommandRunner;

/// The sound server the volume is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioBackend {
    PipeWire,
    PulseAudio,
    Alsa,
}

impl AudioBackend {
    /// Detect the running sound server.
    ///
    /// PipeWire wins over PulseAudio (pipewire-pulse also answers `pactl`),
    /// and ALSA is the fallback when neither daemon is running.
    pub fn detect(runner: &dyn CommandRunner) -> Self {
        if runner.succeeds("pgrep", &["-x", "pipewire"]) {
            AudioBackend::PipeWire
        } else if runner.succeeds("pgrep", &["-x", "pulseaudio"]) {
            AudioBackend::PulseAudio
        } else {
            AudioBackend::Alsa
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AudioBackend::PipeWire => "PipeWire",
            AudioBackend::PulseAudio => "PulseAudio",
            AudioBackend::Alsa => "ALSA",
        }
    }

    /// Query the default sink volume as `N%`.
    pub fn volume(&self, runner: &dyn CommandRunner) -> Option<String> {
        match self {
            AudioBackend::PipeWire => runner
                .output("wpctl", &["get-volume", "@DEFAULT_AUDIO_SINK@"])
                .and_then(|out| parse_wpctl_volume(&out)),
            AudioBackend::PulseAudio => runner
                .output("pactl", &["get-sink-volume", "@DEFAULT_SINK@"])
                .and_then(|out| parse_pactl_volume(&out)),
            AudioBackend::Alsa => runner
                .output("amixer", &["get", "Master"])
                .and_then(|out| parse_amixer_volume(&out)),
        }
    }
}

impl std::fmt::Display for AudioBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn first_capture<'a>(pattern: &str, text: &'a str) -> Option<&'a str> {
    let re = Regex::new(pattern).ok()?;
    re.captures(text)?.get(1).map(|m| m.as_str())
}

/// Parse `wpctl get-volume` output, e.g. `Volume: 0.45 [MUTED]`.
pub fn parse_wpctl_volume(output: &str) -> Option<String> {
    let value: f64 = first_capture(r"(\d+\.\d+)", output)?.parse().ok()?;
    Some(format!("{}%", (value * 100.0) as i64))
}

/// Parse `pactl get-sink-volume` output; the first channel's percentage wins.
pub fn parse_pactl_volume(output: &str) -> Option<String> {
    first_capture(r"(\d+)%", output).map(|v| format!("{}%", v))
}

/// Parse `amixer get Master` output, e.g. `Mono: Playback 39 [61%] [-23.25dB] [on]`.
pub fn parse_amixer_volume(output: &str) -> Option<String> {
    first_capture(r"\[(\d+)%\]", output).map(|v| format!("{}%", v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct FakeRunner {
        running: HashSet<&'static str>,
        output: Option<&'static str>,
    }

    impl CommandRunner for FakeRunner {
        fn output(&self, _program: &str, _args: &[&str]) -> Option<String> {
            self.output.map(str::to_string)
        }

        fn succeeds(&self, program: &str, args: &[&str]) -> bool {
            program == "pgrep" && args.last().is_some_and(|p| self.running.iter().any(|r| r == p))
        }
    }

    fn runner(running: &[&'static str], output: Option<&'static str>) -> FakeRunner {
        FakeRunner {
            running: running.iter().copied().collect(),
            output,
        }
    }

    #[test]
    fn test_detect_prefers_pipewire() {
        let r = runner(&["pipewire", "pulseaudio"], None);
        assert_eq!(AudioBackend::detect(&r), AudioBackend::PipeWire);
    }

    #[test]
    fn test_detect_pulseaudio() {
        let r = runner(&["pulseaudio"], None);
        assert_eq!(AudioBackend::detect(&r), AudioBackend::PulseAudio);
    }

    #[test]
    fn test_detect_falls_back_to_alsa() {
        let r = runner(&[], None);
        assert_eq!(AudioBackend::detect(&r), AudioBackend::Alsa);
    }

    #[test]
    fn test_backend_names() {
        assert_eq!(AudioBackend::PipeWire.to_string(), "PipeWire");
        assert_eq!(AudioBackend::PulseAudio.to_string(), "PulseAudio");
        assert_eq!(AudioBackend::Alsa.to_string(), "ALSA");
    }

    #[test]
    fn test_parse_wpctl() {
        assert_eq!(parse_wpctl_volume("Volume: 0.45").as_deref(), Some("45%"));
        assert_eq!(parse_wpctl_volume("Volume: 1.00 [MUTED]").as_deref(), Some("100%"));
        assert_eq!(parse_wpctl_volume("Volume: 0.50").as_deref(), Some("50%"));
        assert_eq!(parse_wpctl_volume("no volume here"), None);
    }

    #[test]
    fn test_parse_pactl() {
        let out = "Volume: front-left: 42597 /  65% / -11.23 dB,   front-right: 39321 /  60% / -13.31 dB\n        balance -0.08";
        assert_eq!(parse_pactl_volume(out).as_deref(), Some("65%"));
        assert_eq!(parse_pactl_volume("Volume: muted"), None);
    }

    #[test]
    fn test_parse_amixer() {
        let out = "Simple mixer control 'Master',0\n  Capabilities: pvolume pvolume-joined pswitch pswitch-joined\n  Playback channels: Mono\n  Limits: Playback 0 - 87\n  Mono: Playback 53 [61%] [-25.50dB] [on]";
        assert_eq!(parse_amixer_volume(out).as_deref(), Some("61%"));
        assert_eq!(parse_amixer_volume("Mono: Playback 53 61%"), None);
    }

    #[test]
    fn test_volume_uses_backend_parser() {
        let r = runner(&[], Some("Volume: 0.30"));
        assert_eq!(AudioBackend::PipeWire.volume(&r).as_deref(), Some("30%"));

        let r = runner(&[], Some("Mono: Playback 20 [23%] [on]"));
        assert_eq!(AudioBackend::Alsa.volume(&r).as_deref(), Some("23%"));

        let r = runner(&[], None);
        assert_eq!(AudioBackend::PulseAudio.volume(&r), None);
    }
}

//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Settings;

/// Parse and validate the download timeout (1-300 seconds)
fn parse_timeout(s: &str) -> Result<u64, String> {
    let secs: u64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number of seconds", s))?;
    if !(1..=300).contains(&secs) {
        return Err(format!(
            "Timeout must be between 1 and 300 seconds, got {}",
            secs
        ));
    }
    Ok(secs)
}

/// Shows what's playing next to the album art rendered as colored ASCII
#[derive(Parser, Debug)]
#[command(name = "playfetch")]
#[command(version, about = "Now playing info with colored ASCII album art", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Whatever playerctl reports
    playfetch

    # Only look at one player
    playfetch --player spotify

    # Render a specific image instead of the player's artwork
    playfetch --art ~/Music/cover.jpg
    playfetch --art https://example.com/cover.png")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Artwork to render instead of the player's (path, file:// or http(s)://)
    #[arg(long)]
    pub art: Option<String>,

    /// Only query this player (see `playerctl -l`)
    #[arg(long, short)]
    pub player: Option<String>,

    /// Artwork download timeout in seconds
    #[arg(long, value_parser = parse_timeout)]
    pub timeout: Option<u64>,

    /// Hide the color swatch rows
    #[arg(long)]
    pub no_swatches: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

impl Args {
    /// Apply command-line overrides on top of config file settings.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(secs) = self.timeout {
            settings.http_timeout = Duration::from_secs(secs);
        }
        if let Some(player) = &self.player {
            settings.player = Some(player.clone());
        }
        if self.no_swatches {
            settings.swatches = false;
        }
        settings
    }

    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}

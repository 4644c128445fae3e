//! Subcommand handlers for config actions.

use std::path::Path;

use super::args::{Args, ConfigAction};
use crate::config::{default_path, Config, ConfigError, Settings};

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, args: &Args) -> Result<(), ConfigError> {
    let config_path = args.config.clone().unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let config = Config::load(Some(&config_path))?;
            let settings = args.apply(Settings::from(&config));
            print!("{}", describe(&settings, &config_path));
        }
        ConfigAction::Init => {
            Config::init(&config_path)?;
            println!("Created config file: {}", config_path.display());
        }
    }

    Ok(())
}

/// Human-readable summary of the effective settings.
fn describe(settings: &Settings, config_path: &Path) -> String {
    let state = if config_path.exists() {
        "exists"
    } else {
        "not found"
    };

    format!(
        "Current configuration:\n  \
         HTTP timeout: {}s\n  \
         Player: {}\n  \
         Swatches: {}\n\n\
         Config file: {} ({})\n",
        settings.http_timeout.as_secs(),
        settings.player.as_deref().unwrap_or("any"),
        if settings.swatches { "yes" } else { "no" },
        config_path.display(),
        state
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_describe_defaults() {
        let settings = Settings {
            http_timeout: Duration::from_secs(10),
            player: None,
            swatches: true,
        };
        let text = describe(&settings, Path::new("/nonexistent/playfetch.toml"));
        assert!(text.contains("HTTP timeout: 10s"));
        assert!(text.contains("Player: any"));
        assert!(text.contains("Swatches: yes"));
        assert!(text.contains("/nonexistent/playfetch.toml (not found)"));
    }

    #[test]
    fn test_init_then_show() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let path_arg = path.to_str().unwrap();

        let args = Args::parse_from(["playfetch", "--config", path_arg, "config", "init"]);
        handle_config_action(ConfigAction::Init, &args).unwrap();
        assert!(path.exists());

        handle_config_action(ConfigAction::Show, &args).unwrap();

        let err = handle_config_action(ConfigAction::Init, &args).unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists { .. }));
    }
}

use std::io::{self, Write};

use clap::Parser;
use playfetch::ascii::Converter;
use playfetch::cli::{handle_config_action, Args, Command};
use playfetch::config::{Config, Settings};
use playfetch::layout::side_by_side;
use playfetch::media::{MediaInfo, SystemRunner};
use playfetch::panel;

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_filter())
        .init();

    if let Some(Command::Config { action }) = &args.command {
        if let Err(e) = handle_config_action(*action, &args) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let settings = args.apply(Settings::from(&config));
    log::debug!("Settings: {:?}", settings);

    let info = MediaInfo::collect(&SystemRunner, settings.player.as_deref());
    let art_uri = args.art.clone().unwrap_or_else(|| info.art_url.clone());
    log::info!("Rendering artwork from '{}'", art_uri);

    // No placeholder art: either the artwork renders or the run fails.
    let art = match Converter::with_http_timeout(settings.http_timeout).convert(&art_uri) {
        Ok(lines) => lines,
        Err(e) => {
            log::debug!("Artwork conversion failed ({}): {:?}", e.kind(), e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let panel = panel::build(&info, settings.swatches);
    let mut stdout = io::stdout().lock();
    for line in side_by_side(&art, &panel) {
        if writeln!(stdout, "{}", line).is_err() {
            // stdout closed (e.g. piped into `head`)
            break;
        }
    }
}

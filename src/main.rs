//! birthday-tui - a birthday tribute slideshow for the terminal
//!
//! This is the main entry point. It uses the Component Architecture pattern
//! from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod model;
mod services;
mod tui;

use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::model::Content;
use crate::tui::Tui;
use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "birthday-tui", version)]
#[command(about = "A birthday tribute slideshow for the terminal")]
struct Args {
    /// YAML file with the page copy and asset paths
    #[arg(long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Directory that photo and video paths resolve against
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Config file (defaults to ~/.birthday-tui/config.json)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Command used to open photos and videos
    #[arg(long, value_name = "CMD")]
    player: Option<String>,
}

impl Args {
    /// Command line values win over the config file
    fn apply(&self, config: &mut Config) {
        if let Some(ref content) = self.content {
            config.content_path = Some(content.display().to_string());
        }
        if let Some(ref assets) = self.assets {
            config.asset_root = Some(assets.display().to_string());
        }
        if let Some(ref player) = self.player {
            config.media_player = Some(player.clone());
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = match Config::config_dir() {
        Some(dir) => match services::logging::init(&dir.join("logs")) {
            Ok((guard, path)) => {
                tracing::info!(log = %path.display(), "logging started");
                Some(guard)
            }
            Err(e) => {
                eprintln!("Warning: logging disabled: {:#}", e);
                None
            }
        },
        None => None,
    };

    let mut config = load_config(args.config.as_deref());
    args.apply(&mut config);

    let content = match config.content_path.as_deref() {
        Some(path) => match Content::load(Path::new(path)) {
            Ok(content) => content,
            Err(err) => {
                tracing::error!(error = %err, "content failed to load");
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        },
        None => Content::default(),
    };
    let asset_root = asset_root(&config);
    tracing::info!(asset_root = %asset_root.display(), "starting");

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(config.tick_rate());
    tui.enter()?;
    tui.set_title(&content.site.title)?;

    let mut app = App::new(&config, content, asset_root);
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        tracing::error!(error = %err, "exited with error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    tracing::info!("goodbye");
    Ok(())
}

/// Load the config, writing the defaults on first run so there is a file to edit
fn load_config(explicit: Option<&Path>) -> Config {
    if let Some(path) = explicit {
        return Config::load_from(path);
    }
    let config = Config::load();
    if let Some(path) = Config::config_path() {
        if !path.exists() {
            if let Err(e) = config.save_to(&path) {
                tracing::warn!(path = %path.display(), error = %e, "could not write default config");
            }
        }
    }
    config
}

/// Asset root: configured directory, else next to the content file, else the
/// working directory
fn asset_root(config: &Config) -> PathBuf {
    if let Some(ref root) = config.asset_root {
        return PathBuf::from(root);
    }
    config
        .content_path
        .as_deref()
        .and_then(|path| Path::new(path).parent())
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                tracing::error!(error = %e, "draw failed");
            }
        })?;

        // Check for pending media
        if let Some(path) = app.pending_media.take() {
            launch_media_viewer(tui, app, &path)?;
            continue; // Redraw after the viewer closes
        }

        // Poll for events, then run due tasks
        let event = tui.next_event()?;
        app.step(event, Instant::now())?;
    }

    Ok(())
}

/// Open a photo or video in the external viewer
fn launch_media_viewer(tui: &mut Tui, app: &mut App, path: &Path) -> Result<()> {
    let program = services::viewer_program(app.media_player.as_deref());

    // Suspend the TUI
    tui.suspend()?;

    let status = services::viewer_command(&program, path).status();

    // Resume the TUI
    tui.resume()?;

    match status {
        Ok(exit_status) => {
            if !exit_status.success() {
                tracing::warn!(%program, status = %exit_status, "viewer exited with failure");
                app.error = Some(format!("Viewer exited with status: {}", exit_status));
            }
        }
        Err(e) => {
            tracing::warn!(%program, error = %e, "viewer failed to start");
            app.error = Some(format!("Failed to launch viewer '{}': {}", program, e));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let args = Args::parse_from([
            "birthday-tui",
            "--content",
            "tribute/content.yaml",
            "--player",
            "mpv --fs",
        ]);
        let mut config = Config {
            media_player: Some("vlc".to_string()),
            asset_root: Some("/srv/public".to_string()),
            ..Config::default()
        };
        args.apply(&mut config);

        assert_eq!(config.content_path.as_deref(), Some("tribute/content.yaml"));
        assert_eq!(config.media_player.as_deref(), Some("mpv --fs"));
        assert_eq!(config.asset_root.as_deref(), Some("/srv/public"));
    }

    #[test]
    fn test_asset_root_fallbacks() {
        let mut config = Config::default();
        assert_eq!(asset_root(&config), PathBuf::from("."));

        config.content_path = Some("content.yaml".to_string());
        assert_eq!(asset_root(&config), PathBuf::from("."));

        config.content_path = Some("tribute/content.yaml".to_string());
        assert_eq!(asset_root(&config), PathBuf::from("tribute"));

        config.asset_root = Some("public".to_string());
        assert_eq!(asset_root(&config), PathBuf::from("public"));
    }

    #[test]
    fn test_explicit_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "tick_rate_ms": 20 }"#).unwrap();

        let config = load_config(Some(&path));
        assert_eq!(config.tick_rate_ms, 20);
        assert_eq!(config.overlay_duration_ms, 3000);
    }
}

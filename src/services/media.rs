//! Opening photos and videos in an external viewer

use std::path::{Path, PathBuf};
use std::process::Command;

/// Environment variable naming a viewer command
pub const PLAYER_ENV: &str = "BIRTHDAY_TUI_PLAYER";

/// Resolve an asset path against the asset root
///
/// Web-style absolute paths (`/photos/x.jpg`) are relative to the root.
pub fn resolve_asset(root: &Path, asset: &str) -> PathBuf {
    root.join(asset.trim_start_matches('/'))
}

/// Pick the viewer: configured command, then `$BIRTHDAY_TUI_PLAYER`, then
/// the platform opener
pub fn viewer_program(configured: Option<&str>) -> String {
    configured
        .filter(|p| !p.trim().is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var(PLAYER_ENV).ok().filter(|p| !p.trim().is_empty()))
        .unwrap_or_else(|| platform_opener().to_string())
}

fn platform_opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}

/// Build the command that opens `file`
///
/// The program string may carry arguments (`"mpv --fs"`); it is split on
/// whitespace and the file is appended last.
pub fn viewer_command(program: &str, file: &Path) -> Command {
    let mut parts = program.split_whitespace();
    let binary = parts.next().unwrap_or(program);
    let mut cmd = Command::new(binary);
    cmd.args(parts);
    cmd.arg(file);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_web_path() {
        let path = resolve_asset(Path::new("/srv/public"), "/photos/IMG_7136.jpeg");
        assert_eq!(path, PathBuf::from("/srv/public/photos/IMG_7136.jpeg"));
    }

    #[test]
    fn test_resolve_relative_path() {
        let path = resolve_asset(Path::new("assets"), "videos/vid1.mp4");
        assert_eq!(path, PathBuf::from("assets/videos/vid1.mp4"));
    }

    #[test]
    fn test_configured_viewer_wins() {
        assert_eq!(viewer_program(Some("mpv")), "mpv");
    }

    #[test]
    fn test_blank_configured_viewer_is_ignored() {
        assert_ne!(viewer_program(Some("  ")), "  ");
    }

    #[test]
    fn test_viewer_command_splits_arguments() {
        let cmd = viewer_command("mpv --fs --loop", Path::new("/tmp/vid1.mp4"));
        assert_eq!(cmd.get_program(), "mpv");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec!["--fs", "--loop", "/tmp/vid1.mp4"]);
    }
}

use anyhow::{Result, anyhow};
use ratatui::crossterm::{
    ExecutableCommand,
    cursor::MoveToColumn,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::{
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

pub mod app_core;
pub mod config;
pub mod domain;
pub mod key_handler;
pub mod player;
pub mod tui;
pub mod ui_state;

#[cfg(test)]
mod test_utils;

pub use config::Settings;
pub use player::PlayerController;
pub use ui_state::{PlayerSession, TrackSelector};

// ~30fps
pub const REFRESH_RATE: Duration = Duration::from_millis(33);

pub const CONFIG_DIRECTORY: &str = "playdeck";
pub const CONFIG_FILE: &str = "config.toml";
pub const LOG_FILE: &str = "playdeck.log";

pub fn clamp_volume(value: f64) -> f64 {
    match value.is_nan() {
        true => 0.0,
        false => value.clamp(0.0, 1.0),
    }
}

/// Clamp a seek target into `[0, duration]`. An unknown (zero) duration
/// pins every target to `0`.
pub fn clamp_position(target: f64, duration: f64) -> f64 {
    match target.is_nan() {
        true => 0.0,
        false => target.clamp(0.0, duration.max(0.0)),
    }
}

pub enum DurationStyle {
    Compact,
    CompactMillis,
}

pub fn get_readable_duration(duration: Duration, style: DurationStyle) -> String {
    let mut secs = duration.as_secs();
    let centis = duration.subsec_millis() / 10;
    let mins = secs / 60;
    secs %= 60;

    match style {
        DurationStyle::Compact => format!("{mins}:{secs:02}"),
        DurationStyle::CompactMillis => format!("{mins}:{secs:02}.{centis:02}"),
    }
}

/// Like [`get_readable_duration`], for the float seconds the player works in.
pub fn readable_secs(secs: f64, style: DurationStyle) -> String {
    let secs = match secs.is_finite() {
        true => secs.max(0.0),
        false => 0.0,
    };
    get_readable_duration(Duration::from_secs_f64(secs), style)
}

pub fn overwrite_line(message: &str) {
    let mut stdout = std::io::stdout();
    let _ = stdout
        .execute(MoveToColumn(0))
        .and_then(|out| out.execute(Clear(ClearType::CurrentLine)))
        .and_then(|out| out.execute(Print(message)));
    let _ = stdout.flush();
}

pub fn expand_tilde<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    if path_str == "~" {
        return Err(anyhow!("A media source must be a file, not the home directory!"));
    }

    if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        let home =
            dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory!"))?;
        return Ok(home.join(&path_str[2..]));
    }

    Err(anyhow!("Error reading path with tilde (~): {path_str}"))
}

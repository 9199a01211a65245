use crate::{
    CONFIG_DIRECTORY, CONFIG_FILE, LOG_FILE,
    domain::TrackDescriptor,
    expand_tilde,
    player::{Preferences, VolumePolicy},
};
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::Deserialize;
use std::{
    fs::{File, OpenOptions},
    path::{Path, PathBuf},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Virtual,
    Rodio,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default = "default_skip")]
    pub skip_seconds: f64,
    #[serde(default = "default_volume_step")]
    pub volume_step: f64,
    #[serde(default = "default_scrub_step")]
    pub scrub_step: f64,

    #[serde(default = "default_volume")]
    pub volume: f64,
    #[serde(default)]
    pub muted: bool,
    #[serde(default)]
    pub volume_policy: VolumePolicy,

    #[serde(default)]
    pub backend: BackendKind,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Where log lines go. The terminal belongs to the UI, so never stderr.
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    #[serde(default)]
    pub tracks: Vec<TrackDescriptor>,
}

const DEFAULT_SKIP: f64 = 10.0;
const DEFAULT_VOLUME_STEP: f64 = 0.05;
const DEFAULT_SCRUB_STEP: f64 = 1.0;

const fn default_skip() -> f64 {
    DEFAULT_SKIP
}

const fn default_volume_step() -> f64 {
    DEFAULT_VOLUME_STEP
}

const fn default_scrub_step() -> f64 {
    DEFAULT_SCRUB_STEP
}

const fn default_volume() -> f64 {
    1.0
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            skip_seconds: DEFAULT_SKIP,
            volume_step: DEFAULT_VOLUME_STEP,
            scrub_step: DEFAULT_SCRUB_STEP,

            volume: default_volume(),
            muted: false,
            volume_policy: VolumePolicy::default(),

            backend: BackendKind::default(),
            log_level: default_log_level(),
            log_file: None,

            tracks: Vec::new(),
        }
    }
}

impl Settings {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIRECTORY).join(CONFIG_FILE))
    }

    /// Read `explicit` if given, else the default location if it exists,
    /// else fall back to defaults.
    pub fn load(explicit: Option<PathBuf>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from_file(path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file_str = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;

        let mut settings = toml::from_str::<Settings>(&file_str)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        if let Some(base) = path.parent() {
            settings.resolve_paths(base)?;
        }
        Ok(settings)
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            volume: crate::clamp_volume(self.volume),
            is_muted: self.muted,
        }
    }

    /// Unknown names fall back to `Info`.
    pub fn log_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// `log_file` if set, else `playdeck.log` in the local data directory.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            dirs::data_local_dir().map(|dir| dir.join(CONFIG_DIRECTORY).join(LOG_FILE))
        })
    }

    /// Open the log file for appending, creating its directory. `None` when
    /// no location can be determined.
    pub fn open_log_file(&self) -> Result<Option<File>> {
        let Some(path) = self.log_path() else {
            return Ok(None);
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Could not create log directory {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Could not open log file {}", path.display()))?;

        Ok(Some(file))
    }

    /// Relative track sources and log file are taken relative to the config file.
    fn resolve_paths(&mut self, base: &Path) -> Result<()> {
        if let Some(log_file) = self.log_file.take() {
            let expanded = expand_tilde(log_file)?;
            self.log_file = Some(match expanded.is_relative() {
                true => base.join(expanded),
                false => expanded,
            });
        }

        self.tracks = self
            .tracks
            .iter()
            .map(|track| {
                let expanded = expand_tilde(track.source())?;
                let resolved = match expanded.is_relative() {
                    true => base.join(expanded),
                    false => expanded,
                };
                Ok(TrackDescriptor::new(
                    track.id(),
                    track.title(),
                    resolved.to_string_lossy(),
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_yields_defaults() {
        let settings: Settings = toml::from_str("").unwrap();

        assert_eq!(settings.skip_seconds, 10.0);
        assert_eq!(settings.volume_step, 0.05);
        assert_eq!(settings.volume, 1.0);
        assert!(!settings.muted);
        assert_eq!(settings.volume_policy, VolumePolicy::Coupled);
        assert_eq!(settings.backend, BackendKind::Virtual);
        assert_eq!(settings.log_filter(), LevelFilter::Info);
        assert!(settings.tracks.is_empty());
    }

    #[test]
    fn parses_full_document() {
        let doc = r#"
            skip_seconds = 5.0
            volume = 0.6
            muted = true
            volume_policy = "independent"
            backend = "rodio"
            log_level = "debug"

            [[tracks]]
            id = 1
            title = "Video 01"
            source = "/media/video01.mp4"

            [[tracks]]
            id = 2
            title = "Video 02"
            source = "/media/video02.mp4"
        "#;
        let settings: Settings = toml::from_str(doc).unwrap();

        assert_eq!(settings.skip_seconds, 5.0);
        assert_eq!(settings.volume_policy, VolumePolicy::Independent);
        assert_eq!(settings.backend, BackendKind::Rodio);
        assert_eq!(settings.log_filter(), LevelFilter::Debug);
        assert_eq!(settings.tracks.len(), 2);
        assert_eq!(settings.tracks[1].title(), "Video 02");

        let prefs = settings.preferences();
        assert_eq!(prefs.volume, 0.6);
        assert!(prefs.is_muted);
    }

    #[test]
    fn unknown_policy_is_an_error() {
        assert!(toml::from_str::<Settings>("volume_policy = \"loud\"").is_err());
    }

    #[test]
    fn out_of_range_volume_is_clamped_in_preferences() {
        let settings: Settings = toml::from_str("volume = 3.0").unwrap();
        assert_eq!(settings.preferences().volume, 1.0);
    }

    #[test]
    fn relative_sources_resolve_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[[tracks]]\nid = 1\ntitle = \"Clip\"\nsource = \"assets/video01.mp4\"\n\n\
             [[tracks]]\nid = 2\ntitle = \"Abs\"\nsource = \"/srv/video02.mp4\""
        )
        .unwrap();

        let settings = Settings::load_from_file(&path).unwrap();

        assert_eq!(
            PathBuf::from(settings.tracks[0].source()),
            dir.path().join("assets/video01.mp4")
        );
        assert_eq!(settings.tracks[1].source(), "/srv/video02.mp4");
    }

    #[test]
    fn logs_default_to_data_dir_and_resolve_relative_paths() {
        let settings = Settings::default();
        if let Some(data) = dirs::data_local_dir() {
            assert_eq!(
                settings.log_path(),
                Some(data.join("playdeck").join("playdeck.log"))
            );
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_file = \"logs/deck.log\"").unwrap();

        let settings = Settings::load_from_file(&path).unwrap();
        assert_eq!(settings.log_path(), Some(dir.path().join("logs/deck.log")));

        let mut file = settings.open_log_file().unwrap().unwrap();
        writeln!(file, "first").unwrap();
        let mut file = settings.open_log_file().unwrap().unwrap();
        writeln!(file, "second").unwrap();

        let written = std::fs::read_to_string(dir.path().join("logs/deck.log")).unwrap();
        assert_eq!(written, "first\nsecond\n");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Settings::load(Some(dir.path().join("nope.toml"))).is_err());
    }
}

use crate::player::{MediaBackend, MediaEvent, Notifier};
use anyhow::{Context, Result, anyhow};
use lofty::prelude::AudioFile;
use log::debug;
use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

/// Media backend that plays nothing but keeps time.
///
/// Duration comes from the file's own headers, position from the wall clock.
/// Useful on machines without an audio device, and for video sources the
/// terminal cannot render anyway.
pub struct VirtualMedia {
    notifier: Notifier,
    source: Option<PathBuf>,

    duration: f64,
    position: f64,
    paused: bool,
    volume: f64,
    muted: bool,
    fullscreen: bool,

    last_tick: Instant,
}

impl VirtualMedia {
    pub fn new() -> Self {
        VirtualMedia {
            notifier: Notifier::new(),
            source: None,

            duration: 0.0,
            position: 0.0,
            paused: true,
            volume: 1.0,
            muted: false,
            fullscreen: false,

            last_tick: Instant::now(),
        }
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    fn open(&mut self, source: PathBuf, duration: Duration) {
        self.source = Some(source);
        self.duration = duration.as_secs_f64();
        self.notifier.emit(MediaEvent::MetadataReady(self.duration));
    }

    fn advance(&mut self, elapsed: Duration) {
        if self.paused || self.source.is_none() {
            return;
        }

        self.position += elapsed.as_secs_f64();
        if self.position >= self.duration {
            self.position = self.duration;
            self.paused = true;
            self.notifier.emit(MediaEvent::TimeAdvanced(self.position));
            self.notifier.emit(MediaEvent::Ended);
            debug!("virtual playback reached the end");
        } else {
            self.notifier.emit(MediaEvent::TimeAdvanced(self.position));
        }
    }
}

impl Default for VirtualMedia {
    fn default() -> Self {
        Self::new()
    }
}

fn probe_duration(path: &Path) -> Result<Duration> {
    let tagged_file = lofty::read_from_path(path)
        .with_context(|| format!("Unable to read media headers of {}", path.display()))?;
    Ok(tagged_file.properties().duration())
}

impl MediaBackend for VirtualMedia {
    fn load(&mut self, source: &str) -> Result<()> {
        self.paused = true;
        self.position = 0.0;
        self.duration = 0.0;
        self.source = None;

        let path = PathBuf::from(source);
        let duration = probe_duration(&path)?;
        self.open(path, duration);
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        if self.source.is_none() {
            return Err(anyhow!("No source loaded"));
        }
        // Playing from the end starts over
        if self.duration > 0.0 && self.position >= self.duration {
            self.position = 0.0;
        }
        self.paused = false;
        self.last_tick = Instant::now();
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn set_position(&mut self, secs: f64) {
        if self.source.is_none() {
            return;
        }
        self.position = secs.clamp(0.0, self.duration);
        self.notifier.emit(MediaEvent::TimeAdvanced(self.position));
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn supports_fullscreen(&self) -> bool {
        true
    }

    fn request_fullscreen(&mut self) {
        self.fullscreen = true;
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn exit_fullscreen(&mut self) {
        self.fullscreen = false;
    }

    fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.advance(elapsed);
    }

    fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}

//! Scriptable media backend for unit tests.

use crate::player::{MediaBackend, MediaEvent, Notifier};
use anyhow::{Result, anyhow};
use std::{cell::RefCell, rc::Rc};

#[derive(Debug)]
pub struct FakeState {
    pub loaded: Option<String>,
    pub load_count: usize,
    pub paused: bool,
    pub position: f64,
    pub duration: f64,
    pub volume: f64,
    pub muted: bool,
    pub fullscreen: bool,
    pub ticks: usize,

    pub reject_play: bool,
    pub fail_load: bool,
    /// Duration announced synchronously from `load`, if any.
    pub metadata_on_load: Option<f64>,
}

impl Default for FakeState {
    fn default() -> Self {
        FakeState {
            loaded: None,
            load_count: 0,
            paused: true,
            position: 0.0,
            duration: 0.0,
            volume: 1.0,
            muted: false,
            fullscreen: false,
            ticks: 0,

            reject_play: false,
            fail_load: false,
            metadata_on_load: None,
        }
    }
}

pub struct FakeMedia {
    state: Rc<RefCell<FakeState>>,
    notifier: Notifier,
    fullscreen_capable: bool,
}

/// Test-side view of a [`FakeMedia`] that stays usable after the backend
/// has been moved into a controller.
#[derive(Clone)]
pub struct FakeHandle {
    pub state: Rc<RefCell<FakeState>>,
    pub notifier: Notifier,
}

impl FakeMedia {
    pub fn new() -> (Self, FakeHandle) {
        let state = Rc::new(RefCell::new(FakeState::default()));
        let notifier = Notifier::new();
        let handle = FakeHandle {
            state: Rc::clone(&state),
            notifier: notifier.clone(),
        };

        (
            FakeMedia {
                state,
                notifier,
                fullscreen_capable: true,
            },
            handle,
        )
    }

    pub fn without_fullscreen() -> (Self, FakeHandle) {
        let (mut media, handle) = Self::new();
        media.fullscreen_capable = false;
        (media, handle)
    }

    pub fn boxed(self) -> Box<dyn MediaBackend> {
        Box::new(self)
    }
}

impl FakeHandle {
    /// Announce a duration the way a real element does after loading.
    pub fn metadata(&self, duration: f64) {
        self.state.borrow_mut().duration = duration;
        self.notifier.emit(MediaEvent::MetadataReady(duration));
    }

    pub fn advance_to(&self, position: f64) {
        self.state.borrow_mut().position = position;
        self.notifier.emit(MediaEvent::TimeAdvanced(position));
    }

    pub fn end(&self) {
        self.state.borrow_mut().paused = true;
        self.notifier.emit(MediaEvent::Ended);
    }

    pub fn set_paused(&self, paused: bool) {
        self.state.borrow_mut().paused = paused;
    }

    pub fn reject_play(&self, reject: bool) {
        self.state.borrow_mut().reject_play = reject;
    }

    pub fn paused(&self) -> bool {
        self.state.borrow().paused
    }

    pub fn position(&self) -> f64 {
        self.state.borrow().position
    }

    pub fn volume(&self) -> f64 {
        self.state.borrow().volume
    }

    pub fn muted(&self) -> bool {
        self.state.borrow().muted
    }

    pub fn loaded(&self) -> Option<String> {
        self.state.borrow().loaded.clone()
    }

    pub fn listeners(&self) -> usize {
        self.notifier.listener_count()
    }
}

impl MediaBackend for FakeMedia {
    fn load(&mut self, source: &str) -> Result<()> {
        let announce = {
            let mut state = self.state.borrow_mut();
            state.load_count += 1;
            state.paused = true;
            state.position = 0.0;
            state.duration = 0.0;

            if state.fail_load {
                state.loaded = None;
                return Err(anyhow!("cannot open {source}"));
            }
            state.loaded = Some(source.to_string());
            state.metadata_on_load
        };

        if let Some(duration) = announce {
            self.state.borrow_mut().duration = duration;
            self.notifier.emit(MediaEvent::MetadataReady(duration));
        }
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.reject_play {
            return Err(anyhow!("play() request was rejected"));
        }
        state.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.state.borrow_mut().paused = true;
    }

    fn is_paused(&self) -> bool {
        self.state.borrow().paused
    }

    fn position(&self) -> f64 {
        self.state.borrow().position
    }

    fn set_position(&mut self, secs: f64) {
        self.state.borrow_mut().position = secs;
    }

    fn duration(&self) -> f64 {
        self.state.borrow().duration
    }

    fn set_volume(&mut self, volume: f64) {
        self.state.borrow_mut().volume = volume;
    }

    fn set_muted(&mut self, muted: bool) {
        self.state.borrow_mut().muted = muted;
    }

    fn supports_fullscreen(&self) -> bool {
        self.fullscreen_capable
    }

    fn request_fullscreen(&mut self) {
        self.state.borrow_mut().fullscreen = true;
    }

    fn is_fullscreen(&self) -> bool {
        self.state.borrow().fullscreen
    }

    fn exit_fullscreen(&mut self) {
        self.state.borrow_mut().fullscreen = false;
    }

    fn tick(&mut self) {
        self.state.borrow_mut().ticks += 1;
    }

    fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}

/// A two-track UI bound to a fresh fake backend.
pub fn fake_ui() -> (crate::ui_state::UiState, FakeHandle) {
    use crate::{
        Settings,
        domain::TrackDescriptor,
        player::{Preferences, VolumePolicy},
        ui_state::{ControlSteps, PlayerSession, TrackSelector, UiState},
    };

    let (media, handle) = FakeMedia::new();
    let selector = TrackSelector::new(vec![
        TrackDescriptor::new(1, "Video 01", "/media/video01.mp4"),
        TrackDescriptor::new(2, "Video 02", "/media/video02.mp4"),
    ])
    .unwrap();
    let session = PlayerSession::new(
        media.boxed(),
        selector,
        Preferences::default(),
        VolumePolicy::Coupled,
    );
    let steps = ControlSteps::from(&Settings::default());
    (UiState::new(session, steps), handle)
}

use crate::{
    Settings,
    domain::TrackDescriptor,
    player::{PlaybackSnapshot, VolumePolicy},
    ui_state::{Mode, PlayerSession},
};
use anyhow::Error;

/// Increments the control surface applies per key press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSteps {
    pub skip: f64,
    pub scrub: f64,
    pub volume: f64,
}

impl From<&Settings> for ControlSteps {
    fn from(settings: &Settings) -> Self {
        ControlSteps {
            skip: settings.skip_seconds.abs(),
            scrub: settings.scrub_step.abs(),
            volume: settings.volume_step.abs(),
        }
    }
}

pub struct UiState {
    pub(crate) session: PlayerSession,
    pub(crate) steps: ControlSteps,

    mode: Mode,
    notice: Option<String>,
}

impl UiState {
    pub fn new(session: PlayerSession, steps: ControlSteps) -> Self {
        UiState {
            session,
            steps,
            mode: Mode::default(),
            notice: None,
        }
    }

    /// Pull notifications into the controller and lift any new notice.
    pub fn sync(&mut self) {
        self.session.poll();
        if let Some(notice) = self.session.controller_mut().take_notice() {
            self.notice = Some(notice);
        }
    }

    pub fn get_mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode
    }

    pub fn set_error(&mut self, e: Error) {
        self.notice = Some(e.to_string());
    }

    pub fn get_notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Leave fullscreen first; a second press clears the notice.
    pub fn soft_reset(&mut self) {
        match self.is_fullscreen() {
            true => self.session.controller_mut().exit_fullscreen(),
            false => self.clear_notice(),
        }
    }

    pub fn volume_policy(&self) -> VolumePolicy {
        self.session.controller().policy()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.session.controller().is_fullscreen()
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.session.snapshot()
    }

    pub fn tracks(&self) -> &[TrackDescriptor] {
        self.session.selector().tracks()
    }

    pub fn active_index(&self) -> usize {
        self.session.selector().active_index()
    }

    pub fn now_playing(&self) -> &TrackDescriptor {
        self.session.selector().active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fake_ui;

    #[test]
    fn steps_follow_settings() {
        let steps = ControlSteps::from(&Settings::default());
        assert_eq!(steps.skip, 10.0);
        assert_eq!(steps.scrub, 1.0);
        assert_eq!(steps.volume, 0.05);
    }

    #[test]
    fn sync_lifts_playback_failures_into_notice() {
        let (mut ui, handle) = fake_ui();
        handle.reject_play(true);

        ui.session.controller_mut().play_pause();
        ui.sync();

        assert!(ui.get_notice().is_some());
        ui.sync();
        assert!(ui.get_notice().is_some());

        ui.soft_reset();
        assert!(ui.get_notice().is_none());
    }

    #[test]
    fn soft_reset_leaves_fullscreen_before_clearing_notice() {
        let (mut ui, _handle) = fake_ui();
        ui.set_error(anyhow::anyhow!("boom"));
        ui.session.controller_mut().request_fullscreen();

        ui.soft_reset();
        assert!(!ui.is_fullscreen());
        assert_eq!(ui.get_notice(), Some("boom"));

        ui.soft_reset();
        assert!(ui.get_notice().is_none());
    }
}

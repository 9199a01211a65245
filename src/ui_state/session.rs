use crate::{
    player::{MediaBackend, PlaybackSnapshot, PlayerController, Preferences, VolumePolicy},
    ui_state::TrackSelector,
};
use log::{info, warn};

/// A track selector paired with the controller bound to its active track.
///
/// Changing the active track throws the controller away and mounts a fresh
/// one on the same backend. Only volume and mute survive the switch.
pub struct PlayerSession {
    selector: TrackSelector,
    controller: PlayerController,
    policy: VolumePolicy,
}

impl PlayerSession {
    pub fn new(
        backend: Box<dyn MediaBackend>,
        selector: TrackSelector,
        prefs: Preferences,
        policy: VolumePolicy,
    ) -> Self {
        let controller = PlayerController::mount(backend, selector.active().source(), prefs, policy);

        PlayerSession {
            selector,
            controller,
            policy,
        }
    }

    pub fn selector(&self) -> &TrackSelector {
        &self.selector
    }

    pub fn controller(&self) -> &PlayerController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PlayerController {
        &mut self.controller
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.controller.snapshot()
    }

    pub fn poll(&mut self) {
        self.controller.poll();
    }

    pub fn select_index(&mut self, idx: usize) {
        if self.selector.select_index(idx) {
            self.rebind();
        }
    }

    pub fn next(&mut self) {
        let before = self.selector.active_index();
        if self.selector.next() != before {
            self.rebind();
        }
    }

    pub fn previous(&mut self) {
        let before = self.selector.active_index();
        if self.selector.previous() != before {
            self.rebind();
        }
    }

    fn rebind(&mut self) {
        let prefs = self.controller.preferences();

        let Some(backend) = self.controller.unmount() else {
            warn!("track change with no media bound");
            return;
        };

        let track = self.selector.active();
        info!("switching to track {} ({})", track.id(), track.title());

        self.controller = PlayerController::mount(backend, track.source(), prefs, self.policy);
    }
}

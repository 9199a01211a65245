use super::{
    MediaBackend, MediaEvent, PlaybackSnapshot, PlaybackState, Preferences, Subscription,
    VolumePolicy,
};
use crate::{clamp_position, clamp_volume};
use log::{debug, info, warn};

/// Keeps a [`PlaybackState`] in step with one bound media backend.
///
/// A controller without a backend is valid: every command on it is a no-op.
/// The subscription opened in [`mount`](Self::mount) is closed again by
/// [`unmount`](Self::unmount) or on drop, whichever comes first.
pub struct PlayerController {
    backend: Option<Box<dyn MediaBackend>>,
    subscription: Option<Subscription>,
    state: PlaybackState,
    policy: VolumePolicy,
}

impl PlayerController {
    pub fn new(policy: VolumePolicy) -> Self {
        PlayerController {
            backend: None,
            subscription: None,
            state: PlaybackState::default(),
            policy,
        }
    }

    /// Bind `backend` to `source`, carrying over the session's volume and mute.
    ///
    /// A source that fails to load still leaves the controller bound, with
    /// the failure reported through [`take_notice`](Self::take_notice).
    pub fn mount(
        mut backend: Box<dyn MediaBackend>,
        source: &str,
        prefs: Preferences,
        policy: VolumePolicy,
    ) -> Self {
        let volume = clamp_volume(prefs.volume);
        let prefs = Preferences {
            volume,
            is_muted: prefs.is_muted || (policy == VolumePolicy::Coupled && volume == 0.0),
        };
        let mut state = PlaybackState::with_preferences(prefs);

        // Subscribe first: some backends announce metadata from inside `load`
        let subscription = backend.notifier().subscribe();

        backend.set_volume(state.volume);
        backend.set_muted(state.is_muted);

        match backend.load(source) {
            Ok(()) => info!("mounted player on {source}"),
            Err(e) => {
                warn!("failed to load {source}: {e}");
                state.notice = Some(format!("Could not load {source}: {e}"));
            }
        }

        PlayerController {
            backend: Some(backend),
            subscription: Some(subscription),
            state,
            policy,
        }
    }

    /// Release the subscription, then hand the backend back to the caller.
    pub fn unmount(&mut self) -> Option<Box<dyn MediaBackend>> {
        if let Some(mut subscription) = self.subscription.take() {
            debug!("closing subscription {}", subscription.id());
            subscription.close();
        }

        let backend = self.backend.take();
        if let Some(backend) = &backend {
            if !backend.is_paused() {
                debug!("unmounting while media is still playing");
            }
            info!("player unmounted");
        }
        backend
    }

    pub fn is_bound(&self) -> bool {
        self.backend.is_some()
    }

    pub fn policy(&self) -> VolumePolicy {
        self.policy
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.state.snapshot()
    }

    pub fn preferences(&self) -> Preferences {
        self.state.preferences()
    }

    pub fn notice(&self) -> Option<&str> {
        self.state.notice.as_deref()
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.state.notice.take()
    }
}

// ==============
//    COMMANDS
// ==============
impl PlayerController {
    /// Toggle based on the backend's own paused flag, never the cached one.
    pub fn play_pause(&mut self) {
        let Some(backend) = self.backend.as_mut() else {
            debug!("play/pause ignored: no media bound");
            return;
        };

        match backend.is_paused() {
            true => match backend.play() {
                Ok(()) => self.state.is_playing = true,
                Err(e) => {
                    warn!("playback start failed: {e}");
                    self.state.is_playing = false;
                    self.state.notice = Some(format!("Playback failed: {e}"));
                }
            },
            false => {
                backend.pause();
                self.state.is_playing = false;
            }
        }
    }

    pub fn seek_relative(&mut self, delta: f64) {
        let delta = match delta.is_nan() {
            true => 0.0,
            false => delta,
        };
        self.seek_absolute(self.state.position + delta);
    }

    /// Clamped to `[0, duration]`. With no duration known yet that range is
    /// just `0`.
    pub fn seek_absolute(&mut self, target: f64) {
        let Some(backend) = self.backend.as_mut() else {
            debug!("seek ignored: no media bound");
            return;
        };

        let position = clamp_position(target, self.state.duration);
        backend.set_position(position);
        self.state.position = position;
    }

    pub fn set_volume(&mut self, value: f64) {
        let Some(backend) = self.backend.as_mut() else {
            debug!("volume change ignored: no media bound");
            return;
        };

        let volume = clamp_volume(value);
        backend.set_volume(volume);
        self.state.volume = volume;

        if self.policy == VolumePolicy::Coupled {
            let muted = volume == 0.0;
            backend.set_muted(muted);
            self.state.is_muted = muted;
        }
    }

    /// Flip mute. The stored volume is left alone.
    pub fn toggle_mute(&mut self) {
        let Some(backend) = self.backend.as_mut() else {
            debug!("mute toggle ignored: no media bound");
            return;
        };

        let muted = !self.state.is_muted;
        backend.set_muted(muted);
        self.state.is_muted = muted;
    }

    pub fn request_fullscreen(&mut self) {
        match self.backend.as_mut() {
            Some(backend) if backend.supports_fullscreen() => backend.request_fullscreen(),
            Some(_) => debug!("fullscreen not supported by this backend"),
            None => debug!("fullscreen ignored: no media bound"),
        }
    }

    pub fn exit_fullscreen(&mut self) {
        if let Some(backend) = self.backend.as_mut() {
            if backend.is_fullscreen() {
                backend.exit_fullscreen();
            }
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.backend.as_ref().is_some_and(|b| b.is_fullscreen())
    }
}

// ===================
//    NOTIFICATIONS
// ===================
impl PlayerController {
    /// Let the backend advance, then apply whatever it reported.
    pub fn poll(&mut self) {
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        backend.tick();

        let events = match &self.subscription {
            Some(subscription) if subscription.is_open() => subscription.drain(),
            _ => return,
        };

        for event in events {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::MetadataReady(duration) => {
                self.state.duration = match duration.is_finite() {
                    true => duration.max(0.0),
                    false => 0.0,
                };
                self.state.position = clamp_position(self.state.position, self.state.duration);
            }
            // Authoritative: overwrites any optimistic seek
            MediaEvent::TimeAdvanced(position) => {
                let position = match position.is_nan() {
                    true => 0.0,
                    false => position.max(0.0),
                };
                self.state.position = match self.state.duration > 0.0 {
                    true => position.min(self.state.duration),
                    false => position,
                };
            }
            MediaEvent::Ended => self.state.is_playing = false,
        }
    }
}

impl Drop for PlayerController {
    fn drop(&mut self) {
        self.unmount();
    }
}

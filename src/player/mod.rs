mod backend_virtual;
mod controller;
mod notifier;
mod state;

#[cfg(feature = "rodio")]
mod backend_rodio;

use anyhow::Result;
use serde::Deserialize;

#[cfg(feature = "rodio")]
pub use backend_rodio::RodioMedia;
pub use backend_virtual::VirtualMedia;
pub use controller::PlayerController;
pub use notifier::{Notifier, Subscription, SubscriptionId};
pub use state::{PlaybackSnapshot, PlaybackState, Preferences};

/// Notifications posted by a media backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Duration of the loaded source is known (seconds).
    MetadataReady(f64),
    /// Playback position moved (seconds).
    TimeAdvanced(f64),
    /// Playback ran off the end of the source.
    Ended,
}

/// How volume changes interact with the mute flag.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumePolicy {
    /// Zero volume mutes, any other volume unmutes.
    #[default]
    Coupled,
    /// Volume and mute never touch each other.
    Independent,
}

/// The media collaborator a [`PlayerController`] drives.
///
/// Implementors own the authoritative playback state. Commands are
/// fire-and-forget; results come back through the [`Notifier`].
pub trait MediaBackend {
    fn load(&mut self, source: &str) -> Result<()>;

    /// May be refused (autoplay policy, no output device, nothing loaded).
    fn play(&mut self) -> Result<()>;
    fn pause(&mut self);
    fn is_paused(&self) -> bool;

    fn position(&self) -> f64;
    fn set_position(&mut self, secs: f64);
    /// `0.0` until the source's metadata is known.
    fn duration(&self) -> f64;

    fn set_volume(&mut self, volume: f64);
    fn set_muted(&mut self, muted: bool);

    fn supports_fullscreen(&self) -> bool {
        false
    }
    fn request_fullscreen(&mut self) {}
    fn is_fullscreen(&self) -> bool {
        false
    }
    fn exit_fullscreen(&mut self) {}

    /// Called once per frame so polling backends can post notifications.
    fn tick(&mut self) {}

    fn notifier(&self) -> &Notifier;
}
